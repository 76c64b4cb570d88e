// Supabase Storage Rust SDK
// Copyright 2025 The supabase-storage-rs Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde_json::json;
use supabase_storage::storage::error::{Error, ValidationErr};
use supabase_storage::storage::response::RemoveFilesResponse;
use supabase_storage::storage::types::StorageApi;
use supabase_storage_common::test_context::TestContext;
use supabase_storage_common::utils::file_object_json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn remove_files() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("DELETE"))
        .and(path(ctx.path("object/docs")))
        .and(body_json(json!({"prefixes": ["README.md"]})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([file_object_json("docs", "README.md", 52)])),
        )
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp: RemoveFilesResponse = ctx
        .client
        .from("docs")
        .remove(["README.md"])
        .build()
        .send()
        .await
        .unwrap();

    assert_eq!(resp.files().len(), 1);
    assert_eq!(resp.files()[0].name, "README.md");
}

#[tokio::test]
async fn remove_reports_only_deleted() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("DELETE"))
        .and(path(ctx.path("object/docs")))
        .and(body_json(json!({"prefixes": ["a.md", "missing.md"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([file_object_json("docs", "a.md", 1)])),
        )
        .mount(ctx.server())
        .await;

    let resp = ctx
        .client
        .from("docs")
        .remove(vec!["a.md".to_string(), "missing.md".to_string()])
        .build()
        .send()
        .await
        .unwrap();

    let names: Vec<&str> = resp.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.md"]);
}

#[tokio::test]
async fn remove_nothing_is_rejected_locally() {
    let ctx = TestContext::new_mock().await;

    let err = ctx
        .client
        .from("docs")
        .remove(Vec::<String>::new())
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation(ValidationErr::EmptyPathList)));
    assert!(ctx.server().received_requests().await.unwrap().is_empty());
}
