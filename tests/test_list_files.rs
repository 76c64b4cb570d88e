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
use supabase_storage::storage::response::ListFilesResponse;
use supabase_storage::storage::types::{SearchOptions, SortBy, SortOrder, StorageApi};
use supabase_storage_common::test_context::TestContext;
use supabase_storage_common::utils::file_object_json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_bucket_root() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("object/list/docs")))
        .and(body_json(json!({
            "prefix": "",
            "limit": 100,
            "offset": 0,
            "sortBy": {"column": "name", "order": "asc"},
            "search": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "guides", "id": null, "updated_at": null, "created_at": null,
             "last_accessed_at": null, "metadata": null},
            file_object_json("docs", "README.md", 52),
        ])))
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp: ListFilesResponse = ctx.client.from("docs").list().build().send().await.unwrap();

    let names: Vec<&str> = resp.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["guides", "README.md"]);
    assert!(resp.files()[0].is_folder());
    assert_eq!(resp.files()[1].size(), Some(52));
    assert_eq!(resp.files()[1].mimetype(), Some("text/plain"));
}

#[tokio::test]
async fn list_folder_with_options() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("object/list/docs")))
        .and(body_json(json!({
            "prefix": "guides",
            "limit": 2,
            "offset": 4,
            "sortBy": {"column": "updated_at", "order": "desc"},
            "search": "intro"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            file_object_json("docs", "intro-2.md", 10),
            file_object_json("docs", "intro-1.md", 20),
        ])))
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp = ctx
        .client
        .from("docs")
        .list()
        .path("guides")
        .options(
            SearchOptions::builder()
                .limit(2)
                .offset(4)
                .sort_by(SortBy {
                    column: "updated_at".into(),
                    order: SortOrder::Desc,
                })
                .search("intro")
                .build(),
        )
        .build()
        .send()
        .await
        .unwrap();

    let files = resp.into_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "intro-2.md");
}

#[tokio::test]
async fn list_empty_bucket() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("object/list/empty")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(ctx.server())
        .await;

    let resp = ctx.client.from("empty").list().build().send().await.unwrap();
    assert!(resp.files().is_empty());
}
