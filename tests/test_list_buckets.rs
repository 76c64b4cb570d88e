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
use supabase_storage::storage::error::ErrorKind;
use supabase_storage::storage::response::ListBucketsResponse;
use supabase_storage::storage::types::StorageApi;
use supabase_storage_common::test_context::{MOCK_API_KEY, TestContext};
use supabase_storage_common::utils::{bucket_json, error_json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_buckets() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket")))
        .and(header("apikey", MOCK_API_KEY))
        .and(header("authorization", format!("Bearer {MOCK_API_KEY}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            bucket_json("avatars", true),
            bucket_json("documents", false),
            bucket_json("archive", false),
        ])))
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp: ListBucketsResponse = ctx.client.list_buckets().build().send().await.unwrap();

    let names: Vec<&str> = resp.buckets().iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["avatars", "documents", "archive"]);
    assert!(resp.buckets()[0].public);
    assert!(!resp.buckets()[1].public);
}

#[tokio::test]
async fn list_buckets_server_error() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket")))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_json(
            "500",
            "internal",
            "database unavailable",
        )))
        .mount(ctx.server())
        .await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();

    assert_eq!(err.kind(), Some(ErrorKind::ServerError));
    assert_eq!(err.status(), Some(500));
    let resp = err.error_response().unwrap();
    assert_eq!(resp.error(), "internal");
    assert_eq!(resp.message(), "database unavailable");
}

#[tokio::test]
async fn list_buckets_unauthorized() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket")))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json(
            "403",
            "Unauthorized",
            "invalid signature",
        )))
        .mount(ctx.server())
        .await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();

    // the body's statusCode decides the kind, not the HTTP status
    assert_eq!(err.kind(), Some(ErrorKind::Forbidden));
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.error_response().unwrap().status_code(), "403");
}
