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

use futures_util::future::join_all;
use serde_json::json;
use supabase_storage::storage::StorageClientBuilder;
use supabase_storage::storage::error::Error;
use supabase_storage::storage::multimap_ext::{Multimap, MultimapExt};
use supabase_storage::storage::types::StorageApi;
use supabase_storage_common::test_context::TestContext;
use supabase_storage_common::utils::bucket_json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn per_call_headers_override_defaults() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket")))
        .and(header("authorization", "Bearer user-jwt"))
        .and(header("x-request-source", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(ctx.server())
        .await;

    let mut extra = Multimap::new();
    extra.add("Authorization", "Bearer user-jwt");
    extra.add("x-request-source", "tests");

    ctx.client
        .list_buckets()
        .extra_headers(extra)
        .build()
        .send()
        .await
        .unwrap();

    let requests = ctx.server().received_requests().await.unwrap();
    let auth: Vec<_> = requests[0].headers.get_all("authorization").iter().collect();
    assert_eq!(auth.len(), 1);
    assert_eq!(
        requests[0].headers.get("apikey").unwrap(),
        supabase_storage_common::test_context::MOCK_API_KEY
    );
}

#[tokio::test]
async fn custom_default_headers() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket/docs")))
        .and(header("x-client-info", "supabase-storage-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bucket_json("docs", false)))
        .expect(1)
        .mount(ctx.server())
        .await;

    let client = StorageClientBuilder::new(ctx.base_url.clone())
        .api_key(&ctx.api_key)
        .header("x-client-info", "supabase-storage-tests")
        .build()
        .unwrap();

    let resp = client.get_bucket("docs").build().send().await.unwrap();
    assert_eq!(resp.bucket().id, "docs");
}

#[tokio::test]
async fn malformed_success_body_is_a_decoding_error() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(ctx.server())
        .await;

    let err = ctx.client.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Decoding(_)), "{err:?}");
    assert!(err.error_response().is_none());
}

#[tokio::test]
async fn non_json_error_body_keeps_status() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket/docs")))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(ctx.server())
        .await;

    let err = ctx.client.get_bucket("docs").build().send().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let client = StorageClientBuilder::new("http://127.0.0.1:1/storage/v1".parse().unwrap())
        .api_key("key")
        .build()
        .unwrap();

    let err = client.list_buckets().build().send().await.unwrap_err();
    assert!(matches!(err, Error::Network(_)), "{err:?}");
    assert!(err.kind().is_none());
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("object/list/docs")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(16)
        .mount(ctx.server())
        .await;

    let files = ctx.client.from("docs");
    let tasks = (0..16).map(|i| {
        let files = files.clone();
        tokio::spawn(async move {
            files
                .list()
                .path(format!("folder-{i}"))
                .build()
                .send()
                .await
        })
    });

    for result in join_all(tasks).await {
        assert!(result.unwrap().unwrap().files().is_empty());
    }
}
