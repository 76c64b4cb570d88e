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
use supabase_storage::storage::response::{
    CreateBucketResponse, DeleteBucketResponse, EmptyBucketResponse, GetBucketResponse,
    UpdateBucketResponse,
};
use supabase_storage::storage::response_traits::HasBucketId;
use supabase_storage::storage::types::{BucketOptions, StorageApi};
use supabase_storage_common::test_context::TestContext;
use supabase_storage_common::utils::{bucket_json, error_json, rand_bucket_name};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_and_get_bucket() {
    let ctx = TestContext::new_mock().await;
    let bucket_id = rand_bucket_name();

    Mock::given(method("POST"))
        .and(path(ctx.path("bucket")))
        .and(body_json(json!({
            "id": bucket_id,
            "name": bucket_id,
            "public": true,
            "file_size_limit": 1048576,
            "allowed_mime_types": ["image/png", "image/jpeg"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": bucket_id})))
        .expect(1)
        .mount(ctx.server())
        .await;

    Mock::given(method("GET"))
        .and(path(ctx.path(&format!("bucket/{bucket_id}"))))
        .respond_with(ResponseTemplate::new(200).set_body_json(bucket_json(&bucket_id, true)))
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp: CreateBucketResponse = ctx
        .client
        .create_bucket(&bucket_id)
        .options(
            BucketOptions::builder()
                .public(true)
                .file_size_limit(1048576)
                .allowed_mime_types(vec!["image/png".into(), "image/jpeg".into()])
                .build(),
        )
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.name(), bucket_id);
    assert_eq!(resp.bucket_id(), bucket_id);

    let resp: GetBucketResponse = ctx.client.get_bucket(&bucket_id).build().send().await.unwrap();
    assert_eq!(resp.bucket().id, bucket_id);
    assert!(resp.bucket().public);
}

#[tokio::test]
async fn create_existing_bucket_conflicts() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("bucket")))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_json(
            "409",
            "Duplicate",
            "The resource already exists",
        )))
        .mount(ctx.server())
        .await;

    let err = ctx
        .client
        .create_bucket("avatars")
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(err.error_response().unwrap().error(), "Duplicate");
}

#[tokio::test]
async fn get_missing_bucket() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("GET"))
        .and(path(ctx.path("bucket/missing")))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_json(
            "404",
            "Bucket not found",
            "Bucket not found",
        )))
        .mount(ctx.server())
        .await;

    let err = ctx
        .client
        .get_bucket("missing")
        .build()
        .send()
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn update_empty_delete_bucket() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("PUT"))
        .and(path(ctx.path("bucket/avatars")))
        .and(body_json(json!({"id": "avatars", "name": "avatars", "public": false})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully updated"})),
        )
        .expect(1)
        .mount(ctx.server())
        .await;
    Mock::given(method("POST"))
        .and(path(ctx.path("bucket/avatars/empty")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully emptied"})),
        )
        .expect(2)
        .mount(ctx.server())
        .await;
    Mock::given(method("DELETE"))
        .and(path(ctx.path("bucket/avatars")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully deleted"})),
        )
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp: UpdateBucketResponse = ctx
        .client
        .update_bucket("avatars")
        .options(BucketOptions::default())
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.message(), "Successfully updated");

    // emptying twice succeeds both times
    for _ in 0..2 {
        let resp: EmptyBucketResponse =
            ctx.client.empty_bucket("avatars").build().send().await.unwrap();
        assert_eq!(resp.message(), "Successfully emptied");
    }

    let resp: DeleteBucketResponse = ctx
        .client
        .delete_bucket("avatars")
        .build()
        .send()
        .await
        .unwrap();
    assert_eq!(resp.message(), "Successfully deleted");
    assert_eq!(resp.bucket_id(), "avatars");
}

#[tokio::test]
async fn delete_non_empty_bucket_fails() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("DELETE"))
        .and(path(ctx.path("bucket/docs")))
        .respond_with(ResponseTemplate::new(409).set_body_json(error_json(
            "409",
            "InvalidRequest",
            "The bucket you tried to delete is not empty",
        )))
        .mount(ctx.server())
        .await;

    let err = ctx
        .client
        .delete_bucket("docs")
        .build()
        .send()
        .await
        .unwrap_err();
    assert_eq!(
        err.error_response().unwrap().message(),
        "The bucket you tried to delete is not empty"
    );
}

#[tokio::test]
async fn empty_and_delete_bucket() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("bucket/docs/empty")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully emptied"})),
        )
        .expect(1)
        .mount(ctx.server())
        .await;
    Mock::given(method("DELETE"))
        .and(path(ctx.path("bucket/docs")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Successfully deleted"})),
        )
        .expect(1)
        .mount(ctx.server())
        .await;

    let resp = ctx.client.empty_and_delete_bucket("docs").await.unwrap();
    assert_eq!(resp.message(), "Successfully deleted");
}

#[tokio::test]
async fn empty_and_delete_stops_when_empty_fails() {
    let ctx = TestContext::new_mock().await;

    Mock::given(method("POST"))
        .and(path(ctx.path("bucket/docs/empty")))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_json(
            "404",
            "Bucket not found",
            "Bucket not found",
        )))
        .mount(ctx.server())
        .await;
    Mock::given(method("DELETE"))
        .and(path(ctx.path("bucket/docs")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(ctx.server())
        .await;

    let err = ctx.client.empty_and_delete_bucket("docs").await.unwrap_err();
    assert!(err.is_not_found());
}
