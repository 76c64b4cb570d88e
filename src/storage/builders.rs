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

//! Argument builders for [`StorageClient`](crate::storage::client::StorageClient)
//! and [`FileClient`](crate::storage::client::FileClient) APIs

mod copy_file;
mod create_bucket;
mod create_signed_url;
mod create_signed_urls;
mod delete_bucket;
mod download_file;
mod empty_bucket;
mod get_bucket;
mod get_public_url;
mod list_buckets;
mod list_files;
mod move_file;
mod remove_files;
mod update_bucket;
mod update_file;
mod upload_file;

pub use copy_file::*;
pub use create_bucket::*;
pub use create_signed_url::*;
pub use create_signed_urls::*;
pub use delete_bucket::*;
pub use download_file::*;
pub use empty_bucket::*;
pub use get_bucket::*;
pub use get_public_url::*;
pub use list_buckets::*;
pub use list_files::*;
pub use move_file::*;
pub use remove_files::*;
pub use update_bucket::*;
pub use update_file::*;
pub use upload_file::*;

#[cfg(test)]
mod tests {
    use crate::storage::client::StorageClient;
    use crate::storage::error::ValidationErr;
    use crate::storage::types::{
        BucketOptions, File, FileOptions, RequestBody, StorageRequest, ToStorageRequest,
        TransformOptions,
    };
    use http::Method;
    use serde_json::{Value, json};

    fn client() -> StorageClient {
        StorageClient::new(
            "http://localhost:54321/storage/v1".parse().unwrap(),
            [("apikey", "anon")],
        )
        .unwrap()
    }

    fn json_body(req: &StorageRequest) -> Value {
        match req.body() {
            RequestBody::Json(bytes) => serde_json::from_slice(bytes).unwrap(),
            other => panic!("expected a JSON body, got {other:?}"),
        }
    }

    #[test]
    fn test_bucket_requests() {
        let req = client().list_buckets().build().to_storage_request().unwrap();
        assert_eq!(*req.method(), Method::GET);
        assert_eq!(req.path(), "bucket");
        assert!(matches!(req.body(), RequestBody::Empty));

        let req = client()
            .get_bucket("avatars")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::GET);
        assert_eq!(req.path(), "bucket/avatars");

        let req = client()
            .empty_bucket("avatars")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "bucket/avatars/empty");

        let req = client()
            .delete_bucket("avatars")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        assert_eq!(req.path(), "bucket/avatars");
    }

    #[test]
    fn test_create_bucket_body() {
        let req = client()
            .create_bucket("avatars")
            .options(
                BucketOptions::builder()
                    .public(true)
                    .file_size_limit(1024)
                    .allowed_mime_types(vec!["image/png".into()])
                    .build(),
            )
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "bucket");
        assert_eq!(
            json_body(&req),
            json!({
                "id": "avatars",
                "name": "avatars",
                "public": true,
                "file_size_limit": 1024,
                "allowed_mime_types": ["image/png"]
            })
        );

        let req = client()
            .update_bucket("avatars")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::PUT);
        assert_eq!(req.path(), "bucket/avatars");
        assert_eq!(
            json_body(&req),
            json!({"id": "avatars", "name": "avatars", "public": false})
        );
    }

    #[test]
    fn test_empty_bucket_id_is_rejected() {
        let err = client()
            .get_bucket("")
            .build()
            .to_storage_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingBucketId));

        let err = client()
            .from("")
            .list()
            .build()
            .to_storage_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::MissingBucketId));
    }

    #[test]
    fn test_list_files_body() {
        let req = client()
            .from("docs")
            .list()
            .path("guides")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "object/list/docs");
        assert_eq!(
            json_body(&req),
            json!({
                "prefix": "guides",
                "limit": 100,
                "offset": 0,
                "sortBy": {"column": "name", "order": "asc"},
                "search": ""
            })
        );
    }

    #[test]
    fn test_upload_request() {
        let file = File::new("README.md", "# hello").with_content_type("text/markdown");
        let req = client()
            .from("docs")
            .upload("guides/my file.md", file)
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "object/docs/guides/my%20file.md");
        assert_eq!(req.headers().get("x-upsert").unwrap(), "false");
        match req.body() {
            RequestBody::Multipart(part) => {
                assert_eq!(part.file_name, "README.md");
                assert_eq!(part.content_type, "text/markdown");
                assert_eq!(part.cache_control, "3600");
                assert_eq!(&part.data[..], b"# hello");
            }
            other => panic!("expected a multipart body, got {other:?}"),
        }
    }

    #[test]
    fn test_upload_announces_file_name_not_label() {
        let file = File::new("avatar", "png").with_file_name("42.png");
        let req = client()
            .from("avatars")
            .upload("users/42.png", file)
            .build()
            .to_storage_request()
            .unwrap();
        match req.body() {
            RequestBody::Multipart(part) => assert_eq!(part.file_name, "42.png"),
            other => panic!("expected a multipart body, got {other:?}"),
        }
        assert_eq!(req.path(), "object/avatars/users/42.png");
    }

    #[test]
    fn test_update_request_with_options() {
        let req = client()
            .from("docs")
            .update("README.md", File::new("README.md", "v2"))
            .options(
                FileOptions::builder()
                    .upsert(true)
                    .cache_control("60")
                    .content_type("text/plain")
                    .build(),
            )
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::PUT);
        assert_eq!(req.path(), "object/docs/README.md");
        assert_eq!(req.headers().get("x-upsert").unwrap(), "true");
        match req.body() {
            RequestBody::Multipart(part) => {
                assert_eq!(part.content_type, "text/plain");
                assert_eq!(part.cache_control, "60");
            }
            other => panic!("expected a multipart body, got {other:?}"),
        }
    }

    #[test]
    fn test_download_request() {
        let req = client()
            .from("docs")
            .download("/README.md")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::GET);
        assert_eq!(req.path(), "object/docs/README.md");
        assert!(req.query_params.is_empty());

        let req = client()
            .from("images")
            .download("cat.png")
            .transform(TransformOptions::builder().width(64).build())
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.path(), "render/image/authenticated/images/cat.png");
        assert_eq!(req.query_params.get("width").unwrap(), "64");
        assert_eq!(req.query_params.get("resize").unwrap(), "cover");
        assert!(req.query_params.get("height").is_none());
    }

    #[test]
    fn test_remove_request() {
        let req = client()
            .from("docs")
            .remove(["README.md", "guides/intro.md"])
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(*req.method(), Method::DELETE);
        assert_eq!(req.path(), "object/docs");
        assert_eq!(
            json_body(&req),
            json!({"prefixes": ["README.md", "guides/intro.md"]})
        );

        let err = client()
            .from("docs")
            .remove(Vec::<String>::new())
            .build()
            .to_storage_request()
            .unwrap_err();
        assert!(matches!(err, ValidationErr::EmptyPathList));
    }

    #[test]
    fn test_move_and_copy_bodies() {
        let req = client()
            .from("docs")
            .move_file("a.md", "b.md")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.path(), "object/move");
        assert_eq!(
            json_body(&req),
            json!({"bucketId": "docs", "sourceKey": "a.md", "destinationKey": "b.md"})
        );

        let req = client()
            .from("docs")
            .copy_file("a.md", "b.md")
            .destination_bucket("archive")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.path(), "object/copy");
        assert_eq!(
            json_body(&req),
            json!({
                "bucketId": "docs",
                "sourceKey": "a.md",
                "destinationKey": "b.md",
                "destinationBucket": "archive"
            })
        );
    }

    #[test]
    fn test_signed_url_requests() {
        let req = client()
            .from("docs")
            .create_signed_url("README.md", 60)
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.path(), "object/sign/docs/README.md");
        assert_eq!(json_body(&req), json!({"expiresIn": 60}));
        assert!(req.download.is_none());

        let req = client()
            .from("images")
            .create_signed_url("cat.png", 60)
            .transform(TransformOptions::builder().width(10).height(20).build())
            .download(true)
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(
            json_body(&req),
            json!({
                "expiresIn": 60,
                "transform": {
                    "width": 10, "height": 20, "resize": "cover",
                    "quality": 80, "format": "origin"
                }
            })
        );
        assert_eq!(req.download.as_deref(), Some(""));

        let req = client()
            .from("docs")
            .create_signed_urls(["a.md", "b.md"], 120)
            .download(true)
            .file_name("bundle")
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.path(), "object/sign/docs");
        assert_eq!(
            json_body(&req),
            json!({"expiresIn": 120, "paths": ["a.md", "b.md"]})
        );
        assert_eq!(req.download.as_deref(), Some("bundle"));
    }

    #[test]
    fn test_signed_url_quality_capped() {
        let transform = TransformOptions::builder().quality(150).build();
        let req = client()
            .from("images")
            .create_signed_url("cat.png", 60)
            .transform(transform.clone())
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(json_body(&req)["transform"]["quality"], 100);

        let req = client()
            .from("images")
            .download("cat.png")
            .transform(transform)
            .build()
            .to_storage_request()
            .unwrap();
        assert_eq!(req.query_params.get("quality").unwrap(), "100");
    }
}
