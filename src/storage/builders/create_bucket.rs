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

use crate::storage::client::StorageClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::CreateBucketResponse;
use crate::storage::types::{
    BucketOptions, RequestBody, StorageApi, StorageRequest, ToStorageRequest,
};
use crate::storage::utils::check_bucket_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// JSON body shared by bucket create and update.
#[derive(Debug, Serialize)]
pub(crate) struct BucketBody<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_size_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_mime_types: Option<&'a [String]>,
}

impl<'a> BucketBody<'a> {
    pub(crate) fn new(bucket_id: &'a str, options: &'a BucketOptions) -> Self {
        BucketBody {
            id: bucket_id,
            name: bucket_id,
            public: options.public,
            file_size_limit: options.file_size_limit,
            allowed_mime_types: options.allowed_mime_types.as_deref(),
        }
    }
}

/// Argument builder for the create bucket operation.
///
/// This struct constructs the parameters required for the [`StorageClient::create_bucket`](crate::storage::client::StorageClient::create_bucket) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateBucket {
    #[builder(!default)] // force required
    client: StorageClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket_id: String,
    #[builder(default)]
    options: BucketOptions,
}

/// Builder type alias for [`CreateBucket`].
///
/// Constructed via [`CreateBucket::builder()`](CreateBucket::builder) and used to build a [`CreateBucket`] instance.
pub type CreateBucketBldr = CreateBucketBuilder<((StorageClient,), (), (String,), ())>;

impl StorageApi for CreateBucket {
    type StorageResponse = CreateBucketResponse;
}

impl ToStorageRequest for CreateBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;

        let body = RequestBody::json(&BucketBody::new(&self.bucket_id, &self.options))?;

        Ok(StorageRequest::builder()
            .client(self.client)
            .method(Method::POST)
            .path("bucket")
            .bucket_id(self.bucket_id)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
