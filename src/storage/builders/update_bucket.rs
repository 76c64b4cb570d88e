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

use crate::storage::builders::create_bucket::BucketBody;
use crate::storage::client::StorageClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::UpdateBucketResponse;
use crate::storage::types::{
    BucketOptions, RequestBody, StorageApi, StorageRequest, ToStorageRequest,
};
use crate::storage::utils::{check_bucket_id, url_encode};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the update bucket operation.
///
/// This struct constructs the parameters required for the [`StorageClient::update_bucket`](crate::storage::client::StorageClient::update_bucket) method.
/// The options replace the bucket's current settings as a whole.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateBucket {
    #[builder(!default)] // force required
    client: StorageClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket_id: String,
    #[builder(default)]
    options: BucketOptions,
}

/// Builder type alias for [`UpdateBucket`].
///
/// Constructed via [`UpdateBucket::builder()`](UpdateBucket::builder) and used to build a [`UpdateBucket`] instance.
pub type UpdateBucketBldr = UpdateBucketBuilder<((StorageClient,), (), (String,), ())>;

impl StorageApi for UpdateBucket {
    type StorageResponse = UpdateBucketResponse;
}

impl ToStorageRequest for UpdateBucket {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        check_bucket_id(&self.bucket_id)?;

        let body = RequestBody::json(&BucketBody::new(&self.bucket_id, &self.options))?;

        Ok(StorageRequest::builder()
            .client(self.client)
            .method(Method::PUT)
            .path(format!("bucket/{}", url_encode(&self.bucket_id)))
            .bucket_id(self.bucket_id)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
