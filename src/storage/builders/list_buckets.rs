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
use crate::storage::response::ListBucketsResponse;
use crate::storage::types::{StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the list buckets operation.
///
/// This struct constructs the parameters required for the [`StorageClient::list_buckets`](crate::storage::client::StorageClient::list_buckets) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListBuckets {
    #[builder(!default)] // force required
    client: StorageClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
}

/// Builder type alias for [`ListBuckets`].
///
/// Constructed via [`ListBuckets::builder()`](ListBuckets::builder) and used to build a [`ListBuckets`] instance.
pub type ListBucketsBldr = ListBucketsBuilder<((StorageClient,), ())>;

impl StorageApi for ListBuckets {
    type StorageResponse = ListBucketsResponse;
}

impl ToStorageRequest for ListBuckets {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        Ok(StorageRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .path("bucket")
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
