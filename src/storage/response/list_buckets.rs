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

use crate::storage::types::{Bucket, StorageRequest};
use crate::{impl_from_storage_json_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of
/// [list_buckets()](crate::storage::client::StorageClient::list_buckets)
/// API
#[derive(Clone, Debug)]
pub struct ListBucketsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    buckets: Vec<Bucket>,
}

impl_has_storage_fields!(ListBucketsResponse);
impl_from_storage_json_response!(ListBucketsResponse, buckets: Vec<Bucket>);

impl ListBucketsResponse {
    /// Buckets in the order the service returned them.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }
}
