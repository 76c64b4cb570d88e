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

use crate::storage::response::MessageBody;
use crate::storage::response_traits::HasBucketId;
use crate::storage::types::StorageRequest;
use crate::{impl_from_storage_json_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of
/// [delete_bucket()](crate::storage::client::StorageClient::delete_bucket)
/// API
#[derive(Clone, Debug)]
pub struct DeleteBucketResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    message: String,
}

impl_has_storage_fields!(DeleteBucketResponse);
impl_from_storage_json_response!(DeleteBucketResponse, message: String, via MessageBody, |b: MessageBody| {
    b.message
});

impl HasBucketId for DeleteBucketResponse {}

impl DeleteBucketResponse {
    /// Confirmation text reported by the service.
    pub fn message(&self) -> &str {
        &self.message
    }
}
