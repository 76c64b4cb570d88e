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

use crate::storage::response::ObjectKeyBody;
use crate::storage::response_traits::{HasBucketId, HasObjectPath};
use crate::storage::types::StorageRequest;
use crate::{impl_from_storage_json_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of
/// [copy_file()](crate::storage::client::FileClient::copy_file)
/// API
#[derive(Clone, Debug)]
pub struct CopyFileResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    object: ObjectKeyBody,
}

impl_has_storage_fields!(CopyFileResponse);
impl_from_storage_json_response!(CopyFileResponse, object: ObjectKeyBody);

impl HasBucketId for CopyFileResponse {}
impl HasObjectPath for CopyFileResponse {}

impl CopyFileResponse {
    /// Key of the new copy.
    pub fn key(&self) -> &str {
        &self.object.key
    }
}
