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
/// [upload()](crate::storage::client::FileClient::upload)
/// API
#[derive(Clone, Debug)]
pub struct UploadFileResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    object: ObjectKeyBody,
}

impl_has_storage_fields!(UploadFileResponse);
impl_from_storage_json_response!(UploadFileResponse, object: ObjectKeyBody);

impl HasBucketId for UploadFileResponse {}
impl HasObjectPath for UploadFileResponse {}

impl UploadFileResponse {
    /// Key of the stored object, the bucket id followed by the object path.
    pub fn key(&self) -> &str {
        &self.object.key
    }

    /// Id of the stored object, when the service reports one.
    pub fn id(&self) -> Option<&str> {
        self.object.id.as_deref()
    }
}
