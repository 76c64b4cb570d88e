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

use crate::impl_from_storage_response;
use crate::impl_has_storage_fields;
use crate::storage::response_traits::{HasBucketId, HasObjectPath};
use crate::storage::types::StorageRequest;
use bytes::Bytes;
use http::HeaderMap;

/// Response of
/// [download()](crate::storage::client::FileClient::download)
/// API
#[derive(Clone, Debug)]
pub struct DownloadFileResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
}

impl_has_storage_fields!(DownloadFileResponse);
impl_from_storage_response!(DownloadFileResponse);

impl HasBucketId for DownloadFileResponse {}
impl HasObjectPath for DownloadFileResponse {}

impl DownloadFileResponse {
    /// The object content, byte for byte.
    pub fn content(&self) -> &Bytes {
        &self.body
    }

    pub fn into_content(self) -> Bytes {
        self.body
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}
