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

use crate::storage::response_traits::HasBucketId;
use crate::storage::types::{FileObject, StorageRequest};
use crate::{impl_from_storage_json_response, impl_has_storage_fields};
use bytes::Bytes;
use http::HeaderMap;

/// Response of
/// [list()](crate::storage::client::FileClient::list)
/// API
#[derive(Clone, Debug)]
pub struct ListFilesResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    files: Vec<FileObject>,
}

impl_has_storage_fields!(ListFilesResponse);
impl_from_storage_json_response!(ListFilesResponse, files: Vec<FileObject>);

impl HasBucketId for ListFilesResponse {}

impl ListFilesResponse {
    /// Entries in the order the service returned them.
    pub fn files(&self) -> &[FileObject] {
        &self.files
    }

    pub fn into_files(self) -> Vec<FileObject> {
        self.files
    }
}
