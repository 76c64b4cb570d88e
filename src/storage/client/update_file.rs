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

use crate::storage::builders::{UpdateFile, UpdateFileBldr};
use crate::storage::client::FileClient;
use crate::storage::types::File;

impl FileClient {
    /// Creates an [`UpdateFile`] request builder replacing the object at `path` with `file`.
    ///
    /// To execute the request, call [`UpdateFile::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing an [`UpdateFileResponse`](crate::storage::response::UpdateFileResponse).
    pub fn update<S: Into<String>>(&self, path: S, file: File) -> UpdateFileBldr {
        UpdateFile::builder()
            .client(self.clone())
            .path(path)
            .file(file)
    }
}
