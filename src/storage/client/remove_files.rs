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

use crate::storage::builders::{RemoveFiles, RemoveFilesBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`RemoveFiles`] request builder deleting every object in `paths`.
    ///
    /// To execute the request, call [`RemoveFiles::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`RemoveFilesResponse`](crate::storage::response::RemoveFilesResponse).
    pub fn remove<I, S>(&self, paths: I) -> RemoveFilesBldr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RemoveFiles::builder()
            .client(self.clone())
            .paths(paths.into_iter().map(Into::into).collect())
    }
}
