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

use crate::storage::builders::{MoveFile, MoveFileBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`MoveFile`] request builder renaming `from_path` to `to_path`.
    ///
    /// To execute the request, call [`MoveFile::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`MoveFileResponse`](crate::storage::response::MoveFileResponse).
    pub fn move_file<S1: Into<String>, S2: Into<String>>(
        &self,
        from_path: S1,
        to_path: S2,
    ) -> MoveFileBldr {
        MoveFile::builder()
            .client(self.clone())
            .from_path(from_path)
            .to_path(to_path)
    }
}
