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

use crate::storage::builders::{UploadFile, UploadFileBldr};
use crate::storage::client::FileClient;
use crate::storage::types::File;

impl FileClient {
    /// Creates an [`UploadFile`] request builder storing `file` at `path`.
    ///
    /// To execute the request, call [`UploadFile::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing an [`UploadFileResponse`](crate::storage::response::UploadFileResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::types::{File, FileOptions, StorageApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let file = File::new("README.md", "# Hello").with_content_type("text/markdown");
    ///     let resp = client
    ///         .from("docs")
    ///         .upload("README.md", file)
    ///         .options(FileOptions::builder().upsert(true).build())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("stored as '{}'", resp.key());
    /// }
    /// ```
    pub fn upload<S: Into<String>>(&self, path: S, file: File) -> UploadFileBldr {
        UploadFile::builder()
            .client(self.clone())
            .path(path)
            .file(file)
    }
}
