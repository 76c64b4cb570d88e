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

use crate::storage::builders::{DownloadFile, DownloadFileBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`DownloadFile`] request builder for the object at `path`.
    ///
    /// To execute the request, call [`DownloadFile::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`DownloadFileResponse`](crate::storage::response::DownloadFileResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::types::{StorageApi, TransformOptions};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let resp = client
    ///         .from("images")
    ///         .download("cat.png")
    ///         .transform(TransformOptions::builder().width(128).build())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{} bytes", resp.content().len());
    /// }
    /// ```
    pub fn download<S: Into<String>>(&self, path: S) -> DownloadFileBldr {
        DownloadFile::builder().client(self.clone()).path(path)
    }
}
