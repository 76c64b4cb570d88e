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

use crate::storage::builders::{ListFiles, ListFilesBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`ListFiles`] request builder for the bucket root, or for a
    /// folder given with `.path(..)`.
    ///
    /// To execute the request, call [`ListFiles::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`ListFilesResponse`](crate::storage::response::ListFilesResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::types::{SearchOptions, StorageApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let resp = client
    ///         .from("docs")
    ///         .list()
    ///         .path("guides")
    ///         .options(SearchOptions::builder().limit(10).build())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     for file in resp.files() {
    ///         println!("{} {:?}", file.name, file.size());
    ///     }
    /// }
    /// ```
    pub fn list(&self) -> ListFilesBldr {
        ListFiles::builder().client(self.clone())
    }
}
