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

use crate::storage::builders::{CreateSignedUrl, CreateSignedUrlBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`CreateSignedUrl`] request builder for a URL to `path` that
    /// works for `expires_in` seconds.
    ///
    /// To execute the request, call [`CreateSignedUrl::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`CreateSignedUrlResponse`](crate::storage::response::CreateSignedUrlResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::types::StorageApi;
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
    ///         .create_signed_url("README.md", 3600)
    ///         .download(true)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("{}", resp.signed_url());
    /// }
    /// ```
    pub fn create_signed_url<S: Into<String>>(
        &self,
        path: S,
        expires_in: u64,
    ) -> CreateSignedUrlBldr {
        CreateSignedUrl::builder()
            .client(self.clone())
            .path(path)
            .expires_in(expires_in)
    }
}
