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

use crate::storage::builders::{CreateSignedUrls, CreateSignedUrlsBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`CreateSignedUrls`] request builder for URLs to every path in
    /// `paths`, valid for `expires_in` seconds.
    ///
    /// To execute the request, call [`CreateSignedUrls::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`CreateSignedUrlsResponse`](crate::storage::response::CreateSignedUrlsResponse).
    pub fn create_signed_urls<I, S>(&self, paths: I, expires_in: u64) -> CreateSignedUrlsBldr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CreateSignedUrls::builder()
            .client(self.clone())
            .paths(paths.into_iter().map(Into::into).collect())
            .expires_in(expires_in)
    }
}
