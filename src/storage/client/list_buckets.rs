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

use crate::storage::builders::{ListBuckets, ListBucketsBldr};
use crate::storage::client::StorageClient;

impl StorageClient {
    /// Creates a [`ListBuckets`] request builder.
    ///
    /// To execute the request, call [`ListBuckets::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`ListBucketsResponse`](crate::storage::response::ListBucketsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::response::ListBucketsResponse;
    /// use supabase_storage::storage::types::StorageApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let resp: ListBucketsResponse = client.list_buckets().build().send().await.unwrap();
    ///     for bucket in resp.buckets() {
    ///         println!("{} (public: {})", bucket.name, bucket.public);
    ///     }
    /// }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsBldr {
        ListBuckets::builder().client(self.clone())
    }
}
