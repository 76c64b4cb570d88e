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

use crate::storage::builders::{CreateBucket, CreateBucketBldr};
use crate::storage::client::StorageClient;

impl StorageClient {
    /// Creates a [`CreateBucket`] request builder.
    ///
    /// To execute the request, call [`CreateBucket::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`CreateBucketResponse`](crate::storage::response::CreateBucketResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::response::CreateBucketResponse;
    /// use supabase_storage::storage::types::{BucketOptions, StorageApi};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let resp: CreateBucketResponse = client
    ///         .create_bucket("avatars")
    ///         .options(BucketOptions::builder().public(true).build())
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("created bucket '{}'", resp.name());
    /// }
    /// ```
    pub fn create_bucket<S: Into<String>>(&self, bucket_id: S) -> CreateBucketBldr {
        CreateBucket::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }
}
