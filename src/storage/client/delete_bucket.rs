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

use crate::storage::builders::{DeleteBucket, DeleteBucketBldr};
use crate::storage::client::StorageClient;
use crate::storage::error::Error;
use crate::storage::response::{DeleteBucketResponse, EmptyBucketResponse};
use crate::storage::types::StorageApi;

impl StorageClient {
    /// Creates a [`DeleteBucket`] request builder.
    ///
    /// To execute the request, call [`DeleteBucket::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`DeleteBucketResponse`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::response::DeleteBucketResponse;
    /// use supabase_storage::storage::response_traits::HasBucketId;
    /// use supabase_storage::storage::types::StorageApi;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = StorageClient::new(
    ///         "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///         [("apikey", "secret")],
    ///     )
    ///     .unwrap();
    ///     let resp: DeleteBucketResponse =
    ///         client.delete_bucket("avatars").build().send().await.unwrap();
    ///     println!("bucket '{}' is removed", resp.bucket_id());
    /// }
    /// ```
    pub fn delete_bucket<S: Into<String>>(&self, bucket_id: S) -> DeleteBucketBldr {
        DeleteBucket::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }

    /// Removes every object of a bucket, then deletes the bucket.
    ///
    /// The two requests are independent; if the delete fails the bucket stays
    /// in place, empty.
    pub async fn empty_and_delete_bucket<S: Into<String>>(
        &self,
        bucket_id: S,
    ) -> Result<DeleteBucketResponse, Error> {
        let bucket_id: String = bucket_id.into();

        let _resp: EmptyBucketResponse = self.empty_bucket(&bucket_id).build().send().await?;
        self.delete_bucket(bucket_id).build().send().await
    }
}
