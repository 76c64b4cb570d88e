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

use crate::storage::builders::{EmptyBucket, EmptyBucketBldr};
use crate::storage::client::StorageClient;

impl StorageClient {
    /// Creates an [`EmptyBucket`] request builder, which removes all objects
    /// of the bucket. Emptying an already empty bucket succeeds.
    ///
    /// To execute the request, call [`EmptyBucket::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing an [`EmptyBucketResponse`](crate::storage::response::EmptyBucketResponse).
    pub fn empty_bucket<S: Into<String>>(&self, bucket_id: S) -> EmptyBucketBldr {
        EmptyBucket::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }
}
