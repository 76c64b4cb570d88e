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

use crate::storage::builders::{UpdateBucket, UpdateBucketBldr};
use crate::storage::client::StorageClient;

impl StorageClient {
    /// Creates an [`UpdateBucket`] request builder.
    ///
    /// To execute the request, call [`UpdateBucket::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing an [`UpdateBucketResponse`](crate::storage::response::UpdateBucketResponse).
    pub fn update_bucket<S: Into<String>>(&self, bucket_id: S) -> UpdateBucketBldr {
        UpdateBucket::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }
}
