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

use crate::storage::builders::{GetBucket, GetBucketBldr};
use crate::storage::client::StorageClient;

impl StorageClient {
    /// Creates a [`GetBucket`] request builder.
    ///
    /// To execute the request, call [`GetBucket::send()`](crate::storage::types::StorageApi::send),
    /// which returns a [`Result`] containing a [`GetBucketResponse`](crate::storage::response::GetBucketResponse).
    /// An unknown bucket fails with an error whose kind is
    /// [`ErrorKind::NotFound`](crate::storage::error::ErrorKind::NotFound).
    pub fn get_bucket<S: Into<String>>(&self, bucket_id: S) -> GetBucketBldr {
        GetBucket::builder()
            .client(self.clone())
            .bucket_id(bucket_id)
    }
}
