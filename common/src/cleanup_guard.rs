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

use supabase_storage::storage::StorageClient;

/// Cleanup guard that empties and removes a bucket
pub struct CleanupGuard {
    client: StorageClient,
    bucket_id: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: StorageClient, bucket_id: S) -> Self {
        Self {
            client,
            bucket_id: bucket_id.into(),
        }
    }

    pub async fn cleanup(&self) {
        cleanup(self.client.clone(), &self.bucket_id).await;
    }
}

pub async fn cleanup(client: StorageClient, bucket_id: &str) {
    tokio::select!(
        _ = tokio::time::sleep(std::time::Duration::from_secs(60)) => {
            eprintln!("Cleanup timeout after 60s while removing bucket {bucket_id}");
        },
        outcome = client.empty_and_delete_bucket(bucket_id) => {
            if let Err(e) = outcome {
                eprintln!("Error removing bucket '{bucket_id}':\n{e}");
            }
        }
    );
}
