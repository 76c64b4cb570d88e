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

use crate::cleanup_guard::CleanupGuard;
use crate::utils::rand_bucket_name;
use std::sync::Arc;
use supabase_storage::storage::http::BaseUrl;
use supabase_storage::storage::types::{BucketOptions, StorageApi};
use supabase_storage::storage::{StorageClient, StorageClientBuilder};
use wiremock::MockServer;

/// Api key the mock server expects on every request.
pub const MOCK_API_KEY: &str = "test-api-key";

/// Path suffix under which the service is mounted on a project URL.
pub const STORAGE_PATH: &str = "/storage/v1";

#[derive(Clone)]
pub struct TestContext {
    pub client: StorageClient,
    pub base_url: BaseUrl,
    pub api_key: String,
    server: Option<Arc<MockServer>>,
}

impl TestContext {
    /// Starts a mock storage service and returns a client configured for it.
    ///
    /// Mocks are registered with [`mount`](wiremock::Mock::mount) on
    /// [`server()`](TestContext::server) before the call under test.
    pub async fn new_mock() -> Self {
        let server = MockServer::start().await;
        let base_url: BaseUrl = format!("{}{STORAGE_PATH}", server.uri()).parse().unwrap();
        log::debug!("mock storage service at {base_url}");

        let client = StorageClientBuilder::new(base_url.clone())
            .api_key(MOCK_API_KEY)
            .app_info(Some(("storage-tests".into(), "0.1.0".into())))
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            api_key: MOCK_API_KEY.to_string(),
            server: Some(Arc::new(server)),
        }
    }

    /// Returns a client for a running storage service.
    ///
    /// Reads `SERVER_ENDPOINT` (the storage base URL, default a local
    /// development stack) and `API_KEY` (a service role key).
    pub fn new_from_env() -> Self {
        const DEFAULT_SERVER_ENDPOINT: &str = "http://127.0.0.1:54321/storage/v1";

        let host: String =
            std::env::var("SERVER_ENDPOINT").unwrap_or(DEFAULT_SERVER_ENDPOINT.to_string());
        log::debug!("SERVER_ENDPOINT={host}");
        let api_key: String = std::env::var("API_KEY").unwrap_or_default();
        log::debug!("API_KEY=*****");
        let ignore_cert_check: bool = std::env::var("IGNORE_CERT_CHECK")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);
        log::debug!("IGNORE_CERT_CHECK={ignore_cert_check}");

        let base_url: BaseUrl = host.parse().unwrap();
        let client = StorageClientBuilder::new(base_url.clone())
            .api_key(&api_key)
            .ignore_cert_check(Some(ignore_cert_check))
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            api_key,
            server: None,
        }
    }

    /// The mock server behind this context.
    ///
    /// # Panics
    /// When the context talks to a live service.
    pub fn server(&self) -> &MockServer {
        self.server
            .as_deref()
            .expect("context was not created with TestContext::new_mock")
    }

    /// Path of `suffix` below the storage mount, for matching mock requests.
    pub fn path(&self, suffix: &str) -> String {
        format!("{STORAGE_PATH}/{}", suffix.trim_start_matches('/'))
    }

    /// Creates a temporary bucket with an automatic cleanup guard.
    ///
    /// # Returns
    /// A tuple containing:
    /// - `String` - The id of the created bucket.
    /// - `CleanupGuard` - A guard whose [`cleanup`](CleanupGuard::cleanup) empties and deletes the bucket.
    ///
    /// # Example
    /// ```ignore
    /// let (bucket_id, guard) = ctx.create_bucket_helper().await;
    /// println!("Created temporary bucket: {}", bucket_id);
    /// guard.cleanup().await;
    /// ```
    pub async fn create_bucket_helper(&self) -> (String, CleanupGuard) {
        let bucket_id = rand_bucket_name();
        let _resp = self
            .client
            .create_bucket(&bucket_id)
            .options(BucketOptions::builder().public(true).build())
            .build()
            .send()
            .await
            .unwrap();
        let guard = CleanupGuard::new(self.client.clone(), &bucket_id);
        (bucket_id, guard)
    }
}
