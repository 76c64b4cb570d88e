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

//! Core traits for storage request and response handling.

use super::storage_request::StorageRequest;
use crate::storage::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete storage HTTP request.
///
/// Implemented by every request builder; [`StorageApi::send`] uses it to turn
/// the builder into a [`StorageRequest`] before the request goes out.
pub trait ToStorageRequest: Sized {
    /// Consumes this request builder and returns a [`StorageRequest`].
    ///
    /// The conversion picks the HTTP method, the path relative to the base
    /// URL, query parameters, per-call headers and the body.
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into typed storage responses.
///
/// Receives the request that was executed along with the HTTP result, so
/// responses can expose request-side values such as the bucket id.
#[async_trait]
pub trait FromStorageResponse: Sized {
    async fn from_storage_response(
        request: StorageRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface for all storage API request builders.
///
/// # Type Parameters
///
/// * `StorageResponse` - The response type produced by [`send`](StorageApi::send).
#[async_trait]
pub trait StorageApi: ToStorageRequest {
    type StorageResponse: FromStorageResponse;

    /// Sends the request and returns the typed response.
    ///
    /// Converts the builder with [`ToStorageRequest::to_storage_request`],
    /// executes it, and decodes the result with
    /// [`FromStorageResponse::from_storage_response`].
    async fn send(self) -> Result<Self::StorageResponse, Error> {
        let req: StorageRequest = self.to_storage_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::StorageResponse::from_storage_response(req, resp).await
    }
}
