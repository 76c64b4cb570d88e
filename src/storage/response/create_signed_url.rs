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

use crate::impl_has_storage_fields;
use crate::storage::error::{Error, NetworkError};
use crate::storage::response::absolute_signed_url;
use crate::storage::response_traits::{HasBucketId, HasObjectPath, decode_json};
use crate::storage::types::{FromStorageResponse, StorageRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use std::mem;

#[derive(Debug, Deserialize)]
struct CreateSignedUrlBody {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

/// Response of
/// [create_signed_url()](crate::storage::client::FileClient::create_signed_url)
/// API
#[derive(Clone, Debug)]
pub struct CreateSignedUrlResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    signed_url: String,
}

impl_has_storage_fields!(CreateSignedUrlResponse);

impl HasBucketId for CreateSignedUrlResponse {}
impl HasObjectPath for CreateSignedUrlResponse {}

#[async_trait]
impl FromStorageResponse for CreateSignedUrlResponse {
    async fn from_storage_response(
        request: StorageRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;

        let wire: CreateSignedUrlBody = decode_json(&body, "CreateSignedUrlResponse")?;
        let signed_url = absolute_signed_url(
            request.client.base_url(),
            &wire.signed_url,
            request.download.as_deref(),
        );

        Ok(Self {
            request,
            headers,
            body,
            signed_url,
        })
    }
}

impl CreateSignedUrlResponse {
    /// The absolute signed URL.
    pub fn signed_url(&self) -> &str {
        &self.signed_url
    }
}
