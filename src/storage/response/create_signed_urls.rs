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
use crate::storage::response_traits::{HasBucketId, decode_json};
use crate::storage::types::{FromStorageResponse, SignedUrl, StorageRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use std::mem;

#[derive(Debug, Deserialize)]
struct SignedUrlEntry {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    path: Option<String>,
    #[serde(rename = "signedURL", default)]
    signed_url: Option<String>,
}

/// Response of
/// [create_signed_urls()](crate::storage::client::FileClient::create_signed_urls)
/// API
#[derive(Clone, Debug)]
pub struct CreateSignedUrlsResponse {
    request: StorageRequest,
    headers: HeaderMap,
    body: Bytes,
    signed_urls: Vec<SignedUrl>,
}

impl_has_storage_fields!(CreateSignedUrlsResponse);

impl HasBucketId for CreateSignedUrlsResponse {}

#[async_trait]
impl FromStorageResponse for CreateSignedUrlsResponse {
    async fn from_storage_response(
        request: StorageRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp: reqwest::Response = response?;
        let headers = mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;

        let entries: Vec<SignedUrlEntry> = decode_json(&body, "CreateSignedUrlsResponse")?;
        let base_url = request.client.base_url();
        let download = request.download.as_deref();
        let signed_urls = entries
            .into_iter()
            .map(|e| SignedUrl {
                signed_url: e
                    .signed_url
                    .map(|u| absolute_signed_url(base_url, &u, download)),
                path: e.path,
                error: e.error,
            })
            .collect();

        Ok(Self {
            request,
            headers,
            body,
            signed_urls,
        })
    }
}

impl CreateSignedUrlsResponse {
    /// One entry per requested path, in request order.
    pub fn signed_urls(&self) -> &[SignedUrl] {
        &self.signed_urls
    }

    pub fn into_signed_urls(self) -> Vec<SignedUrl> {
        self.signed_urls
    }
}
