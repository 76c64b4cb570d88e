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

//! Response traits for accessing request and response data of storage API calls.
//!
//! Every response struct keeps the [`StorageRequest`] that produced it together
//! with the raw response headers and body. Responses whose body is JSON decode
//! it eagerly, so a malformed body surfaces as [`DecodingErr`] from `send()`
//! rather than from a later accessor.
//!
//! ```rust,ignore
//! impl HasBucketId for ListFilesResponse {}
//!
//! let resp = client.from("docs").list().build().send().await?;
//! println!("{} entries in {}", resp.files().len(), resp.bucket_id());
//! ```

use crate::storage::error::DecodingErr;
use crate::storage::types::StorageRequest;
use bytes::Bytes;
use http::HeaderMap;
use serde::de::DeserializeOwned;

#[macro_export]
/// Implements the `FromStorageResponse` trait for types that keep the body as raw bytes.
macro_rules! impl_from_storage_response {
    ($($ty:ty),* $(,)?) => {
        $(
            #[async_trait::async_trait]
            impl $crate::storage::types::FromStorageResponse for $ty {
                async fn from_storage_response(
                    request: $crate::storage::types::StorageRequest,
                    response: Result<reqwest::Response, $crate::storage::error::Error>,
                ) -> Result<Self, $crate::storage::error::Error> {
                    let mut resp: reqwest::Response = response?;
                    Ok(Self {
                        request,
                        headers: std::mem::take(resp.headers_mut()),
                        body: resp.bytes().await.map_err($crate::storage::error::NetworkError::from)?,
                    })
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `FromStorageResponse` trait for types with one field decoded from a JSON body.
///
/// The second form decodes the body as `$wire` and maps it into the field with `$map`.
macro_rules! impl_from_storage_json_response {
    ($ty:ty, $field:ident: $field_ty:ty) => {
        $crate::impl_from_storage_json_response!($ty, $field: $field_ty, via $field_ty, |v| v);
    };
    ($ty:ty, $field:ident: $field_ty:ty, via $wire:ty, $map:expr) => {
        #[async_trait::async_trait]
        impl $crate::storage::types::FromStorageResponse for $ty {
            async fn from_storage_response(
                request: $crate::storage::types::StorageRequest,
                response: Result<reqwest::Response, $crate::storage::error::Error>,
            ) -> Result<Self, $crate::storage::error::Error> {
                let mut resp: reqwest::Response = response?;
                let headers = std::mem::take(resp.headers_mut());
                let body = resp
                    .bytes()
                    .await
                    .map_err($crate::storage::error::NetworkError::from)?;
                let wire: $wire =
                    $crate::storage::response_traits::decode_json(&body, stringify!($ty))?;
                let $field: $field_ty = ($map)(wire);
                Ok(Self {
                    request,
                    headers,
                    body,
                    $field,
                })
            }
        }
    };
}

#[macro_export]
/// Implements the `HasStorageFields` trait for the specified types.
macro_rules! impl_has_storage_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::storage::response_traits::HasStorageFields for $ty {
                /// The request that was sent to the storage API.
                #[inline]
                fn request(&self) -> &$crate::storage::types::StorageRequest {
                    &self.request
                }

                /// HTTP headers returned by the server.
                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                /// The raw response body.
                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Decodes a JSON response body, tagging failures with the response type.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes, context: &'static str) -> Result<T, DecodingErr> {
    serde_json::from_slice(body).map_err(|source| DecodingErr::Json { context, source })
}

pub trait HasStorageFields {
    /// The request that was sent to the storage API.
    fn request(&self) -> &StorageRequest;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The response body returned by the server.
    fn body(&self) -> &Bytes;
}

/// Returns the id of the bucket the request addressed.
pub trait HasBucketId: HasStorageFields {
    #[inline]
    fn bucket_id(&self) -> &str {
        self.request().bucket_id.as_deref().unwrap_or_default()
    }
}

/// Returns the object path the request addressed.
pub trait HasObjectPath: HasStorageFields {
    #[inline]
    fn object_path(&self) -> &str {
        self.request().object_path.as_deref().unwrap_or_default()
    }
}
