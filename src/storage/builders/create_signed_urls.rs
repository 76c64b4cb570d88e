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

use crate::storage::builders::create_signed_url::download_param;
use crate::storage::client::FileClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::CreateSignedUrlsResponse;
use crate::storage::types::{RequestBody, StorageApi, StorageRequest, ToStorageRequest};
use crate::storage::utils::{check_bucket_id, url_encode};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSignedUrlsBody<'a> {
    expires_in: u64,
    paths: &'a [String],
}

/// Argument builder for creating time limited URLs to several files at once.
///
/// This struct constructs the parameters required for the [`FileClient::create_signed_urls`](crate::storage::client::FileClient::create_signed_urls) method.
/// A path the service cannot sign comes back with an error instead of a URL.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateSignedUrls {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(!default)] // force required
    paths: Vec<String>,
    /// Seconds until the URLs stop working.
    #[builder(!default)] // force required
    expires_in: u64,
    #[builder(default)]
    download: bool,
    #[builder(default, setter(into, strip_option))]
    file_name: Option<String>,
}

/// Builder type alias for [`CreateSignedUrls`].
///
/// Constructed via [`CreateSignedUrls::builder()`](CreateSignedUrls::builder) and used to build a [`CreateSignedUrls`] instance.
pub type CreateSignedUrlsBldr =
    CreateSignedUrlsBuilder<((FileClient,), (), (Vec<String>,), (u64,), (), ())>;

impl StorageApi for CreateSignedUrls {
    type StorageResponse = CreateSignedUrlsResponse;
}

impl ToStorageRequest for CreateSignedUrls {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;
        if self.paths.is_empty() {
            return Err(ValidationErr::EmptyPathList);
        }

        let body = RequestBody::json(&CreateSignedUrlsBody {
            expires_in: self.expires_in,
            paths: &self.paths,
        })?;

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::POST)
            .path(format!("object/sign/{}", url_encode(&bucket_id)))
            .bucket_id(bucket_id)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .download(download_param(self.download, self.file_name))
            .build())
    }
}
