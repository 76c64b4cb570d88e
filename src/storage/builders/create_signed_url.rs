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

use crate::storage::client::FileClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::CreateSignedUrlResponse;
use crate::storage::types::{
    RequestBody, StorageApi, StorageRequest, ToStorageRequest, TransformOptions,
};
use crate::storage::utils::{check_bucket_id, trim_slashes, url_encode, urlencode_object_path};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSignedUrlBody<'a> {
    expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    transform: Option<&'a TransformOptions>,
}

/// Argument builder for creating a time limited URL to one file.
///
/// This struct constructs the parameters required for the [`FileClient::create_signed_url`](crate::storage::client::FileClient::create_signed_url) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateSignedUrl {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    path: String,
    /// Seconds until the URL stops working.
    #[builder(!default)] // force required
    expires_in: u64,
    #[builder(default, setter(strip_option))]
    transform: Option<TransformOptions>,
    /// Make the URL trigger a download instead of inline display.
    #[builder(default)]
    download: bool,
    /// File name the browser saves the download as; ignored unless `download` is set.
    #[builder(default, setter(into, strip_option))]
    file_name: Option<String>,
}

/// Builder type alias for [`CreateSignedUrl`].
///
/// Constructed via [`CreateSignedUrl::builder()`](CreateSignedUrl::builder) and used to build a [`CreateSignedUrl`] instance.
pub type CreateSignedUrlBldr =
    CreateSignedUrlBuilder<((FileClient,), (), (String,), (u64,), (), (), ())>;

impl StorageApi for CreateSignedUrl {
    type StorageResponse = CreateSignedUrlResponse;
}

impl ToStorageRequest for CreateSignedUrl {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;

        let body = RequestBody::json(&CreateSignedUrlBody {
            expires_in: self.expires_in,
            transform: self.transform.as_ref(),
        })?;

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::POST)
            .path(format!(
                "object/sign/{}/{}",
                url_encode(&bucket_id),
                urlencode_object_path(trim_slashes(&self.path))
            ))
            .bucket_id(bucket_id)
            .object_path(self.path)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .download(download_param(self.download, self.file_name))
            .build())
    }
}

/// Value of the `download` query parameter: the file name, or empty for the
/// object's own name.
pub(crate) fn download_param(download: bool, file_name: Option<String>) -> Option<String> {
    download.then(|| file_name.unwrap_or_default())
}
