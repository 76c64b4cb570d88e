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
use crate::storage::multimap_ext::{Multimap, MultimapExt};
use crate::storage::response::DownloadFileResponse;
use crate::storage::types::{StorageApi, StorageRequest, ToStorageRequest, TransformOptions};
use crate::storage::utils::{check_bucket_id, trim_slashes, url_encode, urlencode_object_path};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for downloading a file.
///
/// This struct constructs the parameters required for the [`FileClient::download`](crate::storage::client::FileClient::download) method.
/// With a [`TransformOptions`] the image rendering endpoint serves the object.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DownloadFile {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    path: String,
    #[builder(default, setter(strip_option))]
    transform: Option<TransformOptions>,
}

/// Builder type alias for [`DownloadFile`].
///
/// Constructed via [`DownloadFile::builder()`](DownloadFile::builder) and used to build a [`DownloadFile`] instance.
pub type DownloadFileBldr = DownloadFileBuilder<((FileClient,), (), (String,), ())>;

impl StorageApi for DownloadFile {
    type StorageResponse = DownloadFileResponse;
}

impl ToStorageRequest for DownloadFile {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;

        let object = format!(
            "{}/{}",
            url_encode(&bucket_id),
            urlencode_object_path(trim_slashes(&self.path))
        );

        let mut query_params = Multimap::new();
        let path = match &self.transform {
            Some(transform) => {
                for (key, value) in transform.to_query_pairs() {
                    query_params.add(key, value);
                }
                format!("render/image/authenticated/{object}")
            }
            None => format!("object/{object}"),
        };

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::GET)
            .path(path)
            .bucket_id(bucket_id)
            .object_path(self.path)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}
