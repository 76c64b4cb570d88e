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
use crate::storage::header_constants::X_UPSERT;
use crate::storage::multimap_ext::{Multimap, MultimapExt};
use crate::storage::response::UploadFileResponse;
use crate::storage::types::{
    File, FileOptions, MultipartFile, RequestBody, StorageApi, StorageRequest, ToStorageRequest,
};
use crate::storage::utils::{check_bucket_id, trim_slashes, url_encode, urlencode_object_path};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for uploading a file.
///
/// This struct constructs the parameters required for the [`FileClient::upload`](crate::storage::client::FileClient::upload) method.
/// Unless [`FileOptions::upsert`] is set, the upload fails with a conflict when
/// an object already exists at `path`.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UploadFile {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    path: String,
    #[builder(!default)] // force required
    file: File,
    #[builder(default)]
    options: FileOptions,
}

/// Builder type alias for [`UploadFile`].
///
/// Constructed via [`UploadFile::builder()`](UploadFile::builder) and used to build a [`UploadFile`] instance.
pub type UploadFileBldr = UploadFileBuilder<((FileClient,), (), (String,), (File,), ())>;

impl StorageApi for UploadFile {
    type StorageResponse = UploadFileResponse;
}

impl ToStorageRequest for UploadFile {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        file_request(
            Method::POST,
            self.client,
            self.extra_headers,
            self.path,
            self.file,
            self.options,
        )
    }
}

/// Builds the multipart request shared by upload and update.
pub(crate) fn file_request(
    method: Method,
    client: FileClient,
    extra_headers: Option<Multimap>,
    path: String,
    file: File,
    options: FileOptions,
) -> Result<StorageRequest, ValidationErr> {
    let bucket_id = client.bucket_id().to_string();
    check_bucket_id(&bucket_id)?;

    let mut headers: Multimap = extra_headers.unwrap_or_default();
    if !headers.keys().any(|k| k.eq_ignore_ascii_case(X_UPSERT)) {
        headers.add(X_UPSERT, options.upsert.to_string());
    }

    let body = RequestBody::Multipart(MultipartFile {
        data: file.data,
        file_name: file.file_name,
        content_type: options.content_type.unwrap_or(file.content_type),
        cache_control: options.cache_control,
    });

    Ok(StorageRequest::builder()
        .client(client.client().clone())
        .method(method)
        .path(format!(
            "object/{}/{}",
            url_encode(&bucket_id),
            urlencode_object_path(trim_slashes(&path))
        ))
        .bucket_id(bucket_id)
        .object_path(path)
        .headers(headers)
        .body(body)
        .build())
}
