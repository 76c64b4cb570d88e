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
use crate::storage::response::MoveFileResponse;
use crate::storage::types::{RequestBody, StorageApi, StorageRequest, ToStorageRequest};
use crate::storage::utils::check_bucket_id;
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

/// JSON body shared by move and copy.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TransferBody<'a> {
    pub(crate) bucket_id: &'a str,
    pub(crate) source_key: &'a str,
    pub(crate) destination_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) destination_bucket: Option<&'a str>,
}

/// Argument builder for moving (renaming) a file.
///
/// This struct constructs the parameters required for the [`FileClient::move_file`](crate::storage::client::FileClient::move_file) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct MoveFile {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    from_path: String,
    #[builder(setter(into))] // force required + accept Into<String>
    to_path: String,
    /// Move into another bucket instead of within the same one.
    #[builder(default, setter(into, strip_option))]
    destination_bucket: Option<String>,
}

/// Builder type alias for [`MoveFile`].
///
/// Constructed via [`MoveFile::builder()`](MoveFile::builder) and used to build a [`MoveFile`] instance.
pub type MoveFileBldr = MoveFileBuilder<((FileClient,), (), (String,), (String,), ())>;

impl StorageApi for MoveFile {
    type StorageResponse = MoveFileResponse;
}

impl ToStorageRequest for MoveFile {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;

        let body = RequestBody::json(&TransferBody {
            bucket_id: &bucket_id,
            source_key: &self.from_path,
            destination_key: &self.to_path,
            destination_bucket: self.destination_bucket.as_deref(),
        })?;

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::POST)
            .path("object/move")
            .bucket_id(bucket_id)
            .object_path(self.to_path)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
