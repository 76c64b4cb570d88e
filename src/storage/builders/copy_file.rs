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

use crate::storage::builders::move_file::TransferBody;
use crate::storage::client::FileClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::CopyFileResponse;
use crate::storage::types::{RequestBody, StorageApi, StorageRequest, ToStorageRequest};
use crate::storage::utils::check_bucket_id;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for copying a file.
///
/// This struct constructs the parameters required for the [`FileClient::copy_file`](crate::storage::client::FileClient::copy_file) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyFile {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    from_path: String,
    #[builder(setter(into))] // force required + accept Into<String>
    to_path: String,
    /// Copy into another bucket instead of within the same one.
    #[builder(default, setter(into, strip_option))]
    destination_bucket: Option<String>,
}

/// Builder type alias for [`CopyFile`].
///
/// Constructed via [`CopyFile::builder()`](CopyFile::builder) and used to build a [`CopyFile`] instance.
pub type CopyFileBldr = CopyFileBuilder<((FileClient,), (), (String,), (String,), ())>;

impl StorageApi for CopyFile {
    type StorageResponse = CopyFileResponse;
}

impl ToStorageRequest for CopyFile {
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
            .path("object/copy")
            .bucket_id(bucket_id)
            .object_path(self.to_path)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
