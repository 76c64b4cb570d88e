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

use crate::storage::builders::upload_file::file_request;
use crate::storage::client::FileClient;
use crate::storage::error::ValidationErr;
use crate::storage::multimap_ext::Multimap;
use crate::storage::response::UpdateFileResponse;
use crate::storage::types::{File, FileOptions, StorageApi, StorageRequest, ToStorageRequest};
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for replacing the content of an existing file.
///
/// This struct constructs the parameters required for the [`FileClient::update`](crate::storage::client::FileClient::update) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct UpdateFile {
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

/// Builder type alias for [`UpdateFile`].
///
/// Constructed via [`UpdateFile::builder()`](UpdateFile::builder) and used to build a [`UpdateFile`] instance.
pub type UpdateFileBldr = UpdateFileBuilder<((FileClient,), (), (String,), (File,), ())>;

impl StorageApi for UpdateFile {
    type StorageResponse = UpdateFileResponse;
}

impl ToStorageRequest for UpdateFile {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        file_request(
            Method::PUT,
            self.client,
            self.extra_headers,
            self.path,
            self.file,
            self.options,
        )
    }
}
