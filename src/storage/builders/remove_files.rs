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
use crate::storage::response::RemoveFilesResponse;
use crate::storage::types::{RequestBody, StorageApi, StorageRequest, ToStorageRequest};
use crate::storage::utils::{check_bucket_id, url_encode};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

#[derive(Debug, Serialize)]
struct RemoveFilesBody<'a> {
    prefixes: &'a [String],
}

/// Argument builder for removing a batch of files.
///
/// This struct constructs the parameters required for the [`FileClient::remove`](crate::storage::client::FileClient::remove) method.
/// Paths the service cannot find are left out of the response; the call
/// itself still succeeds.
#[derive(Clone, Debug, TypedBuilder)]
pub struct RemoveFiles {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(!default)] // force required
    paths: Vec<String>,
}

/// Builder type alias for [`RemoveFiles`].
///
/// Constructed via [`RemoveFiles::builder()`](RemoveFiles::builder) and used to build a [`RemoveFiles`] instance.
pub type RemoveFilesBldr = RemoveFilesBuilder<((FileClient,), (), (Vec<String>,))>;

impl StorageApi for RemoveFiles {
    type StorageResponse = RemoveFilesResponse;
}

impl ToStorageRequest for RemoveFiles {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;
        if self.paths.is_empty() {
            return Err(ValidationErr::EmptyPathList);
        }

        let body = RequestBody::json(&RemoveFilesBody {
            prefixes: &self.paths,
        })?;

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::DELETE)
            .path(format!("object/{}", url_encode(&bucket_id)))
            .bucket_id(bucket_id)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
