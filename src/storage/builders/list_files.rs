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
use crate::storage::response::ListFilesResponse;
use crate::storage::types::{
    RequestBody, SearchOptions, StorageApi, StorageRequest, ToStorageRequest,
};
use crate::storage::utils::{check_bucket_id, url_encode};
use http::Method;
use serde::Serialize;
use typed_builder::TypedBuilder;

#[derive(Debug, Serialize)]
struct ListFilesBody<'a> {
    prefix: &'a str,
    #[serde(flatten)]
    options: &'a SearchOptions,
}

/// Argument builder for listing the files of a bucket.
///
/// This struct constructs the parameters required for the [`FileClient::list`](crate::storage::client::FileClient::list) method.
/// Only the direct children of `path` are listed; nested folders show up as
/// entries without an id.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListFiles {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    /// Folder to list, the bucket root when unset.
    #[builder(default, setter(into, strip_option))]
    path: Option<String>,
    #[builder(default)]
    options: SearchOptions,
}

/// Builder type alias for [`ListFiles`].
///
/// Constructed via [`ListFiles::builder()`](ListFiles::builder) and used to build a [`ListFiles`] instance.
pub type ListFilesBldr = ListFilesBuilder<((FileClient,), (), (), ())>;

impl StorageApi for ListFiles {
    type StorageResponse = ListFilesResponse;
}

impl ToStorageRequest for ListFiles {
    fn to_storage_request(self) -> Result<StorageRequest, ValidationErr> {
        let bucket_id = self.client.bucket_id().to_string();
        check_bucket_id(&bucket_id)?;

        let body = RequestBody::json(&ListFilesBody {
            prefix: self.path.as_deref().unwrap_or_default(),
            options: &self.options,
        })?;

        Ok(StorageRequest::builder()
            .client(self.client.client().clone())
            .method(Method::POST)
            .path(format!("object/list/{}", url_encode(&bucket_id)))
            .bucket_id(bucket_id)
            .object_path(self.path)
            .headers(self.extra_headers.unwrap_or_default())
            .body(body)
            .build())
    }
}
