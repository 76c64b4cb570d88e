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

//! StorageRequest struct and implementation for executing HTTP requests.

use crate::storage::client::StorageClient;
use crate::storage::error::{Error, ValidationErr};
use crate::storage::header_constants::{FORM_CACHE_CONTROL, FORM_FILE};
use crate::storage::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use typed_builder::TypedBuilder;

/// File content of a multipart upload.
#[derive(Clone, Debug)]
pub struct MultipartFile {
    pub data: Bytes,
    pub file_name: String,
    pub content_type: String,
    pub cache_control: String,
}

impl MultipartFile {
    pub(crate) fn to_form(&self) -> Result<Form, ValidationErr> {
        let part = Part::stream_with_length(
            reqwest::Body::from(self.data.clone()),
            self.data.len() as u64,
        )
        .file_name(self.file_name.clone())
        .mime_str(&self.content_type)
        .map_err(|_| ValidationErr::InvalidContentType(self.content_type.clone()))?;

        Ok(Form::new()
            .text(FORM_CACHE_CONTROL, self.cache_control.clone())
            .part(FORM_FILE, part))
    }
}

/// Body of a storage request.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Bytes),
    Multipart(MultipartFile),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ValidationErr> {
        Ok(RequestBody::Json(Bytes::from(serde_json::to_vec(value)?)))
    }
}

#[derive(Clone, Debug, TypedBuilder)]
/// Generic StorageRequest
pub struct StorageRequest {
    #[builder(!default)] // force required
    pub(crate) client: StorageClient,

    #[builder(!default)] // force required
    method: Method,

    /// Path relative to the base URL, already percent-encoded.
    #[builder(!default, setter(into))]
    path: String,

    #[builder(default, setter(into))]
    pub(crate) bucket_id: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object_path: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default)]
    body: RequestBody,

    /// Value of the `download` query parameter appended to URLs the service
    /// returns, for operations that hand back URLs.
    #[builder(default, setter(into))]
    pub(crate) download: Option<String>,
}

impl StorageRequest {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Execute the request, returning the response. Only used in [`StorageApi::send()`](super::StorageApi::send)
    pub async fn execute(&self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                &self.method,
                &self.path,
                &self.query_params,
                &self.headers,
                &self.body,
            )
            .await
    }
}
