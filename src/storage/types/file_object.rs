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

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// An object or folder entry inside a bucket.
///
/// Folder entries returned by a listing carry only a `name`; every other
/// field is `None` for them.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FileObject {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub bucket_id: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_accessed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl FileObject {
    pub fn is_folder(&self) -> bool {
        self.id.is_none()
    }

    /// Object size in bytes, from the `size` metadata entry.
    pub fn size(&self) -> Option<u64> {
        self.metadata_value("size")?.as_u64()
    }

    pub fn mimetype(&self) -> Option<&str> {
        self.metadata_value("mimetype")?.as_str()
    }

    pub fn cache_control(&self) -> Option<&str> {
        self.metadata_value("cacheControl")?.as_str()
    }

    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.as_ref()?.get(key)
    }
}

/// One entry of a batch signed URL request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedUrl {
    pub path: Option<String>,
    /// Absolute URL, `None` when the service reported `error` for this path.
    pub signed_url: Option<String>,
    pub error: Option<String>,
}
