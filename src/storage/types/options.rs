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

//! Per-call option values for bucket and file operations

use crate::storage::header_constants::*;
use bytes::Bytes;
use serde::Serialize;
use std::fmt;
use typed_builder::TypedBuilder;

/// Settings applied when creating or updating a bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct BucketOptions {
    #[builder(default)]
    pub public: bool,
    /// Maximum object size in bytes.
    #[builder(default, setter(strip_option))]
    pub file_size_limit: Option<u64>,
    #[builder(default, setter(strip_option))]
    pub allowed_mime_types: Option<Vec<String>>,
}

/// Upload settings for [`FileClient::upload`](crate::storage::FileClient::upload)
/// and [`FileClient::update`](crate::storage::FileClient::update).
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct FileOptions {
    /// Value the service stores for the object's `Cache-Control` header, in seconds.
    #[builder(default = String::from("3600"), setter(into))]
    pub cache_control: String,
    /// Overrides the content type carried by the [`File`].
    #[builder(default, setter(into, strip_option))]
    pub content_type: Option<String>,
    /// Overwrite an existing object at the same path instead of failing.
    #[builder(default)]
    pub upsert: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        FileOptions::builder().build()
    }
}

/// Content to upload, buffered in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    /// Label for the caller's own bookkeeping. It is not sent; the form part
    /// is always unnamed and the object path comes from the upload call.
    pub name: String,
    pub data: Bytes,
    /// File name announced in the multipart `Content-Disposition`.
    pub file_name: String,
    pub content_type: String,
}

impl File {
    /// Creates a file named `name`, announced under the same multipart file
    /// name, with content type `application/octet-stream`.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let name = name.into();
        File {
            file_name: name.clone(),
            name,
            data: data.into(),
            content_type: APPLICATION_OCTET_STREAM.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Fill the requested size, cropping the image.
    #[default]
    Cover,
    /// Fit inside the requested size, keeping the aspect ratio.
    Contain,
    /// Stretch to the requested size.
    Fill,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeMode::Cover => "cover",
            ResizeMode::Contain => "contain",
            ResizeMode::Fill => "fill",
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server side image rendering applied when reading an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, TypedBuilder)]
pub struct TransformOptions {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[builder(default)]
    pub resize: ResizeMode,
    /// 0 to 100; larger values are sent as 100.
    #[builder(default = 80)]
    #[serde(serialize_with = "serialize_quality")]
    pub quality: u8,
    #[builder(default = String::from("origin"), setter(into))]
    pub format: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions::builder().build()
    }
}

fn serialize_quality<S>(quality: &u8, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(clamp_quality(*quality))
}

fn clamp_quality(quality: u8) -> u8 {
    quality.min(100)
}

impl TransformOptions {
    /// Query parameters in the order the service documents them.
    pub(crate) fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(width) = self.width {
            pairs.push((WIDTH, width.to_string()));
        }
        if let Some(height) = self.height {
            pairs.push((HEIGHT, height.to_string()));
        }
        pairs.push((RESIZE, self.resize.to_string()));
        pairs.push((QUALITY, clamp_quality(self.quality).to_string()));
        pairs.push((FORMAT, self.format.clone()));
        pairs
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortBy {
    pub column: String,
    pub order: SortOrder,
}

impl Default for SortBy {
    fn default() -> Self {
        SortBy {
            column: String::from("name"),
            order: SortOrder::Asc,
        }
    }
}

/// Paging, sorting and search settings for listing files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    #[builder(default = 100)]
    pub limit: u32,
    #[builder(default)]
    pub offset: u32,
    #[builder(default)]
    pub sort_by: SortBy,
    /// Only return entries whose name contains this string.
    #[builder(default, setter(into))]
    pub search: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = FileOptions::default();
        assert_eq!(opts.cache_control, "3600");
        assert!(!opts.upsert);
        assert!(opts.content_type.is_none());

        let search = SearchOptions::default();
        assert_eq!(search.limit, 100);
        assert_eq!(search.offset, 0);
        assert_eq!(search.sort_by.column, "name");
        assert_eq!(search.sort_by.order, SortOrder::Asc);

        let transform = TransformOptions::default();
        assert_eq!(transform.resize, ResizeMode::Cover);
        assert_eq!(transform.quality, 80);
        assert_eq!(transform.format, "origin");
    }

    #[test]
    fn test_transform_query_pairs_order() {
        let transform = TransformOptions::builder().width(300).height(200).build();
        let pairs = transform.to_query_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["width", "height", "resize", "quality", "format"]);

        let pairs = TransformOptions::builder().quality(150).build().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                (RESIZE, "cover".to_string()),
                (QUALITY, "100".to_string()),
                (FORMAT, "origin".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_options_json() {
        let search = SearchOptions::builder()
            .limit(10)
            .sort_by(SortBy {
                column: "created_at".into(),
                order: SortOrder::Desc,
            })
            .build();
        let json = serde_json::to_value(&search).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "limit": 10,
                "offset": 0,
                "sortBy": {"column": "created_at", "order": "desc"},
                "search": ""
            })
        );
    }

    #[test]
    fn test_file_new() {
        let file = File::new("README.md", "hello").with_content_type("text/markdown");
        assert_eq!(file.file_name, "README.md");
        assert_eq!(file.content_type, "text/markdown");
        assert_eq!(&file.data[..], b"hello");
    }
}
