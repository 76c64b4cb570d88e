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

pub const AUTHORIZATION: &str = "Authorization";
pub const APIKEY: &str = "apikey";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const CACHE_CONTROL: &str = "cache-control";
pub const X_UPSERT: &str = "x-upsert";

pub const APPLICATION_JSON: &str = "application/json";
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// Multipart form field carrying the cache-control value of an upload.
pub const FORM_CACHE_CONTROL: &str = "cacheControl";
/// Multipart form field carrying the file content of an upload.
pub const FORM_FILE: &str = "";

pub const DOWNLOAD: &str = "download";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const RESIZE: &str = "resize";
pub const QUALITY: &str = "quality";
pub const FORMAT: &str = "format";
