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

//! Core storage types and trait definitions

pub mod bucket;
pub mod file_object;
pub mod options;
pub mod storage_request;
pub mod traits;

pub use bucket::Bucket;
pub use file_object::{FileObject, SignedUrl};
pub use options::{
    BucketOptions, File, FileOptions, ResizeMode, SearchOptions, SortBy, SortOrder,
    TransformOptions,
};
pub use storage_request::{MultipartFile, RequestBody, StorageRequest};
pub use traits::{FromStorageResponse, StorageApi, ToStorageRequest};
