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

//! # Supabase Storage Rust SDK (`supabase-storage-rs`)
//!
//! This crate provides a strongly-typed, async-first client for the Supabase Storage HTTP API:
//! buckets, files, public URLs and signed URLs.
//!
//! Each supported operation has a corresponding request builder (e.g., [`storage::builders::CreateBucket`],
//! [`storage::builders::UploadFile`], [`storage::builders::CreateSignedUrl`]), which allows users to
//! configure request parameters using a fluent builder pattern.
//!
//! All request builders implement the [`storage::types::StorageApi`] trait, which provides the async
//! [`send`](crate::storage::types::StorageApi::send) method to execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use supabase_storage::storage::{StorageClient, StorageClientBuilder};
//! use supabase_storage::storage::types::{File, StorageApi};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client: StorageClient =
//!         StorageClientBuilder::new("https://project.supabase.co/storage/v1".parse().unwrap())
//!             .api_key("service-role-key")
//!             .build()
//!             .unwrap();
//!
//!     let files = client.from("docs");
//!     files
//!         .upload("README.md", File::new("README.md", "# Hello"))
//!         .build()
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     let content = files.download("README.md").build().send().await.unwrap();
//!     println!("{}", String::from_utf8_lossy(content.content()));
//!     println!("{}", files.get_public_url("README.md").build().url());
//! }
//! ```
//!
//! ## Design
//! - Bucket operations live on [`storage::StorageClient`]; [`StorageClient::from`](storage::StorageClient::from)
//!   narrows to a [`storage::FileClient`] for the objects of one bucket
//! - Builders implement [`storage::types::ToStorageRequest`] for request conversion and [`storage::types::StorageApi`] for execution
//! - Responses implement [`storage::types::FromStorageResponse`] for consistent decoding
//! - Every failure is a [`storage::error::Error`]

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod storage;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
