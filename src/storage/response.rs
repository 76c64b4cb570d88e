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

//! Responses for [`StorageClient`](crate::storage::client::StorageClient)
//! and [`FileClient`](crate::storage::client::FileClient) APIs

use crate::storage::http::BaseUrl;
use crate::storage::utils::url_encode;
use serde::Deserialize;

mod copy_file;
mod create_bucket;
mod create_signed_url;
mod create_signed_urls;
mod delete_bucket;
mod download_file;
mod empty_bucket;
mod get_bucket;
mod list_buckets;
mod list_files;
mod move_file;
mod remove_files;
mod update_bucket;
mod update_file;
mod upload_file;

pub use copy_file::CopyFileResponse;
pub use create_bucket::CreateBucketResponse;
pub use create_signed_url::CreateSignedUrlResponse;
pub use create_signed_urls::CreateSignedUrlsResponse;
pub use delete_bucket::DeleteBucketResponse;
pub use download_file::DownloadFileResponse;
pub use empty_bucket::EmptyBucketResponse;
pub use get_bucket::GetBucketResponse;
pub use list_buckets::ListBucketsResponse;
pub use list_files::ListFilesResponse;
pub use move_file::MoveFileResponse;
pub use remove_files::RemoveFilesResponse;
pub use update_bucket::UpdateBucketResponse;
pub use update_file::UpdateFileResponse;
pub use upload_file::UploadFileResponse;

/// `{"message": ...}` body of bucket and move operations.
#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub(crate) message: String,
}

/// `{"Key": ..., "Id": ...}` body of upload, update and copy.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct ObjectKeyBody {
    #[serde(rename = "Key")]
    pub(crate) key: String,
    #[serde(rename = "Id", default)]
    pub(crate) id: Option<String>,
}

/// Joins a signed path returned by the service onto the base URL, adding the
/// `download` parameter when requested.
pub(crate) fn absolute_signed_url(
    base_url: &BaseUrl,
    signed_path: &str,
    download: Option<&str>,
) -> String {
    let mut url = String::from(base_url.as_str());
    if !signed_path.starts_with('/') {
        url.push('/');
    }
    url.push_str(signed_path);

    if let Some(name) = download {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str("download=");
        url.push_str(&url_encode(name));
    }
    url
}
