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

//! Various utility and helper functions

use crate::storage::error::ValidationErr;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const OBJECT_PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes an object path, keeping `/` separators intact.
pub fn urlencode_object_path(path: &str) -> String {
    utf8_percent_encode(path, OBJECT_PATH_ENCODE_SET).collect()
}

/// Percent-encodes a query string key or value.
pub fn url_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).collect()
}

/// Strips leading and trailing `/` so paths can be joined without doubling separators.
pub fn trim_slashes(path: &str) -> &str {
    path.trim_matches('/')
}

pub fn check_bucket_id(bucket_id: &str) -> Result<(), ValidationErr> {
    if bucket_id.is_empty() {
        return Err(ValidationErr::MissingBucketId);
    }
    Ok(())
}
