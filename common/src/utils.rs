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

use rand::Rng;
use rand::distr::Alphanumeric;
use serde_json::{Value, json};

pub fn rand_bucket_name() -> String {
    rand_string(8).to_lowercase()
}

pub fn rand_object_name() -> String {
    rand_string(8)
}

fn rand_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A bucket as the service returns it.
pub fn bucket_json(id: &str, public: bool) -> Value {
    json!({
        "id": id,
        "name": id,
        "owner": "",
        "public": public,
        "file_size_limit": null,
        "allowed_mime_types": null,
        "created_at": "2024-03-01T10:20:30.123Z",
        "updated_at": "2024-03-01T10:20:30.123Z"
    })
}

/// An object entry as the service returns it from list and remove.
pub fn file_object_json(bucket_id: &str, name: &str, size: u64) -> Value {
    json!({
        "name": name,
        "id": uuid::Uuid::new_v4().to_string(),
        "bucket_id": bucket_id,
        "owner": null,
        "updated_at": "2024-03-01T10:20:30.123Z",
        "created_at": "2024-03-01T10:20:30.123Z",
        "last_accessed_at": "2024-03-01T10:20:30.123Z",
        "metadata": {
            "eTag": "\"d41d8cd98f00b204e9800998ecf8427e\"",
            "size": size,
            "mimetype": "text/plain",
            "cacheControl": "max-age=3600"
        }
    })
}

/// Error body the service sends with non-2xx responses.
pub fn error_json(status_code: &str, error: &str, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "error": error,
        "message": message
    })
}
