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

/// A bucket as reported by the storage service.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Bucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub public: bool,
    /// Maximum object size in bytes, if the bucket enforces one.
    #[serde(default)]
    pub file_size_limit: Option<u64>,
    #[serde(default)]
    pub allowed_mime_types: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_bucket() {
        let json = r#"{
            "id": "avatars",
            "name": "avatars",
            "owner": "",
            "public": true,
            "file_size_limit": 1048576,
            "allowed_mime_types": ["image/png"],
            "created_at": "2024-03-01T10:20:30.123Z",
            "updated_at": "2024-03-02T10:20:30.123Z"
        }"#;
        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.id, "avatars");
        assert!(bucket.public);
        assert_eq!(bucket.file_size_limit, Some(1048576));
        assert_eq!(
            bucket.allowed_mime_types.as_deref(),
            Some(&["image/png".to_string()][..])
        );
        assert!(bucket.updated_at > bucket.created_at);
    }

    #[test]
    fn test_decode_bucket_with_nulls() {
        let json = r#"{"id":"docs","name":"docs","owner":null,"public":false,
            "file_size_limit":null,"allowed_mime_types":null}"#;
        let bucket: Bucket = serde_json::from_str(json).unwrap();
        assert_eq!(bucket.name, "docs");
        assert!(!bucket.public);
        assert!(bucket.owner.is_none());
        assert!(bucket.created_at.is_none());
    }
}
