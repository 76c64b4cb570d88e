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

use crate::storage::builders::{GetPublicUrl, GetPublicUrlBldr};
use crate::storage::client::FileClient;

impl FileClient {
    /// Creates a [`GetPublicUrl`] builder for the URL of `path` in a public bucket.
    ///
    /// No request is made: call [`GetPublicUrl::url()`] on the built value.
    ///
    /// # Example
    ///
    /// ```
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::types::TransformOptions;
    ///
    /// let client = StorageClient::new(
    ///     "https://project.supabase.co/storage/v1".parse().unwrap(),
    ///     [("apikey", "secret")],
    /// )
    /// .unwrap();
    /// let url = client
    ///     .from("avatars")
    ///     .get_public_url("cat.png")
    ///     .transform(TransformOptions::builder().width(100).build())
    ///     .build()
    ///     .url();
    /// assert_eq!(
    ///     url,
    ///     "https://project.supabase.co/storage/v1/render/image/public/cat.png?width=100&resize=cover&quality=80&format=origin"
    /// );
    /// ```
    pub fn get_public_url<S: Into<String>>(&self, path: S) -> GetPublicUrlBldr {
        GetPublicUrl::builder().client(self.clone()).path(path)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::client::{FileClient, StorageClient};
    use crate::storage::types::{ResizeMode, TransformOptions};

    const BASE_URL: &str = "http://localhost:54321/storage/v1";

    fn files() -> FileClient {
        StorageClient::new(BASE_URL.parse().unwrap(), [("apikey", "anon")])
            .unwrap()
            .from("public")
    }

    #[test]
    fn test_plain_public_url() {
        let url = files().get_public_url("README.md").build().url();
        assert_eq!(url, format!("{BASE_URL}/object/public/README.md?"));
    }

    #[test]
    fn test_public_url_with_download() {
        let url = files()
            .get_public_url("README.md")
            .download(true)
            .build()
            .url();
        assert_eq!(url, format!("{BASE_URL}/object/public/README.md?download="));
    }

    #[test]
    fn test_public_url_with_download_file_name() {
        let url = files()
            .get_public_url("README.md")
            .download(true)
            .file_name("test")
            .build()
            .url();
        assert_eq!(
            url,
            format!("{BASE_URL}/object/public/README.md?download=test")
        );
    }

    #[test]
    fn test_public_url_with_transform() {
        let url = files()
            .get_public_url("README.md")
            .download(true)
            .file_name("test")
            .transform(TransformOptions::builder().width(300).height(300).build())
            .build()
            .url();
        assert_eq!(
            url,
            format!(
                "{BASE_URL}/render/image/public/README.md?download=test&width=300&height=300&resize=cover&quality=80&format=origin"
            )
        );
    }

    #[test]
    fn test_file_name_without_download_is_ignored() {
        let url = files()
            .get_public_url("README.md")
            .file_name("test")
            .build()
            .to_string();
        assert_eq!(url, format!("{BASE_URL}/object/public/README.md?"));
    }

    #[test]
    fn test_public_url_encoding() {
        let url = files()
            .get_public_url("/photos/summer 2024/beach.jpg")
            .download(true)
            .file_name("my beach.jpg")
            .transform(
                TransformOptions::builder()
                    .resize(ResizeMode::Contain)
                    .quality(60)
                    .build(),
            )
            .build()
            .url();
        assert_eq!(
            url,
            format!(
                "{BASE_URL}/render/image/public/photos/summer%202024/beach.jpg?download=my%20beach.jpg&resize=contain&quality=60&format=origin"
            )
        );
    }

    quickcheck! {
        fn prop_public_url_shape(path: String, download: bool, width: Option<u32>) -> bool {
            let builder = files().get_public_url(path.clone()).download(download);
            let url = match width {
                Some(w) => builder
                    .transform(TransformOptions::builder().width(w).build())
                    .build()
                    .url(),
                None => builder.build().url(),
            };

            let prefix = match width {
                Some(_) => format!("{BASE_URL}/render/image/public/"),
                None => format!("{BASE_URL}/object/public/"),
            };
            let Some(rest) = url.strip_prefix(&prefix) else {
                return false;
            };
            let Some((_, query)) = rest.split_once('?') else {
                return false;
            };

            let keys: Vec<&str> = query
                .split('&')
                .filter(|s| !s.is_empty())
                .filter_map(|kv| kv.split('=').next())
                .collect();
            let mut expected = Vec::new();
            if download {
                expected.push("download");
            }
            if width.is_some() {
                expected.extend(["width", "resize", "quality", "format"]);
            }
            keys == expected
        }
    }
}
