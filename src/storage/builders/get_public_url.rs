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

use crate::storage::client::FileClient;
use crate::storage::header_constants::DOWNLOAD;
use crate::storage::types::TransformOptions;
use crate::storage::utils::{trim_slashes, url_encode, urlencode_object_path};
use std::fmt;
use typed_builder::TypedBuilder;

/// Argument builder for the URL of a file in a public bucket.
///
/// This struct constructs the parameters required for the [`FileClient::get_public_url`](crate::storage::client::FileClient::get_public_url) method.
/// Building the URL makes no request and cannot fail; whether the object is
/// reachable depends on the bucket being public.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetPublicUrl {
    #[builder(!default)] // force required
    client: FileClient,
    #[builder(setter(into))] // force required + accept Into<String>
    path: String,
    #[builder(default)]
    download: bool,
    /// File name the browser saves the download as; ignored unless `download` is set.
    #[builder(default, setter(into, strip_option))]
    file_name: Option<String>,
    /// Serve the object through the image rendering endpoint.
    #[builder(default, setter(strip_option))]
    transform: Option<TransformOptions>,
}

/// Builder type alias for [`GetPublicUrl`].
///
/// Constructed via [`GetPublicUrl::builder()`](GetPublicUrl::builder) and used to build a [`GetPublicUrl`] instance.
pub type GetPublicUrlBldr = GetPublicUrlBuilder<((FileClient,), (String,), (), (), ())>;

impl GetPublicUrl {
    /// The public URL.
    ///
    /// The query separator is always present, so a plain URL ends in `?`.
    pub fn url(&self) -> String {
        let endpoint = match self.transform {
            Some(_) => "render/image/public",
            None => "object/public",
        };

        let base = self.client.client().base_url().as_str();
        let path = urlencode_object_path(trim_slashes(&self.path));
        let mut url = String::with_capacity(base.len() + endpoint.len() + path.len() + 64);
        url.push_str(base);
        url.push('/');
        url.push_str(endpoint);
        url.push('/');
        url.push_str(&path);
        url.push('?');

        let mut query: Vec<(&str, String)> = Vec::new();
        if self.download {
            let name = self.file_name.as_deref().unwrap_or_default();
            query.push((DOWNLOAD, url_encode(name)));
        }
        if let Some(transform) = &self.transform {
            query.extend(
                transform
                    .to_query_pairs()
                    .into_iter()
                    .map(|(k, v)| (k, url_encode(&v))),
            );
        }

        for (i, (key, value)) in query.iter().enumerate() {
            if i > 0 {
                url.push('&');
            }
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }
}

impl fmt::Display for GetPublicUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
