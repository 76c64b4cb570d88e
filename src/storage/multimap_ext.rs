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

use crate::storage::utils::url_encode;

/// Multimap for string key and string value
pub type Multimap = multimap::MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a multimap to the current multimap
    fn add_multimap(&mut self, other: Multimap);

    /// Converts multimap to HTTP query string, keys in sorted order
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            self.insert_many(key, values);
        }
    }

    fn to_query_string(&self) -> String {
        let mut keys: Vec<&String> = self.keys().collect();
        keys.sort();

        let mut query = String::new();
        for key in keys {
            for value in self.get_vec(key).into_iter().flatten() {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_string_sorted_and_encoded() {
        let mut m = Multimap::new();
        m.add("width", "300");
        m.add("download", "my file.png");
        m.add("height", "200");
        assert_eq!(
            m.to_query_string(),
            "download=my%20file.png&height=200&width=300"
        );
    }

    #[test]
    fn test_add_multimap() {
        let mut m = Multimap::new();
        m.add("a", "1");
        let mut other = Multimap::new();
        other.add("a", "2");
        other.add("b", "3");
        m.add_multimap(other);
        assert_eq!(m.get_vec("a").map(|v| v.len()), Some(2));
        assert_eq!(m.get("b").map(String::as_str), Some("3"));
        assert_eq!(Multimap::new().to_query_string(), "");
    }
}
