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

//! Storage client to perform bucket and file operations.
//!
//! # HTTP Version Support
//!
//! The client supports both HTTP/1.1 and HTTP/2. When connecting over TLS,
//! the client negotiates HTTP/2 via ALPN if the server supports it, otherwise
//! it falls back to HTTP/1.1. HTTP/2 support is enabled by default via the
//! `http2` feature flag.

use crate::storage::error::{Error, ErrorResponse, NetworkError, StorageServerError, ValidationErr};
use crate::storage::header_constants::*;
use crate::storage::http::BaseUrl;
use crate::storage::multimap_ext::Multimap;
use crate::storage::types::RequestBody;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod copy_file;
mod create_bucket;
mod create_signed_url;
mod create_signed_urls;
mod delete_bucket;
mod download_file;
mod empty_bucket;
mod get_bucket;
mod get_public_url;
mod list_buckets;
mod list_files;
mod move_file;
mod remove_files;
mod update_bucket;
mod update_file;
mod upload_file;

/// Configuration for the HTTP connection pool.
///
/// ```
/// use supabase_storage::storage::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(4)
///     .idle_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }
}

/// Client Builder manufactures a [`StorageClient`] using given parameters.
#[derive(Debug)]
pub struct StorageClientBuilder {
    base_url: BaseUrl,
    /// Default headers sent with every request, in the order they were added.
    /// The first invalid one fails [`build`](Self::build).
    headers: Vec<Result<(HeaderName, HeaderValue), ValidationErr>>,
    /// Set file for loading CAs certs to trust. This is in addition to the system trust store. The file must contain PEM encoded certificates.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// Set the app info as an Option of (app_name, app_version) pair. This will show up in the client's user-agent.
    app_info: Option<(String, String)>,
    /// HTTP connection pool configuration.
    connection_pool_config: ConnectionPoolConfig,
}

impl StorageClientBuilder {
    /// Creates a builder given the base URL of the storage service,
    /// typically `https://<project>.supabase.co/storage/v1`.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            headers: Vec::new(),
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Adds a default header. A later header with the same name replaces an earlier one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let (name, value): (String, String) = (name.into(), value.into());
        self.headers.push(to_header_pair(&name, &value));
        self
    }

    /// Adds every header of `headers` as a default header. Values are kept
    /// byte for byte, opaque ones included.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut last_name: Option<HeaderName> = None;
        for (name, value) in headers {
            if let Some(name) = name {
                last_name = Some(name);
            }
            if let Some(name) = &last_name {
                self.headers.push(Ok((name.clone(), value)));
            }
        }
        self
    }

    /// Sets both `Authorization: Bearer <key>` and `apikey: <key>`.
    pub fn api_key(self, key: impl Into<String>) -> Self {
        let key: String = key.into();
        self.header(AUTHORIZATION, format!("Bearer {key}"))
            .header(APIKEY, key)
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<StorageClient, Error> {
        let mut headers = HeaderMap::with_capacity(self.headers.len());
        for header in self.headers {
            let (name, value) = header?;
            headers.insert(name, value);
        }

        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("supabase-storage-rs/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";

        if let Some((app_name, app_version)) = self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(ValidationErr::from)?;
            file.read_to_end(&mut buf).map_err(ValidationErr::from)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(StorageClient {
            http_client: builder.build().map_err(ValidationErr::from)?,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                headers,
            }),
        })
    }
}

/// Client for a storage service, performing bucket level operations.
///
/// Cloning is cheap: clones share the connection pool and the immutable
/// base URL and default headers. Use [`from`](StorageClient::from) to obtain a
/// [`FileClient`] for the objects of one bucket.
#[derive(Clone, Debug)]
pub struct StorageClient {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl StorageClient {
    /// Returns a storage client with given base URL and default headers.
    ///
    /// # Examples
    ///
    /// ```
    /// use supabase_storage::storage::StorageClient;
    /// use supabase_storage::storage::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://project.supabase.co/storage/v1".parse().unwrap();
    /// let client = StorageClient::new(
    ///     base_url,
    ///     [("Authorization", "Bearer secret"), ("apikey", "secret")],
    /// )
    /// .unwrap();
    /// ```
    pub fn new<I, K, V>(base_url: BaseUrl, headers: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        headers
            .into_iter()
            .fold(StorageClientBuilder::new(base_url), |b, (k, v)| b.header(k, v))
            .build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Headers sent with every request unless a call overrides them.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.shared.headers
    }

    /// Returns a [`FileClient`] for the objects of `bucket_id`. No request is made.
    pub fn from(&self, bucket_id: impl Into<String>) -> FileClient {
        FileClient {
            client: self.clone(),
            bucket_id: bucket_id.into(),
        }
    }

    pub(crate) async fn execute(
        &self,
        method: &Method,
        path: &str,
        query_params: &Multimap,
        headers: &Multimap,
        body: &RequestBody,
    ) -> Result<reqwest::Response, Error> {
        let url = self.shared.base_url.build_url(path, query_params);
        let mut headers = merge_headers(&self.shared.headers, headers)?;

        let form = match body {
            RequestBody::Multipart(file) => {
                // reqwest sets the multipart boundary itself
                headers.remove(http::header::CONTENT_TYPE);
                Some(file.to_form()?)
            }
            RequestBody::Json(_) => {
                if !headers.contains_key(http::header::CONTENT_TYPE) {
                    headers.insert(
                        http::header::CONTENT_TYPE,
                        HeaderValue::from_static(APPLICATION_JSON),
                    );
                }
                None
            }
            RequestBody::Empty => None,
        };

        log::debug!("{method} {url}");

        let mut req = self
            .http_client
            .request(method.clone(), &url)
            .headers(headers);
        req = match (body, form) {
            (_, Some(form)) => req.multipart(form),
            (RequestBody::Json(bytes), None) => req.body(bytes.clone()),
            _ => req,
        };

        let resp: reqwest::Response = req.send().await.map_err(NetworkError::from)?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let mut resp = resp;
        let resp_headers = std::mem::take(resp.headers_mut());
        let body = resp.bytes().await.map_err(NetworkError::from)?;
        let err = ErrorResponse::new_from_body(status, &body, resp_headers);
        log::debug!(
            "{method} {url} failed: status={status} code={} message={}",
            err.status_code(),
            err.message()
        );
        Err(StorageServerError::ServerError(Box::new(err)).into())
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) headers: HeaderMap,
}

/// Client for the objects of one bucket, obtained with [`StorageClient::from`].
#[derive(Clone, Debug)]
pub struct FileClient {
    client: StorageClient,
    bucket_id: String,
}

impl FileClient {
    /// Id of the bucket every operation of this client targets.
    pub fn bucket_id(&self) -> &str {
        &self.bucket_id
    }

    /// The bucket level client this one was narrowed from.
    pub fn client(&self) -> &StorageClient {
        &self.client
    }
}

fn to_header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ValidationErr> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ValidationErr::InvalidHeaderName(name.to_string()))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| ValidationErr::InvalidHeaderValue(name.to_string()))?;
    Ok((name, value))
}

/// Merges per-call headers over the client defaults.
///
/// Every header name present in `overrides` drops all default values of that
/// name (names compare case-insensitively), then takes the per-call values.
pub(crate) fn merge_headers(
    defaults: &HeaderMap,
    overrides: &Multimap,
) -> Result<HeaderMap, ValidationErr> {
    let mut merged = defaults.clone();
    for (name, values) in overrides.iter_all() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ValidationErr::InvalidHeaderName(name.clone()))?;
        merged.remove(&header_name);
        for value in values {
            let (_, value) = to_header_pair(name, value)?;
            merged.append(header_name.clone(), value);
        }
        log::trace!("header '{name}' set per call");
    }
    Ok(merged)
}
