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

//! Error definitions for storage operations

use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Classification of a failed server response.
///
/// Derived from the `statusCode` reported in the error body when it is
/// numeric, otherwise from the HTTP status of the response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    PayloadTooLarge,
    ServerError,
    Other,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthorized,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            409 => ErrorKind::Conflict,
            413 => ErrorKind::PayloadTooLarge,
            500..=599 => ErrorKind::ServerError,
            _ => ErrorKind::Other,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::PayloadTooLarge => "PayloadTooLarge",
            ErrorKind::ServerError => "ServerError",
            ErrorKind::Other => "Other",
        };
        f.write_str(s)
    }
}

/// Wire format of an error body: `{statusCode, error, message}`.
///
/// `statusCode` is a string in most deployments, but some proxies send a number.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "statusCode", default)]
    status_code: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Error returned by the storage service for a non-2xx response.
#[derive(Clone, Debug)]
pub struct ErrorResponse {
    status: u16,
    status_code: String,
    error: String,
    message: String,
    headers: HeaderMap,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        status_code: impl Into<String>,
        error: impl Into<String>,
        message: impl Into<String>,
        headers: HeaderMap,
    ) -> Self {
        Self {
            status,
            status_code: status_code.into(),
            error: error.into(),
            message: message.into(),
            headers,
        }
    }

    /// Decodes the error body of a failed response.
    ///
    /// A body that is not the expected JSON document is kept verbatim as the
    /// message, so the caller still sees what the server said.
    pub fn new_from_body(status: u16, body: &Bytes, headers: HeaderMap) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => {
                let status_code = match parsed.status_code {
                    Some(serde_json::Value::String(s)) => s,
                    Some(serde_json::Value::Number(n)) => n.to_string(),
                    _ => status.to_string(),
                };
                Self::new(
                    status,
                    status_code,
                    parsed.error.unwrap_or_default(),
                    parsed.message.unwrap_or_default(),
                    headers,
                )
            }
            Err(e) => {
                log::warn!("undecodable error body for HTTP status {status}: {e}");
                Self::new(
                    status,
                    status.to_string(),
                    String::new(),
                    String::from_utf8_lossy(body).into_owned(),
                    headers,
                )
            }
        }
    }

    /// HTTP status of the response.
    pub fn status(&self) -> u16 {
        self.status
    }
    /// The `statusCode` field of the body, or the HTTP status if absent.
    pub fn status_code(&self) -> &str {
        &self.status_code
    }
    /// The `error` field of the body, a short error code such as `Duplicate`.
    pub fn error(&self) -> &str {
        &self.error
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn kind(&self) -> ErrorKind {
        let status = self.status_code.parse::<u16>().unwrap_or(self.status);
        ErrorKind::from_status(status)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "storage operation failed: \n\tstatus: {}\n\tstatusCode: {}\n\terror: {}\n\tmessage: {}",
            self.status, self.status_code, self.error, self.message,
        )
    }
}

impl std::error::Error for ErrorResponse {}

#[derive(Debug, Error)]
pub enum ValidationErr {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    #[error("invalid value for header '{0}'")]
    InvalidHeaderValue(String),

    #[error("bucket id cannot be empty")]
    MissingBucketId,

    #[error("at least one path must be provided")]
    EmptyPathList,

    #[error("invalid content type '{0}'")]
    InvalidContentType(String),

    #[error("failed to serialize request body: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum DecodingErr {
    #[error("failed to decode {context} response: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum StorageServerError {
    #[error("{0}")]
    ServerError(Box<ErrorResponse>),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{0}")]
    StorageServer(#[from] StorageServerError),

    #[error("decoding error: {0}")]
    Decoding(#[from] DecodingErr),
}

impl Error {
    /// Server response behind this error, if the server answered at all.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::StorageServer(StorageServerError::ServerError(e)) => Some(e),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.error_response().map(ErrorResponse::kind)
    }

    pub fn status(&self) -> Option<u16> {
        self.error_response().map(ErrorResponse::status)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_conflict(&self) -> bool {
        self.kind() == Some(ErrorKind::Conflict)
    }
}
