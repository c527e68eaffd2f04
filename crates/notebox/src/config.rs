use std::{env, time::Duration};

use crate::telemetry::LogFormat;

/// Fits a create body whose `noteId` and `content` are at their character
/// limits with every character written as a `\uXXXX\uXXXX` surrogate pair.
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the notes (default: "notes")
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    pub dynamodb_endpoint_url: Option<String>,
    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Origins allowed by CORS (default: "http://localhost:3000")
    pub allowed_origins: Vec<String>,
    /// Maximum accepted request body size in bytes (default: 64 KiB)
    pub max_body_bytes: usize,
    /// Log format; each binary picks its own default when unset.
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "notes")
    /// - `DYNAMODB_ENDPOINT_URL` - Custom DynamoDB endpoint (default: none)
    /// - `REQUEST_TIMEOUT_SECONDS` - HTTP request timeout (default: 10)
    /// - `ALLOWED_ORIGINS` - Comma separated CORS origins (default: "http://localhost:3000")
    /// - `MAX_BODY_BYTES` - Request body limit (default: 65,536)
    /// - `LOG_FORMAT` - `pretty` or `json` (default: binary specific)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            table_name: lookup("TABLE_NAME")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "notes".to_string()),
            dynamodb_endpoint_url: lookup("DYNAMODB_ENDPOINT_URL").filter(|v| !v.is_empty()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| parse_list(&v))
                .filter(|origins| !origins.is_empty())
                .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            log_format: lookup("LOG_FORMAT").and_then(|v| LogFormat::parse(&v)),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
