//! Client configuration
//!
//! Everything the client needs is injected here explicitly; the library
//! never reads the environment itself.

use serde::{Deserialize, Serialize};

/// Matches the 1000 MB limit enforced server-side per uploaded file.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1000 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the submission API, e.g. `https://convert-pheno.example.org`.
    pub api_base_url: String,
    /// Bearer token sent in the `Authorization` header.
    pub auth_token: String,
    /// Per-file size limit in bytes.
    pub max_file_size: u64,
}

impl Config {
    pub fn new(api_base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            auth_token: auth_token.into(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
