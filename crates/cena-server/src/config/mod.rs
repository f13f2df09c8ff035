// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::security::Role;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub max_body_bytes: usize,
    /// Routes `DELETE /api/ingredients` and `DELETE /api/recipes`; they answer 404 otherwise.
    pub allow_bulk_delete: bool,
    pub users_file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_body_bytes: 64 * 1024,
            allow_bulk_delete: false,
            users_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAccount {
    pub name: String,
    pub password_sha256: String,
    #[serde(default)]
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersFile {
    pub users: Vec<UserAccount>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { path, message } => write!(f, "cannot parse {}: {message}", path.display()),
            Self::Invalid(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn load_users(path: &Path) -> Result<Vec<UserAccount>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: UsersFile = serde_yaml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(file.users)
}

pub fn validate_startup_config(api: &ApiConfig, users: &[UserAccount]) -> Result<(), ConfigError> {
    if api.max_body_bytes == 0 {
        return Err(ConfigError::Invalid("max_body_bytes must be > 0".to_string()));
    }
    let mut seen = std::collections::BTreeSet::new();
    for user in users {
        if user.name.trim().is_empty() || user.name.contains(':') {
            return Err(ConfigError::Invalid(format!(
                "user name `{}` must be non-empty and must not contain ':'",
                user.name
            )));
        }
        if !seen.insert(user.name.as_str()) {
            return Err(ConfigError::Invalid(format!("duplicate user `{}`", user.name)));
        }
        let digest = &user.password_sha256;
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::Invalid(format!(
                "password_sha256 of `{}` must be 64 hex characters",
                user.name
            )));
        }
    }
    Ok(())
}
