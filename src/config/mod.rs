use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};

use crate::Result;


pub const API_BASE_VAR: &str = "THREADS_API_BASE";
pub const ACCESS_TOKEN_VAR: &str = "THREADS_ACCESS_TOKEN";
pub const USER_ID_VAR: &str = "THREADS_USER_ID";

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub access_token: String,
    pub user_id: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_base", &self.api_base)
            .field("access_token", &"<redacted>")
            .field("user_id", &self.user_id)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Reads the three required values through `lookup`. Absent and empty values are both
    /// reported as missing; nothing is trimmed.
    pub fn from_lookup<F>(lookup: F) -> std::result::Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut missing = vec![];
        let mut not_unicode = vec![];
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.is_empty() => value.into_string().unwrap_or_else(|_| {
                not_unicode.push(key);
                String::new()
            }),
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let api_base = require(API_BASE_VAR);
        let access_token = require(ACCESS_TOKEN_VAR);
        let user_id = require(USER_ID_VAR);

        if !missing.is_empty() {
            return Err(ConfigError {
                kind: ErrorKind::Missing(missing),
            });
        }
        if !not_unicode.is_empty() {
            return Err(ConfigError {
                kind: ErrorKind::NotUnicode(not_unicode),
            });
        }

        Ok(Config {
            api_base,
            access_token,
            user_id,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub kind: ErrorKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Missing(Vec<&'static str>),
    NotUnicode(Vec<&'static str>),
}

impl ConfigError {
    pub fn missing(&self) -> &[&'static str] {
        match &self.kind {
            ErrorKind::Missing(keys) => keys.as_slice(),
            ErrorKind::NotUnicode(_) => &[],
        }
    }
}

impl std::error::Error for ConfigError {}
impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Missing(_) => write!(
                f,
                "Please ensure {}, {}, and {} are set in your .env file.",
                API_BASE_VAR, ACCESS_TOKEN_VAR, USER_ID_VAR
            ),
            ErrorKind::NotUnicode(keys) => {
                write!(f, "{} must be valid unicode.", keys.join(", "))
            }
        }
    }
}

/// Populates the process environment from a `.env` file. Variables that are already set
/// are left alone.
///
/// An explicit `path` has to exist and parse. Without one the usual `.env` lookup is done;
/// a missing or broken file only means nothing (or only part of it) was loaded, and whether
/// that is enough is left to [`Config::from_env`].
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed loading environment file: {:?}", path))?;
            debug!("loaded environment from {:?}", path);
            Ok(Some(path.to_path_buf()))
        }
        None => Ok(settle_default(dotenvy::dotenv())),
    }
}

fn settle_default(found: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match found {
        Ok(found) => {
            debug!("loaded environment from {:?}", found);
            Some(found)
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("ignoring .env file: {}", e);
            None
        }
    }
}
