//! Typed accessors over a [`Config`].
//!
//! Every accessor reads the raw string through the config's single
//! primitive and coerces it; the config itself stays coercion-free. Each
//! supported type has two shapes:
//!
//! - **`mandatory_*`** — the key must be present (and, for string/URL/set,
//!   non-empty), otherwise [`ConfigError::MissingSetting`]. A present value
//!   that fails to parse is [`ConfigError::InvalidSetting`].
//! - **`optional_*`** — an absent or empty value yields the caller's
//!   default without parsing. A present, non-empty value is parsed, and a
//!   parse failure is still `InvalidSetting` — the default never masks a
//!   malformed value.
//!
//! Parsing rules:
//!
//! - integers are base-10, overflow included in "fails to parse";
//! - booleans accept exactly `true`/`false`, case-insensitively — no
//!   truthy/falsy coercion;
//! - URLs go through [`url::Url`]'s syntax rules;
//! - paths are constructed without any existence check;
//! - sets split the raw value on whitespace runs and collapse duplicates.

use std::collections::HashSet;
use std::path::PathBuf;

use url::Url;

use crate::config::Config;
use crate::error::ConfigError;

/// Raw value for `key`, treating an empty string as absent.
fn non_empty<'a>(config: &'a Config, key: &str) -> Option<&'a str> {
    config.raw(key).filter(|v| !v.is_empty())
}

fn missing(key: &str) -> ConfigError {
    ConfigError::MissingSetting(key.to_string())
}

pub fn mandatory_string(config: &Config, key: impl AsRef<str>) -> Result<String, ConfigError> {
    let key = key.as_ref();
    non_empty(config, key)
        .map(str::to_string)
        .ok_or_else(|| missing(key))
}

pub fn optional_string(
    config: &Config,
    key: impl AsRef<str>,
    default: impl Into<String>,
) -> Result<String, ConfigError> {
    match non_empty(config, key.as_ref()) {
        Some(value) => Ok(value.to_string()),
        None => Ok(default.into()),
    }
}

pub fn mandatory_integer(config: &Config, key: impl AsRef<str>) -> Result<i32, ConfigError> {
    let key = key.as_ref();
    let value = config.raw(key).ok_or_else(|| missing(key))?;
    value
        .parse()
        .map_err(|e| ConfigError::invalid(key, "an integer", e))
}

pub fn optional_integer(
    config: &Config,
    key: impl AsRef<str>,
    default: i32,
) -> Result<i32, ConfigError> {
    let key = key.as_ref();
    match non_empty(config, key) {
        Some(value) => value
            .parse()
            .map_err(|e| ConfigError::invalid(key, "an integer", e)),
        None => Ok(default),
    }
}

pub fn mandatory_long(config: &Config, key: impl AsRef<str>) -> Result<i64, ConfigError> {
    let key = key.as_ref();
    let value = config.raw(key).ok_or_else(|| missing(key))?;
    value
        .parse()
        .map_err(|e| ConfigError::invalid(key, "a long integer", e))
}

pub fn optional_long(
    config: &Config,
    key: impl AsRef<str>,
    default: i64,
) -> Result<i64, ConfigError> {
    let key = key.as_ref();
    match non_empty(config, key) {
        Some(value) => value
            .parse()
            .map_err(|e| ConfigError::invalid(key, "a long integer", e)),
        None => Ok(default),
    }
}

pub fn mandatory_double(config: &Config, key: impl AsRef<str>) -> Result<f64, ConfigError> {
    let key = key.as_ref();
    let value = config.raw(key).ok_or_else(|| missing(key))?;
    value
        .parse()
        .map_err(|e| ConfigError::invalid(key, "a double", e))
}

pub fn optional_double(
    config: &Config,
    key: impl AsRef<str>,
    default: f64,
) -> Result<f64, ConfigError> {
    let key = key.as_ref();
    match non_empty(config, key) {
        Some(value) => value
            .parse()
            .map_err(|e| ConfigError::invalid(key, "a double", e)),
        None => Ok(default),
    }
}

pub fn mandatory_boolean(config: &Config, key: impl AsRef<str>) -> Result<bool, ConfigError> {
    let key = key.as_ref();
    let value = config.raw(key).ok_or_else(|| missing(key))?;
    parse_boolean(value, key)
}

pub fn optional_boolean(
    config: &Config,
    key: impl AsRef<str>,
    default: bool,
) -> Result<bool, ConfigError> {
    let key = key.as_ref();
    match non_empty(config, key) {
        Some(value) => parse_boolean(value, key),
        None => Ok(default),
    }
}

fn parse_boolean(value: &str, key: &str) -> Result<bool, ConfigError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(ConfigError::invalid_plain(key, "'true' or 'false'"))
    }
}

pub fn mandatory_url(config: &Config, key: impl AsRef<str>) -> Result<Url, ConfigError> {
    let key = key.as_ref();
    let value = non_empty(config, key).ok_or_else(|| missing(key))?;
    Url::parse(value).map_err(|e| ConfigError::invalid(key, "a URL", e))
}

pub fn optional_url(
    config: &Config,
    key: impl AsRef<str>,
    default: Url,
) -> Result<Url, ConfigError> {
    let key = key.as_ref();
    match non_empty(config, key) {
        Some(value) => Url::parse(value).map_err(|e| ConfigError::invalid(key, "a URL", e)),
        None => Ok(default),
    }
}

/// Constructed from the raw string with no existence check — a syntactically
/// valid but nonexistent path is not an error at this layer.
pub fn mandatory_path(config: &Config, key: impl AsRef<str>) -> Result<PathBuf, ConfigError> {
    let key = key.as_ref();
    let value = config.raw(key).ok_or_else(|| missing(key))?;
    Ok(PathBuf::from(value))
}

pub fn optional_path(
    config: &Config,
    key: impl AsRef<str>,
    default: PathBuf,
) -> Result<PathBuf, ConfigError> {
    match non_empty(config, key.as_ref()) {
        Some(value) => Ok(PathBuf::from(value)),
        None => Ok(default),
    }
}

pub fn mandatory_set(
    config: &Config,
    key: impl AsRef<str>,
) -> Result<HashSet<String>, ConfigError> {
    let key = key.as_ref();
    match config.raw(key).map(split_set) {
        Some(set) if !set.is_empty() => Ok(set),
        _ => Err(missing(key)),
    }
}

pub fn optional_set(
    config: &Config,
    key: impl AsRef<str>,
    default: HashSet<String>,
) -> Result<HashSet<String>, ConfigError> {
    match config.raw(key.as_ref()).map(split_set) {
        Some(set) if !set.is_empty() => Ok(set),
        _ => Ok(default),
    }
}

/// Split on whitespace runs, dropping empty tokens and collapsing
/// duplicates. An all-whitespace value yields the empty set, which the
/// accessors treat as absent.
fn split_set(value: &str) -> HashSet<String> {
    value.split_whitespace().map(str::to_string).collect()
}
