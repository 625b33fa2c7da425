use std::collections::HashMap;

use crate::store::ConfigStore;

/// An immutable, read-only view over built configuration.
///
/// `Config` exposes exactly one primitive, [`get`](Self::get): the stored
/// raw string for a key, or a caller-supplied default. It performs no type
/// coercion and no validation — that is the [`accessors`](crate::accessors)
/// layer's job. The backing map is captured at [`build`](ConfigStore::build)
/// time and never mutated afterwards, so a `Config` is safe to share across
/// threads for concurrent reads; all further changes happen on a fresh
/// [`ConfigStore`].
#[derive(Debug, Clone)]
pub struct Config {
    settings: HashMap<String, String>,
}

impl Config {
    pub(crate) fn new(settings: HashMap<String, String>) -> Self {
        Self { settings }
    }

    /// A fresh builder; shorthand for [`ConfigStore::new`].
    pub fn builder() -> ConfigStore {
        ConfigStore::new()
    }

    /// The raw string stored for `key`, or `default` if absent.
    pub fn get<'a>(&'a self, key: impl AsRef<str>, default: &'a str) -> &'a str {
        self.raw(key).unwrap_or(default)
    }

    /// The raw string stored for `key`, or `None` if absent.
    pub fn raw(&self, key: impl AsRef<str>) -> Option<&str> {
        self.settings.get(key.as_ref()).map(String::as_str)
    }

    /// Whether any value (even an empty one) is stored for `key`.
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.settings.contains_key(key.as_ref())
    }
}
