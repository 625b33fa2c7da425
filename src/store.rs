//! The mutable accumulator behind every [`Config`].
//!
//! A `ConfigStore` merges settings from sources (environment, manifest,
//! properties resources) and direct `put`s into one flat string-keyed map,
//! tracks which keys the caller declares mandatory, and hands ownership of
//! the map to an immutable [`Config`] at [`build`](ConfigStore::build) time.
//!
//! # Merge semantics
//!
//! Every source loader and [`put`](ConfigStore::put) overwrite-merges:
//! whatever is loaded last wins, key by key. The single non-overwrite
//! primitive is [`put_if_absent`](ConfigStore::put_if_absent), which is how
//! fallback layering is built — declare a fallback value either before
//! loading higher-priority sources (they overwrite it) or after (it won't
//! clobber them).
//!
//! # Validation
//!
//! Presence of mandatory keys is checked once, in `build()`, and the error
//! is batched: every missing key is reported in one message, so a caller
//! declaring requirements incrementally gets one actionable failure instead
//! of a cascade.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::ConfigError;
use crate::manifest::Manifest;
use crate::properties;

/// Builder for a [`Config`]: merge sources, declare mandatory keys, build.
///
/// ```
/// use flatconf::{ConfigKey, ConfigStore};
///
/// let timeout = ConfigKey::new("TIMEOUT_SECONDS");
/// let config = ConfigStore::new()
///     .load_environment()
///     .put_if_absent(&timeout, "30")
///     .mandatory_fields([&timeout])
///     .build()?;
/// # Ok::<(), flatconf::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    settings: HashMap<String, String>,
    mandatory: BTreeSet<String>,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite-merge all process environment variables.
    pub fn load_environment(self) -> Self {
        self.load_environment_from(std::env::vars())
    }

    /// Overwrite-merge an explicit variable set.
    ///
    /// Takes an iterator so tests can pass synthetic data instead of
    /// `std::env::vars()`.
    pub fn load_environment_from(
        mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let before = self.settings.len();
        self.settings.extend(vars);
        debug!(
            "merged environment variables ({} settings total, was {})",
            self.settings.len(),
            before
        );
        self
    }

    /// Overwrite-merge the attributes of the process-wide manifest.
    ///
    /// Fails if the manifest resource at [`MANIFEST_PATH`] cannot be loaded;
    /// see [`Manifest::shared`].
    ///
    /// [`MANIFEST_PATH`]: crate::MANIFEST_PATH
    pub fn load_manifest(self) -> Result<Self, ConfigError> {
        let manifest = Manifest::shared()?;
        Ok(self.load_manifest_from(manifest))
    }

    /// Overwrite-merge the attributes of an explicit manifest.
    pub fn load_manifest_from(mut self, manifest: &Manifest) -> Self {
        for (key, value) in manifest.attributes() {
            self.settings.insert(key.to_string(), value.to_string());
        }
        debug!("merged {} manifest attributes", manifest.len());
        self
    }

    /// Read a properties-format resource and overwrite-merge its entries.
    ///
    /// Read failures propagate as [`ConfigError::Io`] naming the path.
    pub fn load_properties_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loading properties from {}", path.display());
        Ok(self.load_properties_str(&content))
    }

    /// Overwrite-merge entries parsed from properties-format text.
    ///
    /// This is the path for embedded resources (`include_str!`).
    pub fn load_properties_str(mut self, content: &str) -> Self {
        for (key, value) in properties::parse(content) {
            self.settings.insert(key, value);
        }
        self
    }

    /// Unconditionally set a single entry (last write wins).
    pub fn put(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.settings.insert(key.as_ref().to_string(), value.into());
        self
    }

    /// [`put`](Self::put) for integer values, stored in base-10 string form.
    pub fn put_int(self, key: impl AsRef<str>, value: i64) -> Self {
        self.put(key, value.to_string())
    }

    /// Set an entry only if the key has no value yet (first write wins).
    pub fn put_if_absent(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.settings
            .entry(key.as_ref().to_string())
            .or_insert_with(|| value.into());
        self
    }

    /// Bulk overwrite-merge of externally supplied entries.
    pub fn put_all(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        self.settings.extend(entries);
        self
    }

    /// Declare keys that must be present at build time.
    ///
    /// Additive and idempotent — the mandatory keys form a set, and repeated
    /// calls accumulate.
    pub fn mandatory_fields<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for key in keys {
            self.mandatory.insert(key.as_ref().to_string());
        }
        self
    }

    /// Declare a single mandatory key.
    pub fn mandatory_field(self, key: impl AsRef<str>) -> Self {
        self.mandatory_fields([key])
    }

    /// Peek at the current raw value for `key` before building.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.settings.get(key.as_ref()).map(String::as_str)
    }

    /// Validate mandatory keys and freeze the store into a [`Config`].
    ///
    /// Every mandatory key must have an entry (an empty value counts —
    /// emptiness policy belongs to the accessor layer). All missing keys are
    /// collected into a single [`ConfigError::MissingSettings`], listed in
    /// sorted order.
    pub fn build(self) -> Result<Config, ConfigError> {
        let missing: Vec<String> = self
            .mandatory
            .iter()
            .filter(|key| !self.settings.contains_key(*key))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingSettings(missing));
        }
        debug!("built config with {} settings", self.settings.len());
        Ok(Config::new(self.settings))
    }
}
