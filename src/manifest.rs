//! Packaging-manifest attributes as a settings source.
//!
//! A manifest is a colon-delimited attribute resource (`Key: Value`, one
//! pair per line, a leading space continues the previous value) living at a
//! fixed well-known location. The process-wide instance is loaded lazily on
//! first use and cached for the process lifetime — there is no invalidation
//! or refresh. Initialization is compute-once and thread-safe, so concurrent
//! first access (realistic for a process-wide config source) is safe.
//!
//! A load failure is fatal and propagates as a wrapped error; looking up a
//! key that the manifest does not carry is not an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use once_cell::sync::OnceCell;

use crate::error::ConfigError;

/// Well-known manifest location, resolved against the working directory.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

static SHARED: OnceCell<Manifest> = OnceCell::new();

/// A parsed set of manifest attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    attributes: HashMap<String, String>,
}

impl Manifest {
    /// Parse manifest-format `content`.
    ///
    /// Blank lines are skipped. A line starting with a space continues the
    /// previous attribute's value. Any other line without a colon is
    /// malformed and fails with [`ConfigError::ManifestParse`].
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut attributes: HashMap<String, String> = HashMap::new();
        let mut last_key: Option<String> = None;

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                last_key = None;
                continue;
            }

            if let Some(continuation) = line.strip_prefix(' ') {
                let value = last_key.as_ref().and_then(|key| attributes.get_mut(key));
                match value {
                    Some(value) => {
                        value.push_str(continuation.trim_end());
                        continue;
                    }
                    None => {
                        return Err(ConfigError::ManifestParse {
                            line: i + 1,
                            content: line.to_string(),
                        });
                    }
                }
            }

            let Some((key, value)) = line.split_once(':') else {
                return Err(ConfigError::ManifestParse {
                    line: i + 1,
                    content: line.to_string(),
                });
            };
            let key = key.trim().to_string();
            attributes.insert(key.clone(), value.trim().to_string());
            last_key = Some(key);
        }

        Ok(Self { attributes })
    }

    /// Read and parse a manifest resource from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ManifestLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&content)?;
        debug!(
            "loaded manifest from {} ({} attributes)",
            path.display(),
            manifest.attributes.len()
        );
        Ok(manifest)
    }

    /// The process-wide manifest, loaded from [`MANIFEST_PATH`] on first
    /// call and cached thereafter.
    ///
    /// A failed load is not cached — the next call retries. Once a load
    /// succeeds, the instance is retained for the process lifetime.
    pub fn shared() -> Result<&'static Manifest, ConfigError> {
        SHARED.get_or_try_init(|| Self::load_from(PathBuf::from(MANIFEST_PATH)))
    }

    /// The named attribute's value, or `None` if the attribute is missing
    /// or empty.
    pub fn value(&self, key: impl AsRef<str>) -> Option<&str> {
        self.attributes
            .get(key.as_ref())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// All attributes, in no particular order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Look up a single attribute in the process-wide manifest.
///
/// Fails only if the manifest resource itself cannot be loaded. A missing
/// or empty attribute is `Ok(None)`.
pub fn manifest_value(key: impl AsRef<str>) -> Result<Option<&'static str>, ConfigError> {
    Ok(Manifest::shared()?.value(key))
}
