use std::fmt;

/// An opaque, named handle for a configuration setting.
///
/// Using a `ConfigKey` instead of a raw string gives call sites a single
/// place to declare each setting's name — typically as a `const`-like
/// module-level value — so a typo becomes a missing-key error at one
/// declaration site rather than a silent mismatch scattered across lookups.
/// Two keys are equal iff their names are equal. Every API that takes a key
/// also accepts a plain `&str` for interop.
///
/// ```
/// use flatconf::ConfigKey;
///
/// let timeout = ConfigKey::new("TIMEOUT_SECONDS");
/// assert_eq!(timeout.name(), "TIMEOUT_SECONDS");
/// assert_eq!(timeout, ConfigKey::new("TIMEOUT_SECONDS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigKey {
    name: String,
}

impl ConfigKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<&str> for ConfigKey {
    fn from(name: &str) -> Self {
        ConfigKey::new(name)
    }
}

impl From<String> for ConfigKey {
    fn from(name: String) -> Self {
        ConfigKey::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_is_by_name() {
        assert_eq!(ConfigKey::new("HOST"), ConfigKey::new("HOST"));
        assert_ne!(ConfigKey::new("HOST"), ConfigKey::new("PORT"));
    }

    #[test]
    fn display_renders_name() {
        assert_eq!(ConfigKey::new("DB_URL").to_string(), "DB_URL");
    }

    #[test]
    fn hashes_like_its_name() {
        let mut set = HashSet::new();
        set.insert(ConfigKey::new("HOST"));
        set.insert(ConfigKey::new("HOST"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn as_ref_gives_the_name() {
        fn takes_key(key: impl AsRef<str>) -> String {
            key.as_ref().to_string()
        }
        assert_eq!(takes_key(ConfigKey::new("PORT")), "PORT");
        assert_eq!(takes_key("PORT"), "PORT");
    }
}
