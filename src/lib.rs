//! Flat, typed configuration access. Merge your sources into one string
//! map, declare what's required, and read values through typed accessors.
//!
//! ```no_run
//! use flatconf::{accessors, ConfigKey, ConfigStore};
//!
//! let timeout = ConfigKey::new("TIMEOUT_SECONDS");
//! let db_url = ConfigKey::new("DB_URL");
//!
//! let config = ConfigStore::new()
//!     .load_properties_file("app.properties")?
//!     .load_environment()
//!     .put_if_absent(&timeout, "30")
//!     .mandatory_fields([&db_url])
//!     .build()?;
//!
//! let timeout = accessors::mandatory_integer(&config, &timeout)?;
//! let db_url = accessors::mandatory_url(&config, &db_url)?;
//! # Ok::<(), flatconf::ConfigError>(())
//! ```
//!
//! # Design: one flat map, one primitive
//!
//! Everything a flatconf application reads comes from a single flat mapping
//! of string keys to raw string values. There is no nesting, no schema, and
//! no per-source bookkeeping after the merge — a value loaded from the
//! environment is indistinguishable from one loaded from a file. The
//! responsibilities split cleanly:
//!
//! - **[`ConfigStore`]** accumulates. Source loaders and [`put`] merge
//!   entries; [`mandatory_fields`] records what must be present.
//! - **[`Config`]** answers exactly one question: the raw string for a key,
//!   or a default. It never coerces and never validates, which keeps it
//!   trivial to construct in tests.
//! - **[`accessors`]** coerce and validate. Each typed accessor reads the
//!   raw string through `Config` and either parses it or fails naming the
//!   key and the expected type.
//!
//! [`put`]: ConfigStore::put
//! [`mandatory_fields`]: ConfigStore::mandatory_fields
//!
//! # Sources and precedence
//!
//! Every loader overwrite-merges: whatever you load *last* wins, key by
//! key. Precedence is therefore just call order on the builder:
//!
//! ```text
//! .load_properties_file("defaults.properties")   lowest
//! .load_manifest()
//! .load_environment()                            highest
//! ```
//!
//! The one non-overwrite primitive is [`put_if_absent`](ConfigStore::put_if_absent):
//! it only writes when the key has no value yet. Use it to declare
//! fallbacks — before loading sources (they will overwrite it) or after
//! (it won't clobber what they loaded).
//!
//! The supported sources:
//!
//! - **Environment variables** — the whole process environment, merged
//!   as-is.
//! - **Packaging manifest** — a `Key: Value` attribute resource at a fixed
//!   well-known location, loaded once per process and cached (see
//!   [`Manifest`]).
//! - **Properties resources** — `key=value` files with `#` comments, read
//!   from a path or from embedded text.
//!
//! # Mandatory vs optional
//!
//! Presence is enforced in two places, deliberately:
//!
//! - [`build`](ConfigStore::build) checks every key declared via
//!   `mandatory_fields` and reports **all** missing keys in one batched
//!   error, so incremental requirement declarations produce one actionable
//!   failure instead of a cascade.
//! - Each `mandatory_*` accessor re-asserts presence for its own key at
//!   read time; each `optional_*` accessor takes a fallback instead.
//!
//! A present-but-malformed value is always an error. The optional
//! accessors' defaults apply only to absent (or empty) values — they never
//! paper over a value that fails to parse.
//!
//! # Error handling
//!
//! All fallible operations return [`ConfigError`]. Configuration errors are
//! treated as non-recoverable environment faults: the expected pattern is
//! to propagate them with `?` to the top of startup and stop. Nothing in
//! this crate retries, and nothing silently defaults outside the explicit
//! `optional_*` path.

pub mod accessors;
pub mod error;

mod config;
mod key;
mod manifest;
mod properties;
mod store;

pub use config::Config;
pub use error::ConfigError;
pub use key::ConfigKey;
pub use manifest::{MANIFEST_PATH, Manifest, manifest_value};
pub use store::ConfigStore;
