use std::collections::HashMap;
use std::ffi::OsString;
use std::sync::Arc;

use tracing::trace;

use crate::error::EnvError;
use crate::parse::{ParseValueError, ValueKind};

/// Read-only view over a store of environment variables.
///
/// Accessors only ever go through this trait, so tests can hand in an
/// isolated [`MapEnv`] instead of mutating the process environment.
pub trait EnvSource: Send + Sync {
    /// Raw value bound to `key`, or `None` when the variable is not set.
    fn get(&self, key: &str) -> Option<OsString>;
}

/// The live process environment. Every call re-reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        // Names the platform cannot hold are never set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var_os(key)
    }
}

/// In-memory environment backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<OsString> {
        (**self).get(key)
    }
}

impl<S: EnvSource + ?Sized> EnvSource for Arc<S> {
    fn get(&self, key: &str) -> Option<OsString> {
        (**self).get(key)
    }
}

/// Fetches the raw value of `key` from `source`.
///
/// An unset variable fails with [`EnvError::Undefined`] and an empty one with
/// [`EnvError::Empty`]; an empty value is never handed back as a success.
/// `kind` is only used to report a value that is not valid Unicode, which no
/// supported type can be parsed from.
pub fn lookup<S: EnvSource + ?Sized>(
    source: &S,
    key: &str,
    kind: ValueKind,
) -> Result<String, EnvError> {
    trace!(key, "looking up environment variable");
    let raw = source.get(key).ok_or_else(|| EnvError::Undefined {
        key: key.to_string(),
    })?;

    if raw.is_empty() {
        return Err(EnvError::Empty {
            key: key.to_string(),
        });
    }

    raw.into_string().map_err(|_| EnvError::InvalidFormat {
        key: key.to_string(),
        kind,
        source: ParseValueError::NotUnicode,
    })
}
