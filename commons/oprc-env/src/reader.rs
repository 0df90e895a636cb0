use std::borrow::Cow;

use crate::error::{EnvError, Result};
use crate::parse::FromEnvValue;
use crate::source::{EnvSource, ProcessEnv, lookup};

/// Typed reader over an [`EnvSource`].
///
/// Holds no state besides the source and an optional key prefix; every
/// call performs a fresh lookup.
#[derive(Debug, Clone, Default)]
pub struct Env<S = ProcessEnv> {
    source: S,
    prefix: Option<String>,
}

impl Env<ProcessEnv> {
    pub fn process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl<S: EnvSource> Env<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: None,
        }
    }

    /// Looks every key up as `{prefix}{key}`, e.g. `OAAS_` + `PORT`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn qualify<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match &self.prefix {
            Some(prefix) => Cow::Owned(format!("{prefix}{key}")),
            None => Cow::Borrowed(key),
        }
    }

    /// Reads `key` and converts it into `T`.
    ///
    /// Fails with `Undefined` or `Empty` from the lookup, or with
    /// `InvalidFormat` when the value does not fit `T`'s grammar or range.
    pub fn get<T: FromEnvValue>(&self, key: &str) -> Result<T> {
        let key = self.qualify(key);
        let raw = lookup(&self.source, &key, T::KIND)?;
        T::parse_env(raw).map_err(|source| EnvError::InvalidFormat {
            key: key.into_owned(),
            kind: T::KIND,
            source,
        })
    }

    /// Like [`Env::get`], but an unset or empty variable yields `Ok(None)`.
    /// A value that fails to parse is still an error.
    pub fn get_optional<T: FromEnvValue>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_missing() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

macro_rules! typed_accessors {
    ($($(#[$doc:meta])* $name:ident => $ty:ty;)*) => {
        impl<S: EnvSource> Env<S> {
            $(
                $(#[$doc])*
                pub fn $name(&self, key: &str) -> Result<$ty> {
                    self.get(key)
                }
            )*
        }

        $(
            $(#[$doc])*
            ///
            /// Reads the live process environment.
            pub fn $name(key: &str) -> Result<$ty> {
                Env::process().$name(key)
            }
        )*
    };
}

typed_accessors! {
    /// Raw text of the variable. Never returns an empty string.
    get_string => String;
    /// Boolean in the `1 t T TRUE true True` / `0 f F FALSE false False` grammar.
    get_bool => bool;
    /// Integer of the platform's native width.
    get_int => isize;
    get_i8 => i8;
    get_i16 => i16;
    get_i32 => i32;
    get_i64 => i64;
    get_f32 => f32;
    get_f64 => f64;
}

/// Reads `key` from the process environment and converts it into `T`.
pub fn get<T: FromEnvValue>(key: &str) -> Result<T> {
    Env::process().get(key)
}

/// Reads `key` from the process environment; unset or empty is `Ok(None)`.
pub fn get_optional<T: FromEnvValue>(key: &str) -> Result<Option<T>> {
    Env::process().get_optional(key)
}
