use tracing::debug;

use crate::parse::FromEnvValue;
use crate::reader::Env;
use crate::source::EnvSource;

impl<S: EnvSource> Env<S> {
    /// Reads `key` as `T`, substituting `fallback` on any failure.
    pub fn get_or<T: FromEnvValue>(&self, key: &str, fallback: T) -> T {
        self.get_or_else(key, || fallback)
    }

    /// Reads `key` as `T`, computing the fallback only when the read fails.
    pub fn get_or_else<T, F>(&self, key: &str, fallback: F) -> T
    where
        T: FromEnvValue,
        F: FnOnce() -> T,
    {
        match self.get(key) {
            Ok(value) => value,
            Err(err) => {
                debug!(key = err.key(), kind = ?err.kind(), error = %err, "using fallback value");
                fallback()
            }
        }
    }

    pub fn get_string_or(&self, key: &str, fallback: impl Into<String>) -> String {
        self.get_or_else(key, || fallback.into())
    }
}

macro_rules! fallback_accessors {
    ($($name:ident => $ty:ty;)*) => {
        impl<S: EnvSource> Env<S> {
            $(
                pub fn $name(&self, key: &str, fallback: $ty) -> $ty {
                    self.get_or(key, fallback)
                }
            )*
        }

        $(
            /// Reads the live process environment, substituting `fallback`
            /// when the variable is unset, empty or malformed.
            pub fn $name(key: &str, fallback: $ty) -> $ty {
                Env::process().$name(key, fallback)
            }
        )*
    };
}

fallback_accessors! {
    get_bool_or => bool;
    get_int_or => isize;
    get_i8_or => i8;
    get_i16_or => i16;
    get_i32_or => i32;
    get_i64_or => i64;
    get_f32_or => f32;
    get_f64_or => f64;
}

/// Reads `key` from the process environment, substituting `fallback` on any
/// failure.
pub fn get_or<T: FromEnvValue>(key: &str, fallback: T) -> T {
    Env::process().get_or(key, fallback)
}

pub fn get_or_else<T: FromEnvValue, F: FnOnce() -> T>(key: &str, fallback: F) -> T {
    Env::process().get_or_else(key, fallback)
}

pub fn get_string_or(key: &str, fallback: impl Into<String>) -> String {
    Env::process().get_string_or(key, fallback)
}
