//! Environment variable test helpers.
//!
//! Mutating the process environment is `unsafe` in edition 2024; tests that use
//! these helpers must not run concurrently with each other (`#[serial]`).
//! Every guard restores the value it replaced when dropped.

use std::ffi::OsString;

/// RAII guard that restores (or unsets) the original value when dropped.
#[must_use = "the previous value is restored as soon as the guard is dropped"]
pub struct EnvGuard {
    key: String,
    prev: Option<OsString>,
}

impl EnvGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match self.prev.take() {
                Some(v) => std::env::set_var(&self.key, v),
                None => std::env::remove_var(&self.key),
            }
        }
    }
}

/// Set an environment variable, returning a guard that restores the previous value.
pub fn set_env_guarded(key: &str, val: &str) -> EnvGuard {
    let prev = std::env::var_os(key);
    unsafe {
        std::env::set_var(key, val);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Remove an environment variable, returning a guard that puts it back.
pub fn unset_env_guarded(key: &str) -> EnvGuard {
    let prev = std::env::var_os(key);
    unsafe {
        std::env::remove_var(key);
    }
    EnvGuard {
        key: key.to_string(),
        prev,
    }
}

/// Builder-style collection of environment guards. Dropping restores all keys
/// in reverse order, so a key touched twice ends up with its original value.
#[must_use = "dropping the scope restores the environment immediately"]
#[derive(Default)]
pub struct EnvScope {
    guards: Vec<EnvGuard>,
}

impl EnvScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key -> val, capturing the previous value; chainable.
    pub fn set(mut self, key: &str, val: &str) -> Self {
        self.insert(key, val);
        self
    }

    /// Make sure `key` is unset for the lifetime of the scope.
    pub fn unset(mut self, key: &str) -> Self {
        self.remove(key);
        self
    }

    pub fn insert(&mut self, key: &str, val: &str) {
        self.guards.push(set_env_guarded(key, val));
    }

    pub fn remove(&mut self, key: &str) {
        self.guards.push(unset_env_guarded(key));
    }

    /// Bulk set from iterator.
    pub fn extend<'a, I>(mut self, kvs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (k, v) in kvs {
            self.insert(k, v);
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.guards.iter().map(EnvGuard::key)
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}
