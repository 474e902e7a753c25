//! Read-only access to environment variables.
//!
//! # Examples
//!
//! ```
//! use envbind::source::{ReadEnv, SystemEnv};
//!
//! fn listen_addr<E: ReadEnv>(env: &E) -> String {
//!     env.var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_owned())
//! }
//!
//! let addr = listen_addr(&SystemEnv);
//! ```

#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
use std::env;

/// Source of environment variable values.
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait ReadEnv {
    /// Looks up `key`.
    ///
    /// # Errors
    /// [`env::VarError::NotPresent`] when unset, [`env::VarError::NotUnicode`]
    /// when the value is not valid UTF-8.
    fn var(&self, key: &str) -> Result<String, env::VarError>;
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        (**self).var(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

/// Map-backed environment for tests.
///
/// Lookups never reach `std::env`, so tests using it can run in parallel
/// without `temp-env`. Mutators take `&self`; the map sits in a `RefCell`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let env = Self::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn system_env_delegates_to_std() {
        temp_env::with_var("ENVBIND_SOURCE_PROBE", Some("on"), || {
            assert_eq!(SystemEnv.var("ENVBIND_SOURCE_PROBE").unwrap(), "on");
        });
        temp_env::with_var_unset("ENVBIND_SOURCE_PROBE", || {
            assert!(matches!(
                SystemEnv.var("ENVBIND_SOURCE_PROBE"),
                Err(env::VarError::NotPresent)
            ));
        });
    }

    #[test]
    fn in_memory_set_get_remove() {
        let env = InMemoryEnv::new();
        env.set("KEY", "v1");
        assert_eq!(env.var("KEY").unwrap(), "v1");

        env.set("KEY", "v2");
        assert_eq!(env.var("KEY").unwrap(), "v2");

        env.remove("KEY");
        assert!(matches!(env.var("KEY"), Err(env::VarError::NotPresent)));
    }

    #[test]
    fn in_memory_contains_and_clear() {
        let env: InMemoryEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert!(env.contains("A"));
        assert!(env.contains("B"));

        env.clear();
        assert!(!env.contains("A"));
        assert!(!env.contains("B"));
    }

    #[test]
    fn borrowed_source_reads_through() {
        fn read<E: ReadEnv>(env: E, key: &str) -> Option<String> {
            env.var(key).ok()
        }

        let env = InMemoryEnv::new();
        env.set("USER", "alice");
        assert_eq!(read(&env, "USER").as_deref(), Some("alice"));
        assert_eq!(read(&env, "MISSING"), None);
    }
}
