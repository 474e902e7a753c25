//! Process-wide host identity snapshot.
//!
//! The snapshot holds the host family and the current user name. It is bound
//! from the `HOST` and `USER` variables like any other record, then patched
//! with fallbacks:
//! - an empty host becomes the OS family reported by the standard library
//!   (`"linux"`, `"windows"`, `"macos"`, ...);
//! - an empty user is retried from `USERNAME`. If both are unset the user
//!   stays empty; there is no OS account lookup.
//!
//! Entry points call [`init`] before constructing anything else and hand the
//! returned snapshot to components that need it.

use std::sync::OnceLock;

use crate::binder::{Bindable, Binder};
use crate::error::BindError;
use crate::field::{EnvField, Field};
use crate::separator::Separator;
use crate::source::{ReadEnv, SystemEnv};

static SNAPSHOT: OnceLock<EnvSnapshot> = OnceLock::new();

const LINUX: &str = "linux";
const WINDOWS: &str = "windows";

/// Host family and user name, captured once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    host: String,
    user: String,
}

#[derive(Default)]
struct Identity {
    host: String,
    user: String,
}

impl Bindable for Identity {
    fn env_fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("host", self.host.slot()),
            Field::new("user", self.user.slot()),
        ]
    }
}

impl EnvSnapshot {
    /// Reads `HOST`/`USER` (and `USERNAME`) from `env` and applies fallbacks.
    ///
    /// # Errors
    /// Returns [`BindError::NotUnicode`] if one of those variables is not
    /// valid UTF-8.
    pub fn capture<E: ReadEnv>(env: E) -> Result<Self, BindError> {
        let binder = Binder::with_source(env);
        let mut identity = Identity::default();
        binder.bind(&mut identity)?;

        if identity.host.is_empty() {
            identity.host = std::env::consts::OS.to_owned();
            tracing::debug!(host = %identity.host, "HOST unset, using OS family");
        }
        if identity.user.is_empty() {
            binder.bind_var("USERNAME", "user", identity.user.slot())?;
        }

        let snapshot = Self {
            host: identity.host,
            user: identity.user,
        };
        tracing::debug!(
            host = %snapshot.host,
            user = %snapshot.user,
            separator = %snapshot.separator(),
            "captured environment snapshot"
        );
        Ok(snapshot)
    }

    /// Host family, e.g. `"linux"` or `"windows"`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Current user name; empty when neither `USER` nor `USERNAME` is set.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn is_linux(&self) -> bool {
        self.host == LINUX
    }

    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.host == WINDOWS
    }

    /// List separator for this host: `;` on Windows, `:` elsewhere.
    #[must_use]
    pub fn separator(&self) -> Separator {
        Separator::for_host(&self.host)
    }
}

/// Captures the process-wide snapshot from the system environment.
///
/// Only the first successful call reads the environment; later calls return
/// the same snapshot. A failed capture is not cached.
///
/// # Errors
/// See [`EnvSnapshot::capture`].
pub fn init() -> Result<&'static EnvSnapshot, BindError> {
    if let Some(snapshot) = SNAPSHOT.get() {
        return Ok(snapshot);
    }
    let snapshot = EnvSnapshot::capture(SystemEnv)?;
    Ok(SNAPSHOT.get_or_init(|| snapshot))
}

/// The process-wide snapshot, if [`init`] has succeeded.
#[must_use]
pub fn current() -> Option<&'static EnvSnapshot> {
    SNAPSHOT.get()
}
