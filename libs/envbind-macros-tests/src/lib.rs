//! UI tests for `#[derive(EnvBind)]` live in `tests/`.
//!
//! Field types without an `EnvField` impl are rejected by the compiler at the
//! derive site. The exact rustc output varies between toolchains, so these
//! cases only pin the error code.
//!
//! A map field:
//!
//! ```compile_fail,E0277
//! use std::collections::HashMap;
//! use envbind::EnvBind;
//!
//! #[derive(Default, EnvBind)]
//! pub struct Routes {
//!     pub table: HashMap<String, String>,
//! }
//! ```
//!
//! A nested record, even one that derives `EnvBind` itself:
//!
//! ```compile_fail,E0277
//! use envbind::EnvBind;
//!
//! #[derive(Default, EnvBind)]
//! pub struct Database {
//!     pub url: String,
//! }
//!
//! #[derive(Default, EnvBind)]
//! pub struct Service {
//!     pub name: String,
//!     pub database: Database,
//! }
//! ```
//!
//! The same records compile once the offending field is skipped:
//!
//! ```
//! use std::collections::HashMap;
//! use envbind::{Bindable, EnvBind};
//!
//! #[derive(Default, EnvBind)]
//! pub struct Routes {
//!     pub name: String,
//!     #[env(skip)]
//!     pub table: HashMap<String, String>,
//! }
//!
//! let mut routes = Routes::default();
//! assert_eq!(routes.env_fields().len(), 1);
//! ```
