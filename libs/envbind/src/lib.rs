#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Typed environment-variable binding.
//!
//! This crate populates caller-owned configuration records from the process
//! environment and exposes a process-wide snapshot of host identity.
//!
//! | Concern | Item(s) |
//! |---------|---------|
//! | Host identity | [`EnvSnapshot`], [`init`], [`current`] |
//! | Binding | [`Bindable`], [`Binder`], [`read_env_vars`], `#[derive(EnvBind)]` |
//! | Field conversion | [`EnvField`], [`FieldSlot`], [`IntegerSlot`] |
//! | Env access | [`ReadEnv`], [`SystemEnv`], `InMemoryEnv`* |
//! | Byte order | [`ByteOrder`], [`is_little_endian`], [`is_big_endian`] |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Example
//!
//! ```ignore
//! use envbind::EnvBind;
//!
//! #[derive(Default, EnvBind)]
//! pub struct ServerEnv {
//!     pub listen: String,     // LISTEN
//!     pub workers: i32,       // WORKERS
//!     pub plugins: Vec<String>, // PLUGINS, split on the host separator
//!     cache: Vec<u8>,         // private, never touched
//! }
//!
//! fn main() -> Result<(), envbind::BindError> {
//!     let snapshot = envbind::init()?;
//!     let mut env = ServerEnv { workers: 4, ..ServerEnv::default() };
//!     envbind::Binder::for_snapshot(snapshot).bind(&mut env)?;
//!     Ok(())
//! }
//! ```
//!
//! # Supported field types
//!
//! `String`, the signed integers (`i8` to `i64`, `isize`) and `Vec<String>`.
//! `bool`, `char`, floats, `i128` and unsigned integers are recognized but refused
//! with [`BindError::UnsupportedKind`] when their variable is set. Any other
//! type does not implement [`EnvField`] and cannot be derived.

pub mod binder;
pub mod byte_order;
pub mod error;
pub mod field;
pub mod host;
pub mod separator;
pub mod source;

pub use binder::{BindReport, Bindable, Binder, read_env_vars};
pub use byte_order::{ByteOrder, is_big_endian, is_little_endian};
pub use error::BindError;
pub use field::{EnvField, Field, FieldSlot, IntegerSlot};
pub use host::{EnvSnapshot, current, init};
pub use separator::Separator;
#[cfg(any(test, feature = "test-support"))]
pub use source::InMemoryEnv;
pub use source::{ReadEnv, SystemEnv};

#[cfg(feature = "derive")]
pub use envbind_macros::EnvBind;
