#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Derive macro for `envbind::Bindable`.
//!
//! ```rust,ignore
//! use envbind::EnvBind;
//!
//! #[derive(Default, EnvBind)]
//! pub struct WorkerEnv {
//!     pub queue: String,        // QUEUE
//!     pub concurrency: i32,     // CONCURRENCY
//!     pub tags: Vec<String>,    // TAGS
//!     #[env(skip)]
//!     pub started_at: u64,      // public but never bound
//!     scratch: Vec<u8>,         // private, never bound
//! }
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod env_bind;

/// Implements `envbind::Bindable` for a struct with named fields.
///
/// Every `pub` field is bound from the variable named after the upper-cased
/// field name, in declaration order. Private and restricted (`pub(crate)`)
/// fields are ignored, as are `pub` fields marked `#[env(skip)]`.
///
/// Each bound field type must implement `envbind::EnvField`.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_env_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    env_bind::expand_env_bind(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
