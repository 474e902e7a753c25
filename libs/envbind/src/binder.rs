//! Generic binder: copies environment variables onto [`Bindable`] records.
//!
//! For every field a record exposes, in declaration order, the binder reads
//! the variable named after the upper-cased field name. Absent or empty
//! variables leave the field at its caller-supplied default; anything else is
//! converted according to the field's [`FieldSlot`] and assigned in place.
//! The first conversion failure stops the bind and is returned to the caller.

use std::env::VarError;

use crate::error::BindError;
use crate::field::{Field, FieldSlot};
use crate::host::{self, EnvSnapshot};
use crate::separator::Separator;
use crate::source::{ReadEnv, SystemEnv};

/// A record whose public fields can be bound from the environment.
///
/// Usually derived with `#[derive(EnvBind)]`. Hand-written impls must list
/// only the fields meant to be written, in declaration order.
///
/// ```
/// use envbind::{Bindable, EnvField, Field};
///
/// struct Limits {
///     pub max_conns: i64,
///     pub hosts: Vec<String>,
///     cache: Vec<u8>,
/// }
///
/// impl Bindable for Limits {
///     fn env_fields(&mut self) -> Vec<Field<'_>> {
///         vec![
///             Field::new("max_conns", self.max_conns.slot()),
///             Field::new("hosts", self.hosts.slot()),
///         ]
///     }
/// }
/// ```
pub trait Bindable {
    fn env_fields(&mut self) -> Vec<Field<'_>>;
}

/// Variables actually applied by a bind, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    applied: Vec<String>,
}

impl BindReport {
    #[must_use]
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    #[must_use]
    pub fn contains(&self, var: &str) -> bool {
        self.applied.iter().any(|v| v == var)
    }
}

/// Binds records against an environment source.
///
/// Stateless apart from its configuration, so one binder can serve any number
/// of records, including from several threads when `E` is `Sync`.
#[derive(Debug, Clone)]
pub struct Binder<E = SystemEnv> {
    env: E,
    separator: Separator,
}

impl Binder<SystemEnv> {
    /// Binder over the process environment with the default `:` separator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(SystemEnv)
    }

    /// Binder over the process environment using the snapshot's separator.
    #[must_use]
    pub fn for_snapshot(snapshot: &EnvSnapshot) -> Self {
        Self::new().with_separator(snapshot.separator())
    }
}

impl Default for Binder<SystemEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ReadEnv> Binder<E> {
    pub fn with_source(env: E) -> Self {
        Self {
            env,
            separator: Separator::default(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Binds every field `target` exposes.
    ///
    /// Fields bound before a failing one keep their new values.
    ///
    /// # Errors
    /// - [`BindError::IllegalInteger`] when an integer field's variable does
    ///   not parse.
    /// - [`BindError::UnsupportedKind`] when a refused kind has its variable set.
    /// - [`BindError::NotUnicode`] when a variable is not valid UTF-8.
    pub fn bind<T: Bindable + ?Sized>(&self, target: &mut T) -> Result<BindReport, BindError> {
        let mut report = BindReport::default();
        for field in target.env_fields() {
            let var = field.var_name();
            let Field { name, slot } = field;
            if self.bind_var(&var, name, slot)? {
                report.applied.push(var);
            }
        }
        Ok(report)
    }

    /// Binds a single slot from an explicitly named variable.
    ///
    /// Returns `true` when the slot was assigned, `false` when the variable
    /// is absent or empty.
    ///
    /// # Errors
    /// Same conditions as [`Binder::bind`].
    pub fn bind_var(&self, var: &str, field: &str, slot: FieldSlot<'_>) -> Result<bool, BindError> {
        let raw = match self.env.var(var) {
            Ok(raw) if !raw.is_empty() => raw,
            Ok(_) | Err(VarError::NotPresent) => {
                tracing::trace!(var, field, "variable unset, keeping default");
                return Ok(false);
            }
            Err(VarError::NotUnicode(_)) => {
                return Err(BindError::NotUnicode {
                    var: var.to_owned(),
                });
            }
        };

        let kind = slot.kind();
        match slot {
            FieldSlot::Text(target) => *target = raw,
            FieldSlot::Integer(target) => {
                target
                    .assign(&raw)
                    .map_err(|source| BindError::IllegalInteger {
                        var: var.to_owned(),
                        value: raw,
                        source,
                    })?;
            }
            FieldSlot::List(target) => *target = self.separator.split(&raw),
            FieldSlot::Unsupported(kind) => {
                return Err(BindError::UnsupportedKind {
                    field: field.to_owned(),
                    var: var.to_owned(),
                    kind,
                });
            }
        }

        tracing::debug!(var, field, kind, "bound field from environment");
        Ok(true)
    }
}

/// Binds `target` against the process environment.
///
/// The separator comes from the process-wide snapshot, which is captured on
/// first use if the entry point has not done so already.
///
/// # Errors
/// Any error from capturing the snapshot or from [`Binder::bind`].
pub fn read_env_vars<T: Bindable + ?Sized>(target: &mut T) -> Result<BindReport, BindError> {
    let snapshot = host::init()?;
    Binder::for_snapshot(snapshot).bind(target)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::field::EnvField;
    use crate::source::InMemoryEnv;

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        foo: String,
        bar: i64,
        baz: Vec<String>,
        hidden: String,
    }

    impl Bindable for Sample {
        fn env_fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("foo", self.foo.slot()),
                Field::new("bar", self.bar.slot()),
                Field::new("baz", self.baz.slot()),
            ]
        }
    }

    struct WithRatio {
        name: String,
        ratio: f64,
    }

    impl Bindable for WithRatio {
        fn env_fields(&mut self) -> Vec<Field<'_>> {
            vec![
                Field::new("name", self.name.slot()),
                Field::new("ratio", self.ratio.slot()),
            ]
        }
    }

    fn env(pairs: &[(&str, &str)]) -> InMemoryEnv {
        pairs.iter().copied().collect()
    }

    fn defaults() -> Sample {
        Sample {
            foo: "default".to_owned(),
            bar: 7,
            baz: vec!["x".to_owned()],
            hidden: "secret".to_owned(),
        }
    }

    #[test]
    fn missing_variables_leave_defaults() {
        let mut sample = defaults();
        let report = Binder::with_source(env(&[])).bind(&mut sample).unwrap();
        assert_eq!(sample, defaults());
        assert!(report.is_empty());
    }

    #[test]
    fn empty_variables_never_clear_fields() {
        let mut sample = defaults();
        let source = env(&[("FOO", ""), ("BAR", ""), ("BAZ", "")]);
        Binder::with_source(source).bind(&mut sample).unwrap();
        assert_eq!(sample, defaults());
    }

    #[test]
    fn binds_each_supported_kind() {
        let mut sample = defaults();
        let source = env(&[("FOO", "hello"), ("BAR", "42"), ("BAZ", "a:b:c")]);
        let report = Binder::with_source(source).bind(&mut sample).unwrap();

        assert_eq!(sample.foo, "hello");
        assert_eq!(sample.bar, 42);
        assert_eq!(sample.baz, ["a", "b", "c"]);
        assert_eq!(report.applied(), ["FOO", "BAR", "BAZ"]);
    }

    #[test]
    fn unlisted_fields_are_never_written() {
        let mut sample = defaults();
        let source = env(&[("HIDDEN", "exposed")]);
        Binder::with_source(source).bind(&mut sample).unwrap();
        assert_eq!(sample.hidden, "secret");
    }

    #[test]
    fn lookup_key_is_upper_case_only() {
        let mut sample = defaults();
        let source = env(&[("foo", "lower"), ("Foo", "mixed")]);
        Binder::with_source(source).bind(&mut sample).unwrap();
        assert_eq!(sample.foo, "default");
    }

    struct MixedCase {
        listen_addr: String,
    }

    impl Bindable for MixedCase {
        fn env_fields(&mut self) -> Vec<Field<'_>> {
            vec![Field::new("listenAddr", self.listen_addr.slot())]
        }
    }

    #[test]
    fn bind_looks_up_field_var_name() {
        let mut record = MixedCase {
            listen_addr: String::new(),
        };
        let expected = record.env_fields()[0].var_name();
        assert_eq!(expected, "LISTENADDR");

        let source = env(&[("LISTENADDR", "0.0.0.0:80"), ("LISTEN_ADDR", "wrong")]);
        let report = Binder::with_source(source).bind(&mut record).unwrap();
        assert_eq!(record.listen_addr, "0.0.0.0:80");
        assert_eq!(report.applied(), [expected]);
    }

    #[test]
    fn semicolon_separator_splits_lists() {
        let mut sample = defaults();
        let source = env(&[("BAZ", "a;b;c")]);
        Binder::with_source(source)
            .with_separator(Separator::Semicolon)
            .bind(&mut sample)
            .unwrap();
        assert_eq!(sample.baz, ["a", "b", "c"]);
    }

    #[test]
    fn list_split_keeps_empty_runs() {
        let mut sample = defaults();
        Binder::with_source(env(&[("BAZ", "a::b:")]))
            .bind(&mut sample)
            .unwrap();
        assert_eq!(sample.baz, ["a", "", "b", ""]);
    }

    #[test]
    fn illegal_integer_is_an_error() {
        let mut sample = defaults();
        let err = Binder::with_source(env(&[("BAR", "notanumber")]))
            .bind(&mut sample)
            .unwrap_err();

        match err {
            BindError::IllegalInteger { var, value, .. } => {
                assert_eq!(var, "BAR");
                assert_eq!(value, "notanumber");
            }
            other => panic!("expected IllegalInteger, got {other:?}"),
        }
        assert_eq!(sample.bar, 7);
    }

    #[test]
    fn fields_before_a_failure_stay_bound() {
        let mut sample = defaults();
        let source = env(&[("FOO", "set"), ("BAR", "x"), ("BAZ", "a:b")]);
        assert!(Binder::with_source(source).bind(&mut sample).is_err());
        assert_eq!(sample.foo, "set");
        assert_eq!(sample.baz, ["x"]);
    }

    #[test]
    fn unsupported_kind_with_variable_is_an_error() {
        let mut record = WithRatio {
            name: String::new(),
            ratio: 0.5,
        };
        let err = Binder::with_source(env(&[("RATIO", "1.5")]))
            .bind(&mut record)
            .unwrap_err();

        match err {
            BindError::UnsupportedKind { field, var, kind } => {
                assert_eq!(field, "ratio");
                assert_eq!(var, "RATIO");
                assert_eq!(kind, "f64");
            }
            other => panic!("expected UnsupportedKind, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_kind_without_variable_is_skipped() {
        let mut record = WithRatio {
            name: String::new(),
            ratio: 0.5,
        };
        Binder::with_source(env(&[("NAME", "n")]))
            .bind(&mut record)
            .unwrap();
        assert_eq!(record.name, "n");
        assert!((record.ratio - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bind_var_uses_explicit_name() {
        let mut user = String::new();
        let binder = Binder::with_source(env(&[("USERNAME", "bob")]));
        assert!(binder.bind_var("USERNAME", "user", user.slot()).unwrap());
        assert_eq!(user, "bob");
        assert!(!binder.bind_var("MISSING", "user", user.slot()).unwrap());
        assert_eq!(user, "bob");
    }

    #[test]
    fn binder_defaults_to_colon() {
        assert_eq!(Binder::new().separator(), Separator::Colon);
        assert_eq!(
            Binder::with_source(env(&[])).separator(),
            Separator::Colon
        );
    }

    #[test]
    fn for_snapshot_takes_snapshot_separator() {
        let windows = EnvSnapshot::capture(env(&[("HOST", "windows")])).unwrap();
        assert_eq!(Binder::for_snapshot(&windows).separator(), Separator::Semicolon);

        let linux = EnvSnapshot::capture(env(&[("HOST", "linux")])).unwrap();
        assert_eq!(Binder::for_snapshot(&linux).separator(), Separator::Colon);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_value_is_an_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(&[0x66, 0x6f, 0x80]);
        temp_env::with_var("ENVBIND_BINDER_NON_UTF8", Some(raw), || {
            let mut value = String::new();
            let err = Binder::new()
                .bind_var("ENVBIND_BINDER_NON_UTF8", "value", value.slot())
                .unwrap_err();
            assert!(matches!(err, BindError::NotUnicode { .. }));
        });
    }
}
