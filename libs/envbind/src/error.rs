use std::num::ParseIntError;

/// Errors raised while binding environment variables onto a record.
///
/// Every variant describes a configuration defect. Callers are expected to
/// stop startup on any of them rather than continue half-initialized.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("illegal integer conversion for {var}='{value}': {source}")]
    IllegalInteger {
        var: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unsupported field kind '{kind}' for field '{field}' (bound from {var})")]
    UnsupportedKind {
        field: String,
        var: String,
        kind: &'static str,
    },

    #[error("environment variable {var} is not valid unicode")]
    NotUnicode { var: String },
}

impl BindError {
    /// Name of the environment variable that triggered the error.
    #[must_use]
    pub fn var(&self) -> &str {
        match self {
            Self::IllegalInteger { var, .. }
            | Self::UnsupportedKind { var, .. }
            | Self::NotUnicode { var } => var,
        }
    }
}
