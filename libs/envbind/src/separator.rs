use std::fmt;

/// Delimiter used to split list-valued variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Separator {
    /// `:`, used on every host except Windows.
    #[default]
    Colon,
    /// `;`, used on Windows.
    Semicolon,
}

impl Separator {
    /// Picks the separator for a resolved host family.
    #[must_use]
    pub fn for_host(host: &str) -> Self {
        if host == "windows" {
            Self::Semicolon
        } else {
            Self::Colon
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Semicolon => ';',
        }
    }

    /// Splits `raw` literally: no trimming, empty runs are kept.
    #[must_use]
    pub fn split(self, raw: &str) -> Vec<String> {
        raw.split(self.as_char()).map(str::to_owned).collect()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
