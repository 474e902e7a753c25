//! Field slots: the per-field capability a [`Bindable`](crate::Bindable)
//! record hands to the binder.
//!
//! A slot borrows one field mutably and tells the binder how the raw variable
//! text must be converted. Records never expose anything else, so binding
//! needs no runtime type introspection.

use std::num::ParseIntError;

/// Mutable view of one bindable field, tagged with its conversion.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// Assigned the raw value verbatim.
    Text(&'a mut String),
    /// Parsed as a base-10 signed integer.
    Integer(IntegerSlot<'a>),
    /// Split on the active [`Separator`](crate::Separator).
    List(&'a mut Vec<String>),
    /// A kind the binder refuses; carries the kind name for diagnostics.
    Unsupported(&'static str),
}

impl FieldSlot<'_> {
    /// Short name of the conversion, used in logs and errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Integer(slot) => slot.kind(),
            Self::List(_) => "string list",
            Self::Unsupported(kind) => *kind,
        }
    }
}

/// Signed integer targets of every width.
#[derive(Debug)]
pub enum IntegerSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

impl IntegerSlot<'_> {
    /// Parses `raw` into the slot's width. Values out of range fail.
    ///
    /// The slot is left untouched on failure.
    ///
    /// # Errors
    /// Returns the underlying [`ParseIntError`] when `raw` is not a base-10
    /// integer representable in the target width.
    pub fn assign(self, raw: &str) -> Result<(), ParseIntError> {
        match self {
            Self::I8(v) => *v = raw.parse()?,
            Self::I16(v) => *v = raw.parse()?,
            Self::I32(v) => *v = raw.parse()?,
            Self::I64(v) => *v = raw.parse()?,
            Self::Isize(v) => *v = raw.parse()?,
        }
        Ok(())
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
        }
    }
}

/// Types that can be the target of an environment binding.
///
/// Implemented for `String`, the signed integers and `Vec<String>`. The
/// primitive kinds the binder refuses (`bool`, `char`, floats, `i128`,
/// unsigned integers) also implement it and report [`FieldSlot::Unsupported`].
pub trait EnvField {
    fn slot(&mut self) -> FieldSlot<'_>;
}

impl EnvField for String {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Text(self)
    }
}

impl EnvField for Vec<String> {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::List(self)
    }
}

macro_rules! impl_integer_field {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl EnvField for $ty {
                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Integer(IntegerSlot::$variant(self))
                }
            }
        )+
    };
}

impl_integer_field! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
}

macro_rules! impl_unsupported_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EnvField for $ty {
                fn slot(&mut self) -> FieldSlot<'_> {
                    FieldSlot::Unsupported(stringify!($ty))
                }
            }
        )+
    };
}

impl_unsupported_field!(bool, char, f32, f64, u8, u16, u32, u64, u128, usize, i128);

/// One binding target of a record, in declaration order.
#[derive(Debug)]
pub struct Field<'a> {
    pub name: &'static str,
    pub slot: FieldSlot<'a>,
}

impl<'a> Field<'a> {
    #[must_use]
    pub fn new(name: &'static str, slot: FieldSlot<'a>) -> Self {
        Self { name, slot }
    }

    /// Environment variable consulted for this field: the upper-cased name.
    #[must_use]
    pub fn var_name(&self) -> String {
        self.name.to_uppercase()
    }
}
