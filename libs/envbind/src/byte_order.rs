//! Native byte order of the running host.

/// Byte order used to encode multi-byte integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
}

macro_rules! codec {
    ($($read:ident, $put:ident => $ty:ty),+ $(,)?) => {
        $(
            /// Decodes the leading bytes of `buf`; `None` if `buf` is too short.
            #[must_use]
            pub fn $read(self, buf: &[u8]) -> Option<$ty> {
                let bytes = buf.get(..size_of::<$ty>())?.try_into().ok()?;
                Some(match self {
                    Self::Little => <$ty>::from_le_bytes(bytes),
                    Self::Big => <$ty>::from_be_bytes(bytes),
                })
            }

            /// Encodes `value` into the leading bytes of `buf`; `false` if
            /// `buf` is too short, in which case it is left unchanged.
            pub fn $put(self, buf: &mut [u8], value: $ty) -> bool {
                let Some(dst) = buf.get_mut(..size_of::<$ty>()) else {
                    return false;
                };
                let bytes = match self {
                    Self::Little => value.to_le_bytes(),
                    Self::Big => value.to_be_bytes(),
                };
                dst.copy_from_slice(&bytes);
                true
            }
        )+
    };
}

impl ByteOrder {
    /// Byte order of the target this binary was built for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// The byte order that is not native.
    #[must_use]
    pub const fn foreign() -> Self {
        match Self::native() {
            Self::Little => Self::Big,
            Self::Big => Self::Little,
        }
    }

    #[must_use]
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    codec! {
        read_u16, put_u16 => u16,
        read_u32, put_u32 => u32,
        read_u64, put_u64 => u64,
    }
}

/// True when the host stores integers least-significant byte first.
#[must_use]
pub const fn is_little_endian() -> bool {
    ByteOrder::native().is_little()
}

#[must_use]
pub const fn is_big_endian() -> bool {
    !is_little_endian()
}
