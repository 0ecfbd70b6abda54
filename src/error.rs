use crate::field::Field;
use crate::unit::Unit;
use core::fmt::{Display, Formatter};

pub type Result<T> = core::result::Result<T, Error>;

/// Why a time operation failed.
///
/// Every error is a deterministic function of the inputs and is reported at
/// the call that produced it. Values are immutable, so a failed operation
/// leaves nothing to roll back.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A component or field value was outside its legal range.
    OutOfRange {
        what: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    /// The field does not apply to a time of day.
    UnsupportedField(Field),
    /// The unit does not apply to a time of day, e.g. its duration is
    /// estimated or spans at least a whole day.
    UnsupportedUnit(Unit),
    /// A day-spanning field was requested through the narrow accessor.
    FieldTooWide(Field),
    /// The byte source ran out mid-decode.
    Eof,
    /// The byte source held more than one encoded value.
    ExpectedEof,
    /// The underlying stream failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::OutOfRange {
                what,
                value,
                min,
                max,
            } => write!(f, "{what} {value} out of range {min}..={max}"),
            Self::UnsupportedField(field) => write!(f, "unsupported field: {field}"),
            Self::UnsupportedUnit(unit) => write!(f, "unsupported unit: {unit}"),
            Self::FieldTooWide(field) => write!(f, "field too large for an i32: {field}"),
            Self::Eof => f.write_str("unexpected end of input"),
            Self::ExpectedEof => f.write_str("expected end of input"),
            #[cfg(feature = "std")]
            Self::Io(e) => Display::fmt(e, f),
        }
    }
}

/// `Io` errors compare by [`std::io::ErrorKind`]; everything else by value.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::OutOfRange {
                    what,
                    value,
                    min,
                    max,
                },
                Self::OutOfRange {
                    what: what2,
                    value: value2,
                    min: min2,
                    max: max2,
                },
            ) => what == what2 && value == value2 && min == min2 && max == max2,
            (Self::UnsupportedField(a), Self::UnsupportedField(b)) => a == b,
            (Self::UnsupportedUnit(a), Self::UnsupportedUnit(b)) => a == b,
            (Self::FieldTooWide(a), Self::FieldTooWide(b)) => a == b,
            (Self::Eof, Self::Eof) => true,
            (Self::ExpectedEof, Self::ExpectedEof) => true,
            #[cfg(feature = "std")]
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

#[cfg(feature = "std")]
// TODO expose to no_std when error_in_core stabilized (https://github.com/rust-lang/rust/issues/103765)
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
