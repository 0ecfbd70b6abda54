use crate::error::Result;
use crate::time::{Time, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND};
use core::fmt::{Debug, Display, Formatter};

/// An externally defined granularity of time, usable wherever a built-in
/// [`Unit`] is.
///
/// Like [`TimeField`](crate::TimeField) implementations, these are stateless
/// singletons compared by identity.
pub trait TimeUnit {
    fn name(&self) -> &'static str;

    /// The unit's exact length in nanoseconds, or `None` if the duration is
    /// only estimated. Estimated units cannot be used for truncation.
    fn duration_nanos(&self) -> Option<i64>;

    /// Adds `amount` of this unit to `time`.
    fn add_to(&self, time: Time, amount: i64) -> Result<Time>;

    /// The number of whole units between `start` and `end`, negative if
    /// `end` is earlier.
    fn between(&self, start: Time, end: Time) -> Result<i64>;
}

/// A granularity used by additive arithmetic and truncation.
#[derive(Copy, Clone)]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    /// Half a day, the AM/PM cycle.
    HalfDays,
    /// A whole day. Adding days never changes a time of day.
    Days,
    Custom(&'static dyn TimeUnit),
}

impl Unit {
    pub fn name(self) -> &'static str {
        match self {
            Self::Nanos => "Nanos",
            Self::Micros => "Micros",
            Self::Millis => "Millis",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::HalfDays => "HalfDays",
            Self::Days => "Days",
            Self::Custom(u) => u.name(),
        }
    }

    /// The unit's exact length in nanoseconds, or `None` for custom units
    /// whose duration is estimated.
    pub fn duration_nanos(self) -> Option<i64> {
        Some(match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => NANOS_PER_SECOND,
            Self::Minutes => NANOS_PER_MINUTE,
            Self::Hours => NANOS_PER_HOUR,
            Self::HalfDays => NANOS_PER_DAY / 2,
            Self::Days => NANOS_PER_DAY,
            Self::Custom(u) => return u.duration_nanos(),
        })
    }

    const fn tag(self) -> u8 {
        match self {
            Self::Nanos => 0,
            Self::Micros => 1,
            Self::Millis => 2,
            Self::Seconds => 3,
            Self::Minutes => 4,
            Self::Hours => 5,
            Self::HalfDays => 6,
            Self::Days => 7,
            Self::Custom(_) => 8,
        }
    }
}

/// Built-in units compare by variant; custom units by identity.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => {
                core::ptr::eq(*a as *const _ as *const (), *b as *const _ as *const ())
            }
            _ => self.tag() == other.tag(),
        }
    }
}

impl Eq for Unit {}

impl Debug for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
