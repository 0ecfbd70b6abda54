use crate::error::{Error, Result};
use crate::time::{
    Time, MICROS_PER_DAY, MILLIS_PER_DAY, MINUTES_PER_DAY, NANOS_PER_DAY, SECONDS_PER_DAY,
};
use core::fmt::{Debug, Display, Formatter};

/// The inclusive range of values a field can take.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub const fn min(self) -> i64 {
        self.min
    }

    pub const fn max(self) -> i64 {
        self.max
    }

    pub const fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `value` unchanged, or the range-validation error naming
    /// `what`.
    pub fn check(self, what: &'static str, value: i64) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Error::OutOfRange {
                what,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// An externally defined temporal field, queried and rewritten through the
/// same protocol as the built-in [`Field`]s.
///
/// Implementations are stateless singletons compared by identity: hold one in
/// a `static` and wrap a reference in [`Field::Custom`]. The core never
/// inspects an implementation; it only calls back through these three
/// operations.
pub trait TimeField {
    fn name(&self) -> &'static str;

    /// The legal range of the field's values.
    fn range(&self) -> ValueRange;

    /// Whether the field can be read from `time`.
    fn is_supported(&self, time: Time) -> bool;

    /// Extracts the field's value from `time`, failing with
    /// [`Error::UnsupportedField`](crate::Error::UnsupportedField) when
    /// [`Self::is_supported`] is false for it.
    fn get_from(&self, time: Time) -> Result<i64>;

    /// Returns a copy of `time` with this field set to `value`.
    ///
    /// When more than one decomposition could produce the same derived value,
    /// implementations must preserve every component the field does not imply
    /// and change only the minimum needed.
    fn adjust_into(&self, time: Time, value: i64) -> Result<Time>;
}

/// An addressable component of a [`Time`].
///
/// The built-in variants are the closed set of components a time of day
/// natively answers for; `Custom` carries an externally defined [`TimeField`]
/// that computes its value by calling back into the generic accessors.
#[derive(Copy, Clone)]
pub enum Field {
    NanoOfSecond,
    NanoOfDay,
    MicroOfSecond,
    MicroOfDay,
    MilliOfSecond,
    MilliOfDay,
    SecondOfMinute,
    SecondOfDay,
    MinuteOfHour,
    MinuteOfDay,
    HourOfAmPm,
    ClockHourOfAmPm,
    HourOfDay,
    ClockHourOfDay,
    AmPmOfDay,
    Custom(&'static dyn TimeField),
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "NanoOfSecond",
            Self::NanoOfDay => "NanoOfDay",
            Self::MicroOfSecond => "MicroOfSecond",
            Self::MicroOfDay => "MicroOfDay",
            Self::MilliOfSecond => "MilliOfSecond",
            Self::MilliOfDay => "MilliOfDay",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::SecondOfDay => "SecondOfDay",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::MinuteOfDay => "MinuteOfDay",
            Self::HourOfAmPm => "HourOfAmPm",
            Self::ClockHourOfAmPm => "ClockHourOfAmPm",
            Self::HourOfDay => "HourOfDay",
            Self::ClockHourOfDay => "ClockHourOfDay",
            Self::AmPmOfDay => "AmPmOfDay",
            Self::Custom(f) => f.name(),
        }
    }

    pub fn range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::new(0, 999_999_999),
            Self::NanoOfDay => ValueRange::new(0, NANOS_PER_DAY - 1),
            Self::MicroOfSecond => ValueRange::new(0, 999_999),
            Self::MicroOfDay => ValueRange::new(0, MICROS_PER_DAY - 1),
            Self::MilliOfSecond => ValueRange::new(0, 999),
            Self::MilliOfDay => ValueRange::new(0, MILLIS_PER_DAY - 1),
            Self::SecondOfMinute => ValueRange::new(0, 59),
            Self::SecondOfDay => ValueRange::new(0, SECONDS_PER_DAY - 1),
            Self::MinuteOfHour => ValueRange::new(0, 59),
            Self::MinuteOfDay => ValueRange::new(0, MINUTES_PER_DAY - 1),
            Self::HourOfAmPm => ValueRange::new(0, 11),
            Self::ClockHourOfAmPm => ValueRange::new(1, 12),
            Self::HourOfDay => ValueRange::new(0, 23),
            Self::ClockHourOfDay => ValueRange::new(1, 24),
            Self::AmPmOfDay => ValueRange::new(0, 1),
            Self::Custom(f) => f.range(),
        }
    }

    /// Validates `value` against [`Field::range`].
    pub fn check(self, value: i64) -> Result<i64> {
        self.range().check(self.name(), value)
    }

    const fn tag(self) -> u8 {
        match self {
            Self::NanoOfSecond => 0,
            Self::NanoOfDay => 1,
            Self::MicroOfSecond => 2,
            Self::MicroOfDay => 3,
            Self::MilliOfSecond => 4,
            Self::MilliOfDay => 5,
            Self::SecondOfMinute => 6,
            Self::SecondOfDay => 7,
            Self::MinuteOfHour => 8,
            Self::MinuteOfDay => 9,
            Self::HourOfAmPm => 10,
            Self::ClockHourOfAmPm => 11,
            Self::HourOfDay => 12,
            Self::ClockHourOfDay => 13,
            Self::AmPmOfDay => 14,
            Self::Custom(_) => 15,
        }
    }
}

/// Built-in fields compare by variant; custom fields by identity, since they
/// are stateless singletons.
impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Custom(a), Self::Custom(b)) => {
                core::ptr::eq(*a as *const _ as *const (), *b as *const _ as *const ())
            }
            _ => self.tag() == other.tag(),
        }
    }
}

impl Eq for Field {}

impl Debug for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy that produces an adjusted copy of a time, e.g. "the next
/// whole quarter hour". Invoked by [`Time::adjusted`].
pub trait TimeAdjuster {
    fn adjust_into(&self, time: Time) -> Result<Time>;
}

/// A `Time` used as an adjuster replaces the whole value.
impl TimeAdjuster for Time {
    fn adjust_into(&self, _time: Time) -> Result<Time> {
        Ok(*self)
    }
}

impl Time {
    /// Whether `field` can be queried on a time of day. Every built-in
    /// [`Field`] is time-shaped, so this only consults custom fields.
    pub fn is_supported(self, field: Field) -> bool {
        match field {
            Field::Custom(f) => f.is_supported(self),
            _ => true,
        }
    }

    /// The value of `field`, narrowed to an `i32`.
    ///
    /// `NanoOfDay` and `MicroOfDay` exceed `i32` at this resolution and fail
    /// with [`Error::FieldTooWide`]; read them through [`Time::get_wide`].
    pub fn get(self, field: Field) -> Result<i32> {
        match field {
            Field::NanoOfDay | Field::MicroOfDay => Err(Error::FieldTooWide(field)),
            _ => {
                let value = self.get_wide(field)?;
                i32::try_from(value).map_err(|_| Error::FieldTooWide(field))
            }
        }
    }

    /// The value of `field` as an `i64`.
    pub fn get_wide(self, field: Field) -> Result<i64> {
        Ok(match field {
            Field::NanoOfSecond => self.nano as i64,
            Field::NanoOfDay => self.to_nano_of_day(),
            Field::MicroOfSecond => (self.nano / 1_000) as i64,
            Field::MicroOfDay => self.to_nano_of_day() / 1_000,
            Field::MilliOfSecond => (self.nano / 1_000_000) as i64,
            Field::MilliOfDay => self.to_nano_of_day() / 1_000_000,
            Field::SecondOfMinute => self.second as i64,
            Field::SecondOfDay => self.to_second_of_day() as i64,
            Field::MinuteOfHour => self.minute as i64,
            Field::MinuteOfDay => self.hour as i64 * 60 + self.minute as i64,
            Field::HourOfAmPm => (self.hour % 12) as i64,
            Field::ClockHourOfAmPm => {
                let ham = self.hour % 12;
                if ham == 0 {
                    12
                } else {
                    ham as i64
                }
            }
            Field::HourOfDay => self.hour as i64,
            Field::ClockHourOfDay => {
                if self.hour == 0 {
                    24
                } else {
                    self.hour as i64
                }
            }
            Field::AmPmOfDay => (self.hour / 12) as i64,
            Field::Custom(f) => return f.get_from(self),
        })
    }

    /// The same time with `field` set to `value`, validated against the
    /// field's range first.
    ///
    /// Component fields replace their component outright; day-relative and
    /// half-day-relative fields compute the signed delta from the current
    /// derived value and route it through the wrapping `plus_*` path, so all
    /// of them share one normalization and every component the field does
    /// not imply is preserved.
    pub fn with(self, field: Field, value: i64) -> Result<Time> {
        if let Field::Custom(f) = field {
            return f.adjust_into(self, value);
        }
        let value = field.check(value)?;
        Ok(match field {
            Field::NanoOfSecond => self.with_nano(value as u32)?,
            Field::NanoOfDay => Time::from_nano_of_day(value)?,
            Field::MicroOfSecond => self.with_nano(value as u32 * 1_000)?,
            Field::MicroOfDay => self.plus_nanos((value - self.to_nano_of_day() / 1_000) * 1_000),
            Field::MilliOfSecond => self.with_nano(value as u32 * 1_000_000)?,
            Field::MilliOfDay => {
                self.plus_nanos((value - self.to_nano_of_day() / 1_000_000) * 1_000_000)
            }
            Field::SecondOfMinute => self.with_second(value as u8)?,
            Field::SecondOfDay => self.plus_seconds(value - self.to_second_of_day() as i64),
            Field::MinuteOfHour => self.with_minute(value as u8)?,
            Field::MinuteOfDay => {
                self.plus_minutes(value - (self.hour as i64 * 60 + self.minute as i64))
            }
            Field::HourOfAmPm => self.plus_hours(value - (self.hour % 12) as i64),
            Field::ClockHourOfAmPm => {
                let value = if value == 12 { 0 } else { value };
                self.plus_hours(value - (self.hour % 12) as i64)
            }
            Field::HourOfDay => self.with_hour(value as u8)?,
            Field::ClockHourOfDay => self.with_hour(if value == 24 { 0 } else { value as u8 })?,
            Field::AmPmOfDay => self.plus_hours((value - (self.hour / 12) as i64) * 12),
            Field::Custom(_) => unreachable!(),
        })
    }

    /// Hands this time to `adjuster` and returns the transformed result.
    /// Passing a `Time` replaces the value wholesale.
    pub fn adjusted(self, adjuster: &dyn TimeAdjuster) -> Result<Time> {
        adjuster.adjust_into(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Field; 15] = [
        Field::NanoOfSecond,
        Field::NanoOfDay,
        Field::MicroOfSecond,
        Field::MicroOfDay,
        Field::MilliOfSecond,
        Field::MilliOfDay,
        Field::SecondOfMinute,
        Field::SecondOfDay,
        Field::MinuteOfHour,
        Field::MinuteOfDay,
        Field::HourOfAmPm,
        Field::ClockHourOfAmPm,
        Field::HourOfDay,
        Field::ClockHourOfDay,
        Field::AmPmOfDay,
    ];

    #[test]
    fn get_matches_components() {
        let t = Time::from_hms_nano(14, 30, 45, 123_456_789).unwrap();
        assert_eq!(t.get(Field::NanoOfSecond).unwrap(), 123_456_789);
        assert_eq!(t.get(Field::MicroOfSecond).unwrap(), 123_456);
        assert_eq!(t.get(Field::MilliOfSecond).unwrap(), 123);
        assert_eq!(t.get(Field::SecondOfMinute).unwrap(), 45);
        assert_eq!(t.get(Field::SecondOfDay).unwrap(), 14 * 3600 + 30 * 60 + 45);
        assert_eq!(t.get(Field::MinuteOfHour).unwrap(), 30);
        assert_eq!(t.get(Field::MinuteOfDay).unwrap(), 14 * 60 + 30);
        assert_eq!(t.get(Field::HourOfAmPm).unwrap(), 2);
        assert_eq!(t.get(Field::ClockHourOfAmPm).unwrap(), 2);
        assert_eq!(t.get(Field::HourOfDay).unwrap(), 14);
        assert_eq!(t.get(Field::ClockHourOfDay).unwrap(), 14);
        assert_eq!(t.get(Field::AmPmOfDay).unwrap(), 1);
        assert_eq!(
            t.get(Field::MilliOfDay).unwrap() as i64,
            t.to_nano_of_day() / 1_000_000
        );

        assert_eq!(Time::from_hm(2, 30).unwrap().get(Field::MinuteOfDay).unwrap(), 150);
        assert_eq!(Time::MIDNIGHT.get(Field::ClockHourOfDay).unwrap(), 24);
        assert_eq!(Time::MIDNIGHT.get(Field::ClockHourOfAmPm).unwrap(), 12);
        assert_eq!(Time::NOON.get(Field::ClockHourOfAmPm).unwrap(), 12);
        assert_eq!(Time::NOON.get(Field::HourOfAmPm).unwrap(), 0);
    }

    #[test]
    fn wide_only_fields() {
        let t = Time::from_hms_nano(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(t.get(Field::NanoOfDay), Err(Error::FieldTooWide(Field::NanoOfDay)));
        assert_eq!(t.get(Field::MicroOfDay), Err(Error::FieldTooWide(Field::MicroOfDay)));
        assert_eq!(t.get_wide(Field::NanoOfDay).unwrap(), t.to_nano_of_day());
        assert_eq!(
            t.get_wide(Field::MicroOfDay).unwrap(),
            t.to_nano_of_day() / 1_000
        );
    }

    #[test]
    fn with_get_is_identity() {
        let times = [
            Time::MIDNIGHT,
            Time::NOON,
            Time::MAX,
            Time::from_hms_nano(14, 30, 45, 123_456_789).unwrap(),
            Time::from_hms_nano(0, 59, 0, 1).unwrap(),
        ];
        for t in times {
            for field in ALL {
                let value = t.get_wide(field).unwrap();
                assert_eq!(t.with(field, value).unwrap(), t, "{field} on {t}");
            }
        }
    }

    #[test]
    fn with_rewrites_one_field() {
        let t = Time::from_hms_nano(14, 30, 45, 123_456_789).unwrap();
        assert_eq!(
            t.with(Field::MinuteOfDay, 150).unwrap(),
            Time::from_hms_nano(2, 30, 45, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::SecondOfDay, 1).unwrap(),
            Time::from_hms_nano(0, 0, 1, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::NanoOfDay, 5).unwrap(),
            Time::from_hms_nano(0, 0, 0, 5).unwrap()
        );
        assert_eq!(
            t.with(Field::MicroOfDay, 7).unwrap(),
            Time::from_hms_nano(0, 0, 0, 7_789).unwrap()
        );
        assert_eq!(
            t.with(Field::MilliOfDay, 7).unwrap(),
            Time::from_hms_nano(0, 0, 0, 7_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::HourOfAmPm, 3).unwrap(),
            Time::from_hms_nano(15, 30, 45, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::AmPmOfDay, 0).unwrap(),
            Time::from_hms_nano(2, 30, 45, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::ClockHourOfDay, 24).unwrap(),
            Time::from_hms_nano(0, 30, 45, 123_456_789).unwrap()
        );
        assert_eq!(
            t.with(Field::ClockHourOfAmPm, 12).unwrap(),
            Time::from_hms_nano(12, 30, 45, 123_456_789).unwrap()
        );
    }

    #[test]
    fn with_validates_range() {
        let t = Time::NOON;
        for field in ALL {
            let range = field.range();
            assert!(t.with(field, range.max() + 1).is_err(), "{field}");
            assert!(t.with(field, range.min() - 1).is_err(), "{field}");
        }
    }

    #[test]
    fn adjusted_by_time_replaces() {
        let t = Time::from_hms(1, 2, 3).unwrap();
        assert_eq!(Time::NOON.adjusted(&t).unwrap(), t);
    }

    struct NanoOfMilli;
    impl TimeField for NanoOfMilli {
        fn name(&self) -> &'static str {
            "NanoOfMilli"
        }
        fn range(&self) -> ValueRange {
            ValueRange::new(0, 999_999)
        }
        fn is_supported(&self, _time: Time) -> bool {
            true
        }
        fn get_from(&self, time: Time) -> Result<i64> {
            Ok((time.nano() % 1_000_000) as i64)
        }
        fn adjust_into(&self, time: Time, value: i64) -> Result<Time> {
            let value = self.range().check(self.name(), value)?;
            time.with_nano(time.nano() / 1_000_000 * 1_000_000 + value as u32)
        }
    }

    /// Minutes since noon, only readable in the afternoon.
    struct MinuteOfAfternoon;
    static AFTERNOON: MinuteOfAfternoon = MinuteOfAfternoon;
    impl TimeField for MinuteOfAfternoon {
        fn name(&self) -> &'static str {
            "MinuteOfAfternoon"
        }
        fn range(&self) -> ValueRange {
            ValueRange::new(0, 719)
        }
        fn is_supported(&self, time: Time) -> bool {
            time.hour() >= 12
        }
        fn get_from(&self, time: Time) -> Result<i64> {
            if !self.is_supported(time) {
                return Err(Error::UnsupportedField(Field::Custom(&AFTERNOON)));
            }
            Ok((time.hour() as i64 - 12) * 60 + time.minute() as i64)
        }
        fn adjust_into(&self, time: Time, value: i64) -> Result<Time> {
            if !self.is_supported(time) {
                return Err(Error::UnsupportedField(Field::Custom(&AFTERNOON)));
            }
            let value = self.range().check(self.name(), value)?;
            time.with_hour(12 + (value / 60) as u8)?
                .with_minute((value % 60) as u8)
        }
    }

    #[test]
    fn unsupported_custom_field() {
        let field = Field::Custom(&AFTERNOON);
        let morning = Time::from_hm(9, 30).unwrap();
        let afternoon = Time::from_hms_nano(14, 30, 7, 8).unwrap();
        assert!(!morning.is_supported(field));
        assert_eq!(morning.get(field), Err(Error::UnsupportedField(field)));
        assert_eq!(morning.with(field, 0), Err(Error::UnsupportedField(field)));
        assert!(afternoon.is_supported(field));
        assert_eq!(afternoon.get(field).unwrap(), 150);
        assert_eq!(
            afternoon.with(field, 0).unwrap(),
            Time::from_hms_nano(12, 0, 7, 8).unwrap()
        );
        assert_eq!(
            afternoon.with(field, afternoon.get_wide(field).unwrap()).unwrap(),
            afternoon
        );
        assert!(afternoon.with(field, 720).is_err());
    }

    #[test]
    fn custom_field_dispatch() {
        static FIELD: NanoOfMilli = NanoOfMilli;
        let field = Field::Custom(&FIELD);
        let t = Time::from_hms_nano(1, 2, 3, 123_456_789).unwrap();
        assert!(t.is_supported(field));
        assert_eq!(t.get(field).unwrap(), 456_789);
        assert_eq!(t.get_wide(field).unwrap(), 456_789);
        assert_eq!(
            t.with(field, 7).unwrap(),
            Time::from_hms_nano(1, 2, 3, 123_000_007).unwrap()
        );
        assert!(t.with(field, 1_000_000).is_err());
        assert_eq!(field, Field::Custom(&FIELD));
        assert_ne!(field, Field::HourOfDay);
        assert_eq!(field.name(), "NanoOfMilli");
    }
}
