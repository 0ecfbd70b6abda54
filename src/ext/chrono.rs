use crate::{Error, Time};
use chrono::Timelike;

impl TryFrom<chrono::NaiveTime> for Time {
    type Error = Error;

    /// Fails on chrono's leap-second representation, which stores a
    /// nanosecond field of 1,000,000,000 or more.
    fn try_from(value: chrono::NaiveTime) -> Result<Self, Error> {
        Time::from_hms_nano(
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
            value.nanosecond(),
        )
    }
}

impl From<Time> for chrono::NaiveTime {
    #[inline(always)]
    fn from(value: Time) -> Self {
        chrono::NaiveTime::from_hms_nano_opt(
            value.hour() as u32,
            value.minute() as u32,
            value.second() as u32,
            value.nano(),
        )
        .unwrap()
    }
}
