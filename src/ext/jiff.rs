use crate::Time;

impl From<jiff::civil::Time> for Time {
    #[inline(always)]
    fn from(value: jiff::civil::Time) -> Self {
        Time::from_hms_nano(
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
            value.subsec_nanosecond() as u32,
        )
        .unwrap()
    }
}

impl From<Time> for jiff::civil::Time {
    #[inline(always)]
    fn from(value: Time) -> Self {
        jiff::civil::Time::new(
            value.hour() as i8,
            value.minute() as i8,
            value.second() as i8,
            value.nano() as i32,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::Time;

    #[test]
    fn test() {
        let theirs = jiff::civil::Time::new(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(Time::from(theirs), Time::MAX);
        for t in crate::random_times(100) {
            assert_eq!(Time::from(jiff::civil::Time::from(t)), t);
        }
    }
}
