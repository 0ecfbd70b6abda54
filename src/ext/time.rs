use crate::Time;

impl From<time::Time> for Time {
    #[inline(always)]
    fn from(value: time::Time) -> Self {
        let (hour, minute, second, nano) = value.as_hms_nano();
        Time::from_hms_nano(hour, minute, second, nano).unwrap()
    }
}

impl From<Time> for time::Time {
    #[inline(always)]
    fn from(value: Time) -> Self {
        time::Time::from_hms_nano(value.hour(), value.minute(), value.second(), value.nano())
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::Time;

    #[test]
    fn test() {
        let theirs = time::Time::from_hms_nano(23, 59, 59, 999_999_999).unwrap();
        let ours = Time::from(theirs);
        assert_eq!(ours, Time::MAX);
        assert_eq!(time::Time::from(ours), theirs);
        for t in crate::random_times(100) {
            assert_eq!(Time::from(time::Time::from(t)), t);
        }
    }
}
