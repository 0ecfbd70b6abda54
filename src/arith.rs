use crate::error::{Error, Result};
use crate::time::{
    Time, HOURS_PER_DAY, MICROS_PER_DAY, MILLIS_PER_DAY, MINUTES_PER_DAY, MINUTES_PER_HOUR,
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MINUTE, NANOS_PER_SECOND, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::unit::Unit;

/// An external capability that adds some amount of time, invoked by
/// [`Time::plus_amount`]. Typically backed by a period/duration type that
/// calls back into [`Time::plus`].
pub trait TimeAdder {
    fn add_to(&self, time: Time) -> Result<Time>;
}

/// The subtractive counterpart of [`TimeAdder`], invoked by
/// [`Time::minus_amount`].
pub trait TimeSubtractor {
    fn subtract_from(&self, time: Time) -> Result<Time>;
}

impl Time {
    /// This time with `amount` of `unit` added, wrapping around midnight.
    ///
    /// Sub-day units wrap silently; there is no date to carry into. Whole
    /// days are a no-op, since adding days never changes a time of day.
    pub fn plus(self, amount: i64, unit: Unit) -> Result<Time> {
        Ok(match unit {
            Unit::Nanos => self.plus_nanos(amount),
            Unit::Micros => self.plus_nanos((amount % MICROS_PER_DAY) * 1_000),
            Unit::Millis => self.plus_nanos((amount % MILLIS_PER_DAY) * 1_000_000),
            Unit::Seconds => self.plus_seconds(amount),
            Unit::Minutes => self.plus_minutes(amount),
            Unit::Hours => self.plus_hours(amount),
            Unit::HalfDays => self.plus_hours((amount % 2) * 12),
            Unit::Days => self,
            Unit::Custom(u) => return u.add_to(self, amount),
        })
    }

    /// This time with `amount` of `unit` subtracted, wrapping around
    /// midnight.
    pub fn minus(self, amount: i64, unit: Unit) -> Result<Time> {
        if amount == i64::MIN {
            // -i64::MIN overflows, so subtract it as two positive additions.
            self.plus(i64::MAX, unit)?.plus(1, unit)
        } else {
            self.plus(-amount, unit)
        }
    }

    /// This time with `hours` added, wrapping around midnight.
    pub fn plus_hours(self, hours: i64) -> Time {
        if hours == 0 {
            return self;
        }
        let new_hour =
            ((hours % HOURS_PER_DAY) as i32 + self.hour as i32 + HOURS_PER_DAY as i32)
                % HOURS_PER_DAY as i32;
        Time::create(new_hour as u8, self.minute, self.second, self.nano)
    }

    /// This time with `minutes` added, wrapping around midnight.
    pub fn plus_minutes(self, minutes: i64) -> Time {
        if minutes == 0 {
            return self;
        }
        let mofd = self.hour as i32 * MINUTES_PER_HOUR as i32 + self.minute as i32;
        let new_mofd = ((minutes % MINUTES_PER_DAY) as i32 + mofd + MINUTES_PER_DAY as i32)
            % MINUTES_PER_DAY as i32;
        if mofd == new_mofd {
            return self;
        }
        let new_hour = new_mofd / MINUTES_PER_HOUR as i32;
        let new_minute = new_mofd % MINUTES_PER_HOUR as i32;
        Time::create(new_hour as u8, new_minute as u8, self.second, self.nano)
    }

    /// This time with `seconds` added, wrapping around midnight.
    pub fn plus_seconds(self, seconds: i64) -> Time {
        if seconds == 0 {
            return self;
        }
        let sofd = self.to_second_of_day();
        let new_sofd =
            ((seconds % SECONDS_PER_DAY) as i32 + sofd + SECONDS_PER_DAY as i32)
                % SECONDS_PER_DAY as i32;
        if sofd == new_sofd {
            return self;
        }
        let new_hour = new_sofd / SECONDS_PER_HOUR as i32;
        let new_minute = (new_sofd / SECONDS_PER_MINUTE as i32) % MINUTES_PER_HOUR as i32;
        let new_second = new_sofd % SECONDS_PER_MINUTE as i32;
        Time::create(new_hour as u8, new_minute as u8, new_second as u8, self.nano)
    }

    /// This time with `nanos` added, wrapping around midnight.
    pub fn plus_nanos(self, nanos: i64) -> Time {
        if nanos == 0 {
            return self;
        }
        let nofd = self.to_nano_of_day();
        // Normalize after adding: a plain `%` of the negative intermediate
        // would yield a negative remainder.
        let new_nofd = ((nanos % NANOS_PER_DAY) + nofd + NANOS_PER_DAY) % NANOS_PER_DAY;
        if nofd == new_nofd {
            return self;
        }
        Time::create(
            (new_nofd / NANOS_PER_HOUR) as u8,
            ((new_nofd / NANOS_PER_MINUTE) % MINUTES_PER_HOUR) as u8,
            ((new_nofd / NANOS_PER_SECOND) % SECONDS_PER_MINUTE) as u8,
            (new_nofd % NANOS_PER_SECOND) as u32,
        )
    }

    /// This time with `hours` subtracted, wrapping around midnight.
    pub fn minus_hours(self, hours: i64) -> Time {
        self.plus_hours(-(hours % HOURS_PER_DAY))
    }

    /// This time with `minutes` subtracted, wrapping around midnight.
    pub fn minus_minutes(self, minutes: i64) -> Time {
        self.plus_minutes(-(minutes % MINUTES_PER_DAY))
    }

    /// This time with `seconds` subtracted, wrapping around midnight.
    pub fn minus_seconds(self, seconds: i64) -> Time {
        self.plus_seconds(-(seconds % SECONDS_PER_DAY))
    }

    /// This time with `nanos` subtracted, wrapping around midnight.
    pub fn minus_nanos(self, nanos: i64) -> Time {
        self.plus_nanos(-(nanos % NANOS_PER_DAY))
    }

    /// This time with every component finer than `unit` zeroed.
    ///
    /// `Days` truncates to midnight. Units with an estimated duration, or an
    /// exact duration of a day or more other than `Days` itself, are a usage
    /// error rather than a silent approximation.
    pub fn truncated_to(self, unit: Unit) -> Result<Time> {
        match unit {
            Unit::Nanos => return Ok(self),
            Unit::Days => return Ok(Time::MIDNIGHT),
            _ => {}
        }
        let dur = unit
            .duration_nanos()
            .ok_or(Error::UnsupportedUnit(unit))?;
        if dur <= 0 || dur >= NANOS_PER_DAY {
            return Err(Error::UnsupportedUnit(unit));
        }
        let nod = self.to_nano_of_day();
        Time::from_nano_of_day(nod / dur * dur)
    }

    /// The number of whole `unit`s from this time to `end`, negative if
    /// `end` is earlier.
    ///
    /// Computed from the exact difference in nanos-of-day, so a result of
    /// zero means the two times are less than one unit apart.
    pub fn until(self, end: Time, unit: Unit) -> Result<i64> {
        // Both operands are within one day, so this cannot overflow.
        let nanos_until = end.to_nano_of_day() - self.to_nano_of_day();
        Ok(match unit {
            Unit::Nanos => nanos_until,
            Unit::Micros => nanos_until / 1_000,
            Unit::Millis => nanos_until / 1_000_000,
            Unit::Seconds => nanos_until / NANOS_PER_SECOND,
            Unit::Minutes => nanos_until / NANOS_PER_MINUTE,
            Unit::Hours => nanos_until / NANOS_PER_HOUR,
            Unit::HalfDays => nanos_until / (12 * NANOS_PER_HOUR),
            Unit::Days => return Err(Error::UnsupportedUnit(unit)),
            Unit::Custom(u) => return u.between(self, end),
        })
    }

    /// Hands this time to `adder`, which typically calls back into
    /// [`Time::plus`].
    pub fn plus_amount(self, adder: &dyn TimeAdder) -> Result<Time> {
        adder.add_to(self)
    }

    /// Hands this time to `subtractor`, which typically calls back into
    /// [`Time::minus`].
    pub fn minus_amount(self, subtractor: &dyn TimeSubtractor) -> Result<Time> {
        subtractor.subtract_from(self)
    }
}
