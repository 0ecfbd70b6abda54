use crate::time::Time;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serializes as the `(hour, minute, second, nano)` quadruple.
impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.hour, self.minute, self.second, self.nano).serialize(serializer)
    }
}

/// Deserializes the quadruple back through the validating factory, so a
/// hostile payload cannot produce an out-of-range time.
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (hour, minute, second, nano) = Deserialize::deserialize(deserializer)?;
        Time::from_hms_nano(hour, minute, second, nano).map_err(D::Error::custom)
    }
}
