use crate::error::{Error, Result};
use crate::field::Field;
use crate::time::Time;
use alloc::vec::Vec;

/// An already-open sequential byte sink. The codec only ever issues
/// byte-level and 4-byte-integer writes; failures from the underlying
/// stream pass through unchanged.
pub trait Sink {
    fn write_u8(&mut self, byte: u8) -> Result<()>;

    /// Writes a big-endian 4-byte integer.
    fn write_i32(&mut self, v: i32) -> Result<()> {
        for byte in v.to_be_bytes() {
            self.write_u8(byte)?;
        }
        Ok(())
    }
}

/// An already-open sequential byte source, the read-side counterpart of
/// [`Sink`].
pub trait Source {
    fn read_u8(&mut self) -> Result<u8>;

    /// Reads a big-endian 4-byte integer.
    fn read_i32(&mut self) -> Result<i32> {
        let mut bytes = [0; 4];
        for byte in &mut bytes {
            *byte = self.read_u8()?;
        }
        Ok(i32::from_be_bytes(bytes))
    }
}

impl Sink for Vec<u8> {
    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.push(byte);
        Ok(())
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.extend_from_slice(&v.to_be_bytes());
        Ok(())
    }
}

/// Reads from the front of the slice, advancing it past consumed bytes.
impl Source for &[u8] {
    fn read_u8(&mut self) -> Result<u8> {
        let (&byte, rest) = self.split_first().ok_or(Error::Eof)?;
        *self = rest;
        Ok(byte)
    }

    fn read_i32(&mut self) -> Result<i32> {
        if self.len() < 4 {
            return Err(Error::Eof);
        }
        let (bytes, rest) = self.split_at(4);
        let mut buf = [0; 4];
        buf.copy_from_slice(bytes);
        *self = rest;
        Ok(i32::from_be_bytes(buf))
    }
}

/// Adapts a [`std::io::Write`] into a [`Sink`].
#[cfg(feature = "std")]
pub struct IoWriter<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoWriter<W> {
    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.0.write_all(&[byte]).map_err(Error::Io)
    }

    fn write_i32(&mut self, v: i32) -> Result<()> {
        self.0.write_all(&v.to_be_bytes()).map_err(Error::Io)
    }
}

/// Adapts a [`std::io::Read`] into a [`Source`].
#[cfg(feature = "std")]
pub struct IoReader<R>(pub R);

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for IoReader<R> {
    fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0];
        self.0.read_exact(&mut buf).map_err(Error::Io)?;
        Ok(buf[0])
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0; 4];
        self.0.read_exact(&mut buf).map_err(Error::Io)?;
        Ok(i32::from_be_bytes(buf))
    }
}

impl Time {
    /// Writes the compact encoding: 1, 2, 3 or 7 bytes, eliding trailing
    /// zero components.
    ///
    /// The last populated field is stored bitwise-complemented. Legal field
    /// values are small enough that a complement always has the sign bit
    /// set, so the sign of each lead byte marks "this was the last field"
    /// without a length prefix.
    pub fn write_to(self, out: &mut impl Sink) -> Result<()> {
        if self.nano == 0 {
            if self.second == 0 {
                if self.minute == 0 {
                    out.write_u8(!self.hour)
                } else {
                    out.write_u8(self.hour)?;
                    out.write_u8(!self.minute)
                }
            } else {
                out.write_u8(self.hour)?;
                out.write_u8(self.minute)?;
                out.write_u8(!self.second)
            }
        } else {
            out.write_u8(self.hour)?;
            out.write_u8(self.minute)?;
            out.write_u8(self.second)?;
            out.write_i32(self.nano as i32)
        }
    }

    /// Reads a time written by [`Time::write_to`].
    ///
    /// Each component is range-checked once as it is read; the value is
    /// then built directly, without a second validation pass.
    pub fn read_from(input: &mut impl Source) -> Result<Time> {
        let hour;
        let mut minute = 0;
        let mut second = 0;
        let mut nano = 0;
        let b = input.read_u8()?;
        if (b as i8) < 0 {
            hour = !b;
        } else {
            hour = b;
            let b = input.read_u8()?;
            if (b as i8) < 0 {
                minute = !b;
            } else {
                minute = b;
                let b = input.read_u8()?;
                if (b as i8) < 0 {
                    second = !b;
                } else {
                    second = b;
                    nano = input.read_i32()? as i64;
                }
            }
        }
        Field::HourOfDay.check(hour as i64)?;
        Field::MinuteOfHour.check(minute as i64)?;
        Field::SecondOfMinute.check(second as i64)?;
        Field::NanoOfSecond.check(nano)?;
        Ok(Time::create(hour, minute, second, nano as u32))
    }

    /// [`Time::write_to`] into a fresh buffer.
    pub fn encode(self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(7);
        self.write_to(&mut bytes).unwrap();
        bytes
    }

    /// [`Time::read_from`] over `bytes`, requiring every byte to be
    /// consumed.
    pub fn decode(mut bytes: &[u8]) -> Result<Time> {
        let time = Time::read_from(&mut bytes)?;
        if !bytes.is_empty() {
            return Err(Error::ExpectedEof);
        }
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn encoded_lengths() {
        assert_eq!(Time::MIDNIGHT.encode(), [!0]);
        assert_eq!(Time::from_hm(10, 0).unwrap().encode(), [!10]);
        assert_eq!(Time::from_hm(10, 15).unwrap().encode(), [10, !15]);
        assert_eq!(Time::from_hms(10, 15, 20).unwrap().encode(), [10, 15, !20]);
        assert_eq!(
            Time::from_hms_nano(10, 15, 20, 1).unwrap().encode(),
            [10, 15, 20, 0, 0, 0, 1]
        );
        assert_eq!(
            Time::from_hms_nano(10, 0, 0, 1).unwrap().encode(),
            [10, 0, 0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn round_trips() {
        let corner_cases = [
            Time::MIDNIGHT,
            Time::NOON,
            Time::MAX,
            Time::from_hm(23, 0).unwrap(),
            Time::from_hms_nano(0, 0, 0, 1).unwrap(),
            Time::from_hms_nano(10, 15, 20, 999_999_999).unwrap(),
        ];
        for t in corner_cases.into_iter().chain(crate::random_times(1000)) {
            assert_eq!(Time::decode(&t.encode()), Ok(t), "{t}");
        }
    }

    #[test]
    fn rejects_out_of_range_bytes() {
        // Plain (uncomplemented) component values past their field ranges.
        assert!(Time::decode(&[24, !0]).is_err());
        assert!(Time::decode(&[0x7f, !0]).is_err());
        assert!(Time::decode(&[10, 60, !0]).is_err());
        assert!(Time::decode(&[10, 15, 60, 0, 0, 0, 1]).is_err());
        // Complemented values past their ranges.
        assert!(Time::decode(&[!24]).is_err());
        assert!(Time::decode(&[10, !60]).is_err());
        assert!(Time::decode(&[10, 15, !60]).is_err());
        // A nano word that is negative or too large.
        assert!(Time::decode(&[10, 15, 20, 0xff, 0xff, 0xff, 0xff]).is_err());
        let too_many = 1_000_000_000i32.to_be_bytes();
        assert!(
            Time::decode(&[10, 15, 20, too_many[0], too_many[1], too_many[2], too_many[3]])
                .is_err()
        );
    }

    #[test]
    fn rejects_short_and_long_input() {
        assert_eq!(Time::decode(&[]), Err(Error::Eof));
        assert_eq!(Time::decode(&[10]), Err(Error::Eof));
        assert_eq!(Time::decode(&[10, 15]), Err(Error::Eof));
        assert_eq!(Time::decode(&[10, 15, 20, 0]), Err(Error::Eof));
        assert_eq!(Time::decode(&[!10, 0]), Err(Error::ExpectedEof));
    }

    #[test]
    fn accepts_non_canonical_zeroes() {
        // A writer never produces these, but the staged decode still
        // understands a zero encoded in a longer form.
        assert_eq!(Time::decode(&[10, !0]), Ok(Time::from_hm(10, 0).unwrap()));
        assert_eq!(
            Time::decode(&[10, 15, 20, 0, 0, 0, 0]),
            Ok(Time::from_hms(10, 15, 20).unwrap())
        );
    }

    #[test]
    fn streams_decode_sequentially() {
        let mut bytes = vec![];
        let times = [
            Time::from_hm(1, 2).unwrap(),
            Time::MAX,
            Time::MIDNIGHT,
            Time::from_hms_nano(3, 4, 5, 6).unwrap(),
        ];
        for t in times {
            t.write_to(&mut bytes).unwrap();
        }
        let mut input = bytes.as_slice();
        for t in times {
            assert_eq!(Time::read_from(&mut input).unwrap(), t);
        }
        assert!(input.is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn io_adapters() {
        let t = Time::from_hms_nano(7, 8, 9, 10).unwrap();
        let mut writer = IoWriter(vec![]);
        t.write_to(&mut writer).unwrap();
        assert_eq!(writer.0, t.encode());
        let mut reader = IoReader(writer.0.as_slice());
        assert_eq!(Time::read_from(&mut reader).unwrap(), t);
        assert_eq!(
            Time::read_from(&mut IoReader(std::io::empty())),
            Err(Error::Io(std::io::ErrorKind::UnexpectedEof.into()))
        );
    }
}
