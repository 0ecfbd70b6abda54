#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod arith;
mod codec;
mod error;
mod field;
mod time;
mod unit;

pub use crate::arith::{TimeAdder, TimeSubtractor};
#[cfg(feature = "std")]
pub use crate::codec::{IoReader, IoWriter};
pub use crate::codec::{Sink, Source};
pub use crate::error::{Error, Result};
pub use crate::field::{Field, TimeAdjuster, TimeField, ValueRange};
pub use crate::time::Time;
pub use crate::unit::{TimeUnit, Unit};

#[cfg(any(feature = "chrono", feature = "jiff", feature = "time"))]
mod ext;
#[cfg(feature = "serde")]
mod serde;


/// Deterministically seeded arbitrary times for round-trip tests.
#[cfg(test)]
fn random_times(n: usize) -> alloc::vec::Vec<Time> {
    use rand::prelude::*;
    let mut rng = rand_chacha::ChaCha20Rng::from_seed(Default::default());
    (0..n)
        .map(|_| {
            Time::from_hms_nano(
                rng.gen_range(0..24),
                rng.gen_range(0..60),
                rng.gen_range(0..60),
                rng.gen_range(0..1_000_000_000),
            )
            .unwrap()
        })
        .collect()
}
