//! This crate provides time and duration values with a fixed-size integer
//! representation at a resolution chosen at compile time. A `Time<R>` counts
//! units of `10^-R` seconds in a single `i64`, so `Time9` has nanosecond
//! granularity, `Time6` microsecond granularity and `Time12` picosecond
//! granularity.
//!
//! Floating point seconds are rounded to the nearest unit on the way in, and
//! all math between two times of the same resolution is exact integer math.
//! This avoids the drift that accumulates when repeatedly adding and
//! subtracting `f64` seconds.
//!
//! ```
//! use timecode::{Time9, TimeUnit};
//!
//! let a = Time9::new(10, TimeUnit::Milliseconds);
//! assert!(a == 0.01);
//!
//! let b = Time9::from_secs_f64(4.3) + Time9::from_secs_f64(2.7);
//! assert_eq!(b, Time9::from_secs_f64(7.0));
//! assert_eq!(b.to_count(TimeUnit::Milliseconds), 7000);
//! ```
//!
//! Overflow of the integer code is never silent: operators panic, the
//! `checked_*` methods return `None` and the `try_*` constructors return
//! [`Error::Overflow`].

mod cmp;
mod error;
mod ops;
mod ticks;
mod time;
mod units;

pub mod parse;

pub use error::Error;
pub use parse::Parser;
pub use ticks::Ticks;
pub use time::Time;
pub use units::TimeUnit;

/// A time with microsecond resolution.
pub type Time6 = Time<6>;
/// A time with nanosecond resolution.
pub type Time9 = Time<9>;
/// A time with picosecond resolution.
pub type Time12 = Time<12>;

/// The finest resolution for which `10^R` still fits in an `i64`.
pub const MAX_RESOLUTION: u32 = 18;

pub(crate) const PICOS_PER_SEC: i64 = 1_000_000_000_000;

/// Returns `10^exp`. Callers guarantee `exp <= MAX_RESOLUTION`.
pub(crate) const fn pow10(exp: u32) -> i64 {
    let mut value = 1_i64;
    let mut i = 0;
    while i < exp {
        value *= 10;
        i += 1;
    }
    value
}

/// Divides, rounding half away from zero. `d` must be positive.
pub(crate) fn div_round(n: i128, d: i128) -> i128 {
    let q = n / d;
    let r = n % d;
    if 2 * r.abs() >= d {
        q + n.signum()
    } else {
        q
    }
}

/// Narrows an `i128` intermediate back to an `i64` code.
pub(crate) fn narrow(value: i128) -> Result<i64, Error> {
    i64::try_from(value).map_err(|_| Error::Overflow)
}
