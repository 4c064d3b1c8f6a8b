//! Interop with duration-since-epoch values held by other libraries.

use core::time::Duration;

use crate::{narrow, pow10, Error, Time, MAX_RESOLUTION};

/// A signed count of `10^-digits` second ticks.
///
/// This is how durations from other time libraries cross into and out of
/// [`Time`]: a nanosecond count is `Ticks::from_nanos(n)`, a millisecond
/// count `Ticks::from_millis(n)`. Equality is structural, so the same span
/// at two granularities compares unequal until rescaled.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ticks {
    count: i64,
    digits: u32,
}

impl Ticks {
    pub const fn new(count: i64, digits: u32) -> Self {
        Self { count, digits }
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self::new(secs, 0)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self::new(millis, 3)
    }

    pub const fn from_micros(micros: i64) -> Self {
        Self::new(micros, 6)
    }

    pub const fn from_nanos(nanos: i64) -> Self {
        Self::new(nanos, 9)
    }

    pub const fn from_picos(picos: i64) -> Self {
        Self::new(picos, 12)
    }

    pub const fn count(&self) -> i64 {
        self.count
    }

    /// Decimal digits of sub-second precision of one tick.
    pub const fn digits(&self) -> u32 {
        self.digits
    }

    /// Convert to ticks of `10^-digits` seconds.
    ///
    /// Moving to a coarser granularity truncates the excess precision toward
    /// zero. Moving to a finer granularity is exact and returns `None` if the
    /// count no longer fits in an `i64`.
    pub fn rescale(self, digits: u32) -> Option<Ticks> {
        let count = if digits >= self.digits {
            let diff = digits - self.digits;
            if self.count == 0 {
                0
            } else if diff > MAX_RESOLUTION {
                return None;
            } else {
                self.count.checked_mul(pow10(diff))?
            }
        } else {
            let diff = self.digits - digits;
            // no i64 reaches 10^19
            if diff > MAX_RESOLUTION {
                0
            } else {
                self.count / pow10(diff)
            }
        };

        Some(Ticks { count, digits })
    }
}

impl<const R: u32> TryFrom<Ticks> for Time<R> {
    type Error = Error;

    fn try_from(other: Ticks) -> Result<Self, Self::Error> {
        Self::try_from_ticks(other)
    }
}

impl<const R: u32> From<Time<R>> for Ticks {
    fn from(other: Time<R>) -> Self {
        Ticks::new(other.base_time_code(), R)
    }
}

/// The ticks are counted in nanoseconds, so spans beyond about 292 years do
/// not fit. Convert straight into a coarse [`Time`] for longer spans.
impl TryFrom<Duration> for Ticks {
    type Error = Error;

    fn try_from(other: Duration) -> Result<Self, Self::Error> {
        i64::try_from(other.as_nanos())
            .map(Ticks::from_nanos)
            .map_err(|_| Error::Overflow)
    }
}

/// Ticks finer than a nanosecond are truncated.
impl TryFrom<Ticks> for Duration {
    type Error = Error;

    fn try_from(other: Ticks) -> Result<Self, Self::Error> {
        if other.count < 0 {
            return Err(Error::Negative);
        }

        let count = other.count as i128;
        let (secs, nanos) = match 10_i128.checked_pow(other.digits) {
            Some(scale) => {
                let frac = count % scale;
                let nanos = if other.digits <= 9 {
                    frac * 10_i128.pow(9 - other.digits)
                } else {
                    frac / 10_i128.pow(other.digits - 9)
                };
                (count / scale, nanos)
            }
            // a tick this small is below a nanosecond for any i64 count
            None => (0, 0),
        };

        Ok(Duration::new(secs as u64, nanos as u32))
    }
}

/// Sub-second precision finer than `10^-R` seconds is truncated.
impl<const R: u32> TryFrom<Duration> for Time<R> {
    type Error = Error;

    fn try_from(other: Duration) -> Result<Self, Self::Error> {
        let secs = other.as_secs() as i128 * Self::UNITS_PER_SEC as i128;
        let nanos = other.subsec_nanos() as i128;
        let shift = pow10(R.abs_diff(9)) as i128;

        let frac = if R >= 9 { nanos * shift } else { nanos / shift };

        Ok(Self::from_base_time_code(narrow(secs + frac)?))
    }
}

impl<const R: u32> TryFrom<Time<R>> for Duration {
    type Error = Error;

    fn try_from(other: Time<R>) -> Result<Self, Self::Error> {
        Duration::try_from(Ticks::from(other))
    }
}
