use core::fmt::Display;

use crate::{div_round, narrow, Error, Ticks, TimeUnit, PICOS_PER_SEC};

// 2^63, the first value past `i64::MAX` that an `f64` can hold exactly
pub(crate) const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A time or duration stored as a count of `10^-R` second units.
///
/// The internal representation is a single `i64` base time code. Two values
/// of the same resolution are equal exactly when their codes are equal, and
/// they are ordered by the integer order of their codes. Values with
/// different resolutions are different types and must be converted through
/// seconds or [`Ticks`] to be combined.
///
/// For nanosecond resolution the representable range is about +/- 292 years,
/// for picosecond resolution about +/- 106 days.
///
/// Resolutions above [`MAX_RESOLUTION`](crate::MAX_RESOLUTION) digits fail to
/// compile as soon as any value of that resolution is created:
///
/// ```compile_fail
/// use timecode::{Time, TimeUnit};
///
/// let _ = Time::<19>::new(1, TimeUnit::Nanoseconds);
/// ```
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Time<const R: u32> {
    pub(crate) code: i64,
}

impl<const R: u32> Time<R> {
    /// Number of decimal digits of sub-second precision.
    pub const RESOLUTION: u32 = R;

    /// Number of base units in one second, `10^R`.
    pub const UNITS_PER_SEC: i64 = {
        assert!(
            R <= crate::MAX_RESOLUTION,
            "resolution must be at most 18 digits"
        );
        crate::pow10(R)
    };

    pub const ZERO: Self = Self::from_base_time_code(0);
    pub const MIN: Self = Self::from_base_time_code(i64::MIN);
    pub const MAX: Self = Self::from_base_time_code(i64::MAX);

    /// The smallest positive time, a single base unit.
    pub const EPSILON: Self = Self::from_base_time_code(1);

    /// Create a time from a raw base time code.
    pub const fn from_base_time_code(code: i64) -> Self {
        // evaluated for every resolution that is instantiated
        let _ = Self::UNITS_PER_SEC;
        Self { code }
    }

    /// Create a time from `count` whole `unit`s. The conversion is done with
    /// integer math and rounds to the nearest base unit, with ties away from
    /// zero.
    ///
    /// # Panics
    /// Panics if the result does not fit in the base time code.
    pub fn new(count: i64, unit: TimeUnit) -> Self {
        match Self::try_new(count, unit) {
            Ok(time) => time,
            Err(e) => panic!("can not create time from {count}{unit}: {e}"),
        }
    }

    /// Create a time from `count` whole `unit`s, returning an error if the
    /// result does not fit in the base time code.
    pub fn try_new(count: i64, unit: TimeUnit) -> Result<Self, Error> {
        let picos = count as i128 * unit.as_picos() as i128;
        let scale = Self::UNITS_PER_SEC as i128;
        let picos_per_sec = PICOS_PER_SEC as i128;

        let code = if scale >= picos_per_sec {
            picos
                .checked_mul(scale / picos_per_sec)
                .ok_or(Error::Overflow)?
        } else {
            div_round(picos, picos_per_sec / scale)
        };

        Ok(Self::from_base_time_code(narrow(code)?))
    }

    /// Create a time from floating point seconds, rounded to the nearest base
    /// unit with ties away from zero.
    ///
    /// # Panics
    /// Panics if `secs` is not finite or the result does not fit in the base
    /// time code.
    pub fn from_secs_f64(secs: f64) -> Self {
        match Self::try_from_secs_f64(secs) {
            Ok(time) => time,
            Err(e) => panic!("can not create time from {secs} seconds: {e}"),
        }
    }

    /// Create a time from floating point seconds, rounded to the nearest base
    /// unit with ties away from zero.
    pub fn try_from_secs_f64(secs: f64) -> Result<Self, Error> {
        if !secs.is_finite() {
            return Err(Error::NotFinite);
        }

        Self::from_scaled_f64(secs * Self::UNITS_PER_SEC as f64)
    }

    /// Rounds a value already expressed in base units into a time.
    pub(crate) fn from_scaled_f64(units: f64) -> Result<Self, Error> {
        let code = units.round();

        if code.is_nan() {
            return Err(Error::NotFinite);
        }

        if !(-I64_LIMIT..I64_LIMIT).contains(&code) {
            return Err(Error::Overflow);
        }

        Ok(Self::from_base_time_code(code as i64))
    }

    /// Returns the raw base time code.
    pub const fn base_time_code(&self) -> i64 {
        self.code
    }

    /// Replaces the raw base time code. No rounding is involved, so a code
    /// taken from [`Time::base_time_code`] reproduces the same time.
    pub fn set_base_time_code(&mut self, code: i64) {
        self.code = code;
    }

    /// Returns the time as floating point seconds.
    pub fn as_secs_f64(&self) -> f64 {
        let whole = self.code / Self::UNITS_PER_SEC;
        let frac = self.code % Self::UNITS_PER_SEC;
        whole as f64 + frac as f64 / Self::UNITS_PER_SEC as f64
    }

    /// Returns the number of whole `unit`s in this time. Partial units are
    /// truncated toward zero.
    ///
    /// # Panics
    /// Panics if the count does not fit in an `i64`, which can only happen
    /// when converting a coarse resolution to a finer unit.
    pub fn to_count(&self, unit: TimeUnit) -> i64 {
        match self.checked_to_count(unit) {
            Some(count) => count,
            None => panic!("overflow when converting time to {unit}"),
        }
    }

    /// Returns the number of whole `unit`s in this time, or `None` if the
    /// count does not fit in an `i64`.
    pub fn checked_to_count(&self, unit: TimeUnit) -> Option<i64> {
        let picos = self.code as i128 * PICOS_PER_SEC as i128;
        let per_unit = unit.as_picos() as i128 * Self::UNITS_PER_SEC as i128;
        i64::try_from(picos / per_unit).ok()
    }

    /// Create a time from an external tick count, rescaling it to this
    /// resolution. Precision finer than `10^-R` seconds is truncated.
    ///
    /// # Panics
    /// Panics if the rescaled count does not fit in the base time code.
    pub fn from_ticks(ticks: Ticks) -> Self {
        match Self::try_from_ticks(ticks) {
            Ok(time) => time,
            Err(e) => panic!("can not create time from {ticks:?}: {e}"),
        }
    }

    /// Create a time from an external tick count, returning an error if the
    /// rescaled count does not fit in the base time code.
    pub fn try_from_ticks(ticks: Ticks) -> Result<Self, Error> {
        ticks
            .rescale(R)
            .map(|t| Self::from_base_time_code(t.count()))
            .ok_or(Error::Overflow)
    }

    /// Returns this time as ticks of `10^-digits` seconds.
    ///
    /// # Panics
    /// Panics if the rescaled count does not fit in an `i64`.
    pub fn to_ticks(&self, digits: u32) -> Ticks {
        match self.checked_to_ticks(digits) {
            Some(ticks) => ticks,
            None => panic!("overflow when converting time to ticks of 10^-{digits} seconds"),
        }
    }

    /// Returns this time as ticks of `10^-digits` seconds, or `None` if the
    /// rescaled count does not fit in an `i64`.
    pub fn checked_to_ticks(&self, digits: u32) -> Option<Ticks> {
        Ticks::new(self.code, R).rescale(digits)
    }

    /// Returns this time as a count of nanoseconds.
    ///
    /// # Panics
    /// Panics if the resolution is coarser than nanoseconds and the count
    /// does not fit in an `i64`.
    pub fn to_ns(&self) -> Ticks {
        self.to_ticks(9)
    }

    pub const fn is_negative(&self) -> bool {
        self.code < 0
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    /// Panics for [`Time::MIN`], which has no positive counterpart.
    pub fn abs(self) -> Self {
        match self.code.checked_abs() {
            Some(code) => Self { code },
            None => panic!("overflow when taking the absolute value of a time"),
        }
    }
}

impl<const R: u32> Default for Time<R> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const R: u32> From<Time<R>> for f64 {
    fn from(other: Time<R>) -> Self {
        other.as_secs_f64()
    }
}

/// Writes the exact number of seconds, without trailing zeros.
impl<const R: u32> Display for Time<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.code < 0 { "-" } else { "" };
        let whole = (self.code / Self::UNITS_PER_SEC).unsigned_abs();
        let frac = (self.code % Self::UNITS_PER_SEC).unsigned_abs();

        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }

        let digits = format!("{frac:0width$}", width = R as usize);
        write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Time12, Time6, Time9};

    #[test]
    fn sizes() {
        assert_eq!(std::mem::size_of::<Time9>(), 8);
        assert_eq!(Time6::UNITS_PER_SEC, 1_000_000);
        assert_eq!(Time12::UNITS_PER_SEC, 1_000_000_000_000);
        assert_eq!(Time9::default(), Time9::ZERO);
    }

    #[test]
    fn from_secs() {
        assert_eq!(Time9::from_secs_f64(10.0).as_secs_f64(), 10.0);
        assert_eq!(Time9::from_secs_f64(0.1).base_time_code(), 100_000_000);
        assert_eq!(Time9::from_secs_f64(-1.5).base_time_code(), -1_500_000_000);
        assert_eq!(Time6::from_secs_f64(10.0).as_secs_f64(), 10.0);
        assert_eq!(Time12::from_secs_f64(10.0).as_secs_f64(), 10.0);
    }

    #[test]
    // standard rounding, not truncation
    fn rounding() {
        assert_eq!(Time9::from_secs_f64(1.25e-9), Time9::new(1, TimeUnit::Nanoseconds));
        assert_eq!(Time9::from_secs_f64(0.99e-9), Time9::new(1, TimeUnit::Nanoseconds));
        assert_eq!(Time9::from_secs_f64(1.49e-9), Time9::new(1, TimeUnit::Nanoseconds));
        assert_eq!(Time9::from_secs_f64(1.51e-9), Time9::new(2, TimeUnit::Nanoseconds));
        assert_eq!(Time9::from_secs_f64(-1.51e-9), Time9::new(-2, TimeUnit::Nanoseconds));

        assert_eq!(Time12::from_secs_f64(1.25e-12), Time12::new(1, TimeUnit::Picoseconds));
        assert_eq!(Time12::from_secs_f64(1.51e-12), Time12::new(2, TimeUnit::Picoseconds));
    }

    #[test]
    fn rounding_below_resolution() {
        // everything finer than a microsecond rounds to zero or one unit
        assert_eq!(Time6::from_secs_f64(1.51e-9), Time6::new(2, TimeUnit::Nanoseconds));
        assert_eq!(Time6::new(2, TimeUnit::Nanoseconds), Time6::ZERO);
        assert_eq!(Time6::new(500, TimeUnit::Nanoseconds), Time6::EPSILON);
        assert_eq!(Time6::new(-500, TimeUnit::Nanoseconds), -Time6::EPSILON);
        assert_eq!(Time6::new(499, TimeUnit::Nanoseconds), Time6::ZERO);
    }

    #[test]
    fn not_finite() {
        assert_eq!(Time9::try_from_secs_f64(f64::NAN), Err(Error::NotFinite));
        assert_eq!(Time9::try_from_secs_f64(f64::INFINITY), Err(Error::NotFinite));
        assert_eq!(
            Time9::try_from_secs_f64(f64::NEG_INFINITY),
            Err(Error::NotFinite)
        );
    }

    #[test]
    fn overflow() {
        // ~292 years is the limit at nanosecond resolution
        assert!(Time9::try_from_secs_f64(9.2e9).is_ok());
        assert_eq!(Time9::try_from_secs_f64(9.3e9), Err(Error::Overflow));
        assert_eq!(Time9::try_from_secs_f64(-9.3e9), Err(Error::Overflow));
        assert_eq!(Time9::try_from_secs_f64(1e300), Err(Error::Overflow));

        assert_eq!(
            Time12::try_new(1, TimeUnit::Weeks).map(|t| t.base_time_code()),
            Ok(604_800_000_000_000_000)
        );
        assert_eq!(Time12::try_new(16, TimeUnit::Weeks), Err(Error::Overflow));
        assert_eq!(Time::<18>::try_new(i64::MAX, TimeUnit::Weeks), Err(Error::Overflow));
        assert_eq!(Time9::try_new(i64::MAX, TimeUnit::Nanoseconds), Ok(Time9::MAX));
    }

    #[test]
    #[should_panic]
    fn from_secs_panics_on_overflow() {
        let _ = Time9::from_secs_f64(1e20);
    }

    #[test]
    fn counts() {
        let time = Time9::new(5, TimeUnit::Seconds);
        assert_eq!(time.to_count(TimeUnit::Seconds), 5);
        assert_eq!(time.to_count(TimeUnit::Milliseconds), 5_000);
        assert_eq!(time.to_count(TimeUnit::Microseconds), 5_000_000);
        assert_eq!(time.to_count(TimeUnit::Nanoseconds), 5_000_000_000);
        assert_eq!(time.to_count(TimeUnit::Picoseconds), 5_000_000_000_000);
        assert_eq!(time.to_count(TimeUnit::Minutes), 0);

        // truncated toward zero, not rounded
        assert_eq!(Time9::from_secs_f64(-90.0).to_count(TimeUnit::Minutes), -1);
        assert_eq!(Time9::from_secs_f64(1.9999).to_count(TimeUnit::Seconds), 1);

        assert_eq!(Time6::MAX.checked_to_count(TimeUnit::Picoseconds), None);
        assert_eq!(Time6::MAX.checked_to_count(TimeUnit::Microseconds), Some(i64::MAX));
    }

    #[test]
    fn base_time_code() {
        let mut time = Time9::default();
        time.set_base_time_code(49_759_632_000);
        assert_eq!(time, Time9::from_secs_f64(49.759632));
        assert_eq!(time.base_time_code(), 49_759_632_000);
        assert_eq!(Time9::from_base_time_code(-7).base_time_code(), -7);
    }

    #[test]
    fn as_secs() {
        assert_eq!(f64::from(Time9::from_base_time_code(1_500_000_000)), 1.5);
        assert_eq!(Time9::from_base_time_code(-1_500_000_000).as_secs_f64(), -1.5);
        assert_eq!(Time6::from_base_time_code(1).as_secs_f64(), 1e-6);
    }

    #[test]
    fn abs() {
        assert_eq!(Time9::from_secs_f64(-2.5).abs(), Time9::from_secs_f64(2.5));
        assert_eq!(Time9::from_secs_f64(2.5).abs(), Time9::from_secs_f64(2.5));
        assert!(Time9::from_secs_f64(-2.5).is_negative());
        assert!(!Time9::ZERO.is_negative());
    }

    #[test]
    fn display() {
        assert_eq!(Time9::from_secs_f64(10.0).to_string(), "10");
        assert_eq!(Time9::from_secs_f64(49.759632).to_string(), "49.759632");
        assert_eq!(Time9::from_secs_f64(-3562.28963).to_string(), "-3562.28963");
        assert_eq!(Time9::from_secs_f64(-0.5).to_string(), "-0.5");
        assert_eq!(Time12::EPSILON.to_string(), "0.000000000001");
        assert_eq!(Time::<0>::from_base_time_code(42).to_string(), "42");
    }
}
