//! Comparisons between times and floating point seconds.
//!
//! The `f64` side is always rounded into a `Time` first, using the same rule
//! as [`Time::from_secs_f64`], and the integer codes are compared. This is
//! what makes `Time9::new(10, TimeUnit::Milliseconds) == 0.01` hold even
//! though `0.01` has no exact binary representation.

use core::cmp::Ordering;

use crate::Time;

impl<const R: u32> Time<R> {
    /// Compare against floating point seconds. NaN is unordered. Values
    /// beyond the representable range order past [`Time::MAX`] or
    /// [`Time::MIN`].
    fn cmp_secs(&self, secs: f64) -> Option<Ordering> {
        if secs.is_nan() {
            return None;
        }

        match Self::try_from_secs_f64(secs) {
            Ok(other) => Some(self.code.cmp(&other.code)),
            Err(_) if secs > 0.0 => Some(Ordering::Less),
            Err(_) => Some(Ordering::Greater),
        }
    }
}

impl<const R: u32> PartialEq<f64> for Time<R> {
    fn eq(&self, other: &f64) -> bool {
        self.cmp_secs(*other) == Some(Ordering::Equal)
    }
}

impl<const R: u32> PartialOrd<f64> for Time<R> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.cmp_secs(*other)
    }
}

impl<const R: u32> PartialEq<Time<R>> for f64 {
    fn eq(&self, other: &Time<R>) -> bool {
        other == self
    }
}

impl<const R: u32> PartialOrd<Time<R>> for f64 {
    fn partial_cmp(&self, other: &Time<R>) -> Option<Ordering> {
        other.cmp_secs(*self).map(Ordering::reverse)
    }
}
