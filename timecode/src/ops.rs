use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::time::I64_LIMIT;
use crate::{div_round, Time};

// whole factors take the exact integer path
fn as_whole(rhs: f64) -> Option<i64> {
    (rhs.fract() == 0.0 && rhs.abs() < I64_LIMIT).then_some(rhs as i64)
}

impl<const R: u32> Time<R> {
    /// Checked addition. Returns `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.code.checked_add(rhs.code) {
            Some(code) => Some(Self { code }),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on overflow.
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.code.checked_sub(rhs.code) {
            Some(code) => Some(Self { code }),
            None => None,
        }
    }

    /// Checked multiplication by an integer. Returns `None` on overflow.
    pub const fn checked_mul(self, rhs: i64) -> Option<Self> {
        match self.code.checked_mul(rhs) {
            Some(code) => Some(Self { code }),
            None => None,
        }
    }

    /// Checked division by an integer, rounded to the nearest base unit with
    /// ties away from zero. Returns `None` if `rhs` is zero or on overflow.
    pub fn checked_div(self, rhs: i64) -> Option<Self> {
        if rhs == 0 {
            return None;
        }

        // keep the divisor positive for `div_round`
        let (n, d) = if rhs < 0 {
            (-(self.code as i128), -(rhs as i128))
        } else {
            (self.code as i128, rhs as i128)
        };

        crate::narrow(div_round(n, d)).ok().map(|code| Self { code })
    }

    /// Checked multiplication by a floating point factor. Returns `None` if
    /// `rhs` is NaN or the result is not representable.
    ///
    /// A whole factor multiplies the base time code exactly. Any other factor
    /// is applied in `f64`, which only holds 53 bits, so codes larger than
    /// `2^53` lose precision before the product is rounded like
    /// [`Time::from_secs_f64`].
    pub fn checked_mul_f64(self, rhs: f64) -> Option<Self> {
        match as_whole(rhs) {
            Some(rhs) => self.checked_mul(rhs),
            None => Self::from_scaled_f64(self.code as f64 * rhs).ok(),
        }
    }

    /// Checked division by a floating point divisor. Returns `None` if `rhs`
    /// is zero or NaN, or the result is not representable.
    ///
    /// A whole divisor behaves like [`Time::checked_div`]. Any other divisor
    /// is applied in `f64` with the same precision loss as
    /// [`Time::checked_mul_f64`].
    pub fn checked_div_f64(self, rhs: f64) -> Option<Self> {
        match as_whole(rhs) {
            Some(rhs) => self.checked_div(rhs),
            None => Self::from_scaled_f64(self.code as f64 / rhs).ok(),
        }
    }

    /// Checked negation. Returns `None` for [`Time::MIN`].
    pub const fn checked_neg(self) -> Option<Self> {
        match self.code.checked_neg() {
            Some(code) => Some(Self { code }),
            None => None,
        }
    }

    /// Saturating addition. Clamps to [`Time::MIN`] or [`Time::MAX`].
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self {
            code: self.code.saturating_add(rhs.code),
        }
    }

    /// Saturating subtraction. Clamps to [`Time::MIN`] or [`Time::MAX`].
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self {
            code: self.code.saturating_sub(rhs.code),
        }
    }
}

impl<const R: u32> Add<Time<R>> for Time<R> {
    type Output = Time<R>;

    fn add(self, rhs: Time<R>) -> Self::Output {
        self.checked_add(rhs).expect("overflow when adding times")
    }
}

impl<const R: u32> AddAssign<Time<R>> for Time<R> {
    fn add_assign(&mut self, rhs: Time<R>) {
        *self = *self + rhs;
    }
}

impl<const R: u32> Sub<Time<R>> for Time<R> {
    type Output = Time<R>;

    fn sub(self, rhs: Time<R>) -> Self::Output {
        self.checked_sub(rhs).expect("overflow when subtracting times")
    }
}

impl<const R: u32> SubAssign<Time<R>> for Time<R> {
    fn sub_assign(&mut self, rhs: Time<R>) {
        *self = *self - rhs;
    }
}

/// Seconds are rounded into a `Time` before the exact addition.
///
/// # Panics
/// Panics if `rhs` is not finite or the sum overflows.
impl<const R: u32> Add<f64> for Time<R> {
    type Output = Time<R>;

    fn add(self, rhs: f64) -> Self::Output {
        self + Time::from_secs_f64(rhs)
    }
}

impl<const R: u32> AddAssign<f64> for Time<R> {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

/// Seconds are rounded into a `Time` before the exact subtraction.
///
/// # Panics
/// Panics if `rhs` is not finite or the difference overflows.
impl<const R: u32> Sub<f64> for Time<R> {
    type Output = Time<R>;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Time::from_secs_f64(rhs)
    }
}

impl<const R: u32> SubAssign<f64> for Time<R> {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl<const R: u32> Mul<i64> for Time<R> {
    type Output = Time<R>;

    fn mul(self, rhs: i64) -> Self::Output {
        self.checked_mul(rhs).expect("overflow when multiplying time")
    }
}

impl<const R: u32> MulAssign<i64> for Time<R> {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}

impl<const R: u32> Mul<Time<R>> for i64 {
    type Output = Time<R>;

    fn mul(self, rhs: Time<R>) -> Self::Output {
        rhs * self
    }
}

/// # Panics
/// Panics if `rhs` is NaN or the product overflows.
impl<const R: u32> Mul<f64> for Time<R> {
    type Output = Time<R>;

    fn mul(self, rhs: f64) -> Self::Output {
        if rhs.is_nan() {
            panic!("attempt to multiply time by NaN");
        }
        self.checked_mul_f64(rhs).expect("overflow when multiplying time")
    }
}

impl<const R: u32> MulAssign<f64> for Time<R> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<const R: u32> Mul<Time<R>> for f64 {
    type Output = Time<R>;

    fn mul(self, rhs: Time<R>) -> Self::Output {
        rhs * self
    }
}

impl<const R: u32> Div<i64> for Time<R> {
    type Output = Time<R>;

    fn div(self, rhs: i64) -> Self::Output {
        if rhs == 0 {
            panic!("attempt to divide time by zero");
        }
        self.checked_div(rhs).expect("overflow when dividing time")
    }
}

impl<const R: u32> DivAssign<i64> for Time<R> {
    fn div_assign(&mut self, rhs: i64) {
        *self = *self / rhs;
    }
}

/// # Panics
/// Panics if `rhs` is NaN or zero, or the quotient overflows.
impl<const R: u32> Div<f64> for Time<R> {
    type Output = Time<R>;

    fn div(self, rhs: f64) -> Self::Output {
        if rhs.is_nan() {
            panic!("attempt to divide time by NaN");
        }
        if rhs == 0.0 {
            panic!("attempt to divide time by zero");
        }
        self.checked_div_f64(rhs).expect("overflow when dividing time")
    }
}

impl<const R: u32> DivAssign<f64> for Time<R> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl<const R: u32> Neg for Time<R> {
    type Output = Time<R>;

    fn neg(self) -> Self::Output {
        self.checked_neg().expect("overflow when negating time")
    }
}

impl<const R: u32> Sum for Time<R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Time::ZERO, |acc, t| acc + t)
    }
}

impl<'a, const R: u32> Sum<&'a Time<R>> for Time<R> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Time::ZERO, |acc, t| acc + *t)
    }
}
