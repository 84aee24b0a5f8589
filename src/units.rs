//! Absolute lengths, font-relative lengths, and fractional weights.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Types with a zero value and a finiteness check, shared by `Abs`/`Em`/`Fr`.
pub trait Numeric: Sized {
    fn zero() -> Self;
    fn is_finite(self) -> bool;
}

impl Numeric for usize {
    fn zero() -> Self {
        0
    }

    fn is_finite(self) -> bool {
        true
    }
}

impl Numeric for f64 {
    fn zero() -> Self {
        0.0
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// A 64-bit float that implements `Eq`, `Ord` and `Hash`.
///
/// Panics if it's `NaN` during any of those operations.
#[derive(Default, Copy, Clone)]
pub struct Scalar(f64);

impl Scalar {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);
    pub const INFINITY: Self = Self(f64::INFINITY);

    /// Creates a [`Scalar`] with the given value. NaN becomes `0.0`.
    pub const fn new(x: f64) -> Self {
        Self(if x.is_nan() { 0.0 } else { x })
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Eq for Scalar {}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        assert!(!self.0.is_nan() && !other.0.is_nan(), "float is NaN");
        self.0 == other.0
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).expect("float is NaN")
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for Scalar {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.0)
    }
}

impl Add for Scalar {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.0 - rhs.0)
    }
}

impl Mul<f64> for Scalar {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.0 * rhs)
    }
}

impl Div<f64> for Scalar {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.0 / rhs)
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self::new(iter.map(|s| s.0).sum())
    }
}

impl std::hash::Hash for Scalar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        debug_assert!(!self.0.is_nan(), "float is NaN");
        self.0.to_bits().hash(state);
    }
}

/// The epsilon for approximate length comparisons (points).
const ABS_EPS: f64 = 1e-4;

/// An absolute length, in typographic points (1/72 inch).
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Abs(Scalar);

impl Abs {
    pub const fn zero() -> Self {
        Self(Scalar::ZERO)
    }

    pub const fn inf() -> Self {
        Self(Scalar::INFINITY)
    }

    pub const fn raw(raw: f64) -> Self {
        Self(Scalar::new(raw))
    }

    pub fn pt(pt: f64) -> Self {
        Self::raw(pt)
    }

    pub const fn to_raw(self) -> f64 {
        self.0.get()
    }

    pub fn to_pt(self) -> f64 {
        self.to_raw()
    }

    pub fn abs(self) -> Self {
        Self::raw(self.to_raw().abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    pub fn set_min(&mut self, other: Self) {
        *self = (*self).min(other);
    }

    pub fn set_max(&mut self, other: Self) {
        *self = (*self).max(other);
    }

    /// Whether `other` fits into `self` (i.e. is smaller), within a small
    /// epsilon of slack.
    pub fn fits(self, other: Self) -> bool {
        self.to_raw() + ABS_EPS >= other.to_raw()
    }

    /// Whether two lengths are approximately equal.
    pub fn approx_eq(self, other: Self) -> bool {
        self == other || (self - other).to_raw().abs() < ABS_EPS
    }

    /// Whether this length is close to zero or negative.
    pub fn approx_empty(self) -> bool {
        self.to_raw() <= ABS_EPS
    }

    pub fn signum(self) -> f64 {
        self.to_raw().signum()
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Numeric for Abs {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_finite(self) -> bool {
        Abs::is_finite(self)
    }
}

impl Debug for Abs {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}pt", self.to_pt())
    }
}

impl Neg for Abs {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Abs {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Abs {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl AddAssign for Abs {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Abs {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Abs {
    type Output = Self;
    fn mul(self, other: f64) -> Self {
        Self(self.0 * other)
    }
}

impl Mul<Abs> for f64 {
    type Output = Abs;
    fn mul(self, other: Abs) -> Abs {
        other * self
    }
}

impl MulAssign<f64> for Abs {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Abs {
    type Output = Self;
    fn div(self, other: f64) -> Self {
        Self(self.0 / other)
    }
}

impl DivAssign<f64> for Abs {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl Div for Abs {
    type Output = f64;
    fn div(self, other: Self) -> f64 {
        self.to_raw() / other.to_raw()
    }
}

impl Sum for Abs {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|s| s.0).sum())
    }
}

impl<'a> Sum<&'a Self> for Abs {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self(iter.map(|s| s.0).sum())
    }
}

/// A length relative to the font size. `1em` is the same as the font size.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Em(Scalar);

impl Em {
    pub const fn zero() -> Self {
        Self(Scalar::ZERO)
    }

    pub const fn one() -> Self {
        Self(Scalar::ONE)
    }

    pub const fn new(em: f64) -> Self {
        Self(Scalar::new(em))
    }

    /// Creates an em length from font-design units at the given units per em.
    pub fn from_units(units: f64, units_per_em: f64) -> Self {
        Self(Scalar::new(units / units_per_em))
    }

    /// Creates an em length from an absolute length at a given font size.
    pub fn from_abs(length: Abs, font_size: Abs) -> Self {
        let result = length / font_size;
        if result.is_finite() {
            Self(Scalar::new(result))
        } else {
            Self::zero()
        }
    }

    pub const fn get(self) -> f64 {
        (self.0).get()
    }

    pub fn abs(self) -> Self {
        Self::new(self.get().abs())
    }

    pub fn is_zero(self) -> bool {
        self.get() == 0.0
    }

    /// Converts to an absolute length at the given font size.
    pub fn at(self, font_size: Abs) -> Abs {
        let resolved = font_size * self.get();
        if resolved.is_finite() {
            resolved
        } else {
            Abs::zero()
        }
    }
}

impl Numeric for Em {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Debug for Em {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}em", self.get())
    }
}

impl Neg for Em {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Add for Em {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Em {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl AddAssign for Em {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Em {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Em {
    type Output = Self;
    fn mul(self, other: f64) -> Self {
        Self(self.0 * other)
    }
}

impl Mul<Em> for f64 {
    type Output = Em;
    fn mul(self, other: Em) -> Em {
        other * self
    }
}

impl Div<f64> for Em {
    type Output = Self;
    fn div(self, other: f64) -> Self {
        Self(self.0 / other)
    }
}

impl Div for Em {
    type Output = f64;
    fn div(self, other: Self) -> f64 {
        self.get() / other.get()
    }
}

impl Sum for Em {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|s| s.0).sum())
    }
}

/// A fraction for distributing leftover space among fractionally-sized items.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fr(Scalar);

impl Fr {
    pub const fn zero() -> Self {
        Self(Scalar::ZERO)
    }

    pub const fn one() -> Self {
        Self(Scalar::ONE)
    }

    pub const fn new(ratio: f64) -> Self {
        Self(Scalar::new(ratio))
    }

    pub const fn get(self) -> f64 {
        (self.0).get()
    }

    /// Determine this fraction's share of `remaining` space, given the total
    /// of all fractions competing for it.
    pub fn share(self, total: Self, remaining: Abs) -> Abs {
        let ratio = self / total;
        if ratio.is_finite() && remaining.is_finite() {
            (ratio * remaining).max(Abs::zero())
        } else {
            Abs::zero()
        }
    }
}

impl Numeric for Fr {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Debug for Fr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:?}fr", self.get())
    }
}

impl Add for Fr {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Div for Fr {
    type Output = f64;
    fn div(self, other: Self) -> f64 {
        self.get() / other.get()
    }
}

impl Sum for Fr {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_fits_allows_epsilon_slack() {
        let a = Abs::pt(10.0);
        let b = Abs::pt(10.00005);
        assert!(a.fits(b));
    }

    #[test]
    fn abs_approx_eq() {
        assert!(Abs::pt(1.0).approx_eq(Abs::pt(1.00005)));
        assert!(!Abs::pt(1.0).approx_eq(Abs::pt(1.01)));
    }

    #[test]
    fn em_at_scales_by_font_size() {
        assert_eq!(Em::new(0.5).at(Abs::pt(20.0)), Abs::pt(10.0));
    }

    #[test]
    fn fr_share_splits_by_ratio() {
        let total = Fr::new(1.0) + Fr::new(2.0);
        assert_eq!(Fr::new(1.0).share(total, Abs::pt(30.0)), Abs::pt(10.0));
        assert_eq!(Fr::new(2.0).share(total, Abs::pt(30.0)), Abs::pt(20.0));
    }

    #[test]
    fn em_from_abs_handles_zero_font_size() {
        assert_eq!(Em::from_abs(Abs::pt(5.0), Abs::zero()), Em::zero());
    }
}
</content>
