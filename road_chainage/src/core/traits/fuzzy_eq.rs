/// Trait for fuzzy equality comparisons with floating point numbers.
///
/// Coordinates produced by the bearing/destination formulas are rarely bit-for-bit equal to the
/// coordinates they were derived from, so comparisons of derived values go through this trait.
/// The default epsilon of `1e-8` degrees is roughly one millimeter on the ground.
///
/// # Examples
///
/// ```
/// # use road_chainage::core::traits::*;
/// let offset = 0.1 + 0.2;
///
/// // Direct comparison fails due to floating point precision
/// assert_ne!(offset, 0.3);
///
/// // Fuzzy comparison succeeds
/// assert!(offset.fuzzy_eq(0.3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Returns the default epsilon value for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if this value is approximately equal to `other` using `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if this value is approximately zero using `fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }

    /// Returns `true` if `self` and `other` differ by less than `ratio` of the larger magnitude.
    ///
    /// Used for meter quantities where an absolute epsilon is meaningless (a route may be a few
    /// meters or a few hundred kilometers long).
    fn fuzzy_eq_rel(&self, other: Self, ratio: Self) -> bool;
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }
            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
            #[inline]
            fn fuzzy_eq_rel(&self, other: Self, ratio: Self) -> bool {
                let scale = self.abs().max(other.abs());
                (*self - other).abs() <= scale * ratio
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);
