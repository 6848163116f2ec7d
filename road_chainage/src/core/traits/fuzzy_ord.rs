use super::FuzzyEq;

/// Ordering comparisons with slack, used to decide whether a degree space projection (e.g. a
/// perpendicular foot) falls within a segment's extent.
///
/// A foot computed from a line equation lands a few ulps off an axis aligned segment, so exact
/// `<=`/`>=` would reject it.
pub trait FuzzyOrd: FuzzyEq {
    /// `self >= other` allowing `fuzzy_epsilon` of undershoot.
    fn fuzzy_ge_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// `self <= other` allowing `fuzzy_epsilon` of overshoot.
    fn fuzzy_le_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Test if `self` lies within `[min, max]` widened by `fuzzy_epsilon` on both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use road_chainage::core::traits::*;
    /// // longitude extent of a short road segment
    /// assert!(116.40739f64.fuzzy_in_range_eps(116.4074, 116.4174, 1e-4));
    /// assert!(!116.40739f64.fuzzy_in_range_eps(116.4074, 116.4174, 1e-8));
    /// assert!(!116.42f64.fuzzy_in_range_eps(116.4074, 116.4174, 1e-8));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_ge_eps(min, fuzzy_epsilon) && self.fuzzy_le_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }

    /// Same as [FuzzyOrd::fuzzy_in_range] but `a` and `b` may be given in either order, as the
    /// two coordinates of a segment's end points usually are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use road_chainage::core::traits::*;
    /// // latitude of a foot on an east-west segment, a rounding step below the segment
    /// let foot_lat = 39.0f64 - 1e-11;
    /// assert!(foot_lat.fuzzy_between(39.0, 39.0));
    /// assert!(39.5f64.fuzzy_between(40.0, 39.0));
    /// assert!(!38.9f64.fuzzy_between(40.0, 39.0));
    /// ```
    #[inline]
    fn fuzzy_between(&self, a: Self, b: Self) -> bool {
        self.fuzzy_in_range(a, b) || self.fuzzy_in_range(b, a)
    }
}

macro_rules! impl_fuzzy_ord {
    ($ty:ty) => {
        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_ge_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self >= other - fuzzy_epsilon
            }

            #[inline]
            fn fuzzy_le_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self <= other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_ord!(f32);
impl_fuzzy_ord!(f64);
