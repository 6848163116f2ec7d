use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number (e.g. 1.1, -3.5, etc.) that can be fuzzy compared and ordered.
///
/// All geodesic and chainage functions are generic over this trait, `f64` is the default type
/// parameter everywhere.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// Construct a value from a `f64` constant (lossy for `f32`).
    #[inline]
    fn constant(value: f64) -> Self {
        Self::from(value).unwrap()
    }

    #[inline]
    fn pi() -> Self {
        Self::constant(std::f64::consts::PI)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    #[inline]
    fn full_turn_degrees() -> Self {
        Self::constant(360.0)
    }

    /// Returns true if the value is neither infinite nor NaN.
    #[inline]
    fn is_finite_value(self) -> bool {
        self.to_f64().is_some_and(f64::is_finite)
    }

    #[inline]
    fn is_nan_value(self) -> bool {
        self.to_f64().is_some_and(f64::is_nan)
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn constant(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn full_turn_degrees() -> Self {
        360.0f32
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }

    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}

impl Real for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn full_turn_degrees() -> Self {
        360.0f64
    }

    #[inline]
    fn is_finite_value(self) -> bool {
        self.is_finite()
    }

    #[inline]
    fn is_nan_value(self) -> bool {
        self.is_nan()
    }
}
