use super::Anchor;
use crate::core::traits::Real;

/// Struct to hold options parameters when generating stations.
#[derive(Debug, Clone)]
pub struct StationOptions<'a, T = f64, D = ()>
where
    T: Real,
{
    /// Target station spacing in meters. Non-positive values produce only the route start and
    /// segment end stations.
    pub interval: i32,
    /// Chainage assigned to the first point of the route.
    pub start_chainage: i32,
    /// Surveyed anchors in route order. Fewer than 2 anchors are ignored.
    pub anchors: Option<&'a [Anchor<T, D>]>,
    /// Without anchors, generate decreasing stations when set and `start_chainage` exceeds the
    /// route length.
    pub reverse: bool,
}

impl<'a, T, D> StationOptions<'a, T, D>
where
    T: Real,
{
    #[inline]
    pub fn new(interval: i32) -> Self {
        Self {
            interval,
            start_chainage: 0,
            anchors: None,
            reverse: false,
        }
    }

    #[inline]
    pub fn with_start_chainage(mut self, start_chainage: i32) -> Self {
        self.start_chainage = start_chainage;
        self
    }

    #[inline]
    pub fn with_anchors(mut self, anchors: &'a [Anchor<T, D>]) -> Self {
        self.anchors = Some(anchors);
        self
    }

    #[inline]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}

impl<'a, T, D> Default for StationOptions<'a, T, D>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(100)
    }
}
