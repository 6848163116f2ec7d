/// Macro used for test assertions on values implementing `fuzzy_eq`/`fuzzy_eq_eps`.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the polyline macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a [Polyline](crate::polyline::Polyline) from a list of `(lng, lat)` tuples.
///
/// # Examples
///
/// ```
/// # use road_chainage::polyline;
/// # use road_chainage::geodesy::LngLat;
/// let route = polyline![(116.4074, 39.9042), (116.4374, 39.9342)];
/// assert_eq!(route.vertex_count(), 2);
/// assert_eq!(route[0], LngLat::new(116.4074, 39.9042));
/// assert_eq!(route[1], LngLat::new(116.4374, 39.9342));
/// ```
#[macro_export]
macro_rules! polyline {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pl = $crate::polyline::Polyline::with_capacity(size);
            $(
                pl.add($x.0, $x.1);
            )*
            pl
        }
    };
}
