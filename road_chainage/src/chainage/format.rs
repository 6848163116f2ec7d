use crate::{
    ChainageError, Result,
    core::{math::round_half_even, traits::Real},
};

/// Format a chainage in meters as `K<km><join><m>` text, e.g. `1234` becomes `"K1+234"`.
///
/// The meter remainder is always zero padded to 3 digits. Negative chainages keep their sign on
/// the kilometer part (`-500` becomes `"K-0+500"`).
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::station_to_str;
/// assert_eq!(station_to_str(1234, "+"), "K1+234");
/// assert_eq!(station_to_str(1010, "+"), "K1+010");
/// assert_eq!(station_to_str(2000, "+"), "K2+000");
/// assert_eq!(station_to_str(56, "-"), "K0-056");
/// assert_eq!(station_to_str(-1500, "+"), "K-1+500");
/// assert_eq!(station_to_str(-500, "+"), "K-0+500");
/// ```
pub fn station_to_str(meters: i32, join: &str) -> String {
    format_meters(i64::from(meters), join)
}

/// Same as [station_to_str] for fractional meters, rounded to whole meters with ties going to the
/// even neighbor. Non-finite values format as `K0+000`.
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::station_to_str_real;
/// assert_eq!(station_to_str_real(1234.4, "+"), "K1+234");
/// assert_eq!(station_to_str_real(1234.5, "+"), "K1+234");
/// assert_eq!(station_to_str_real(1235.5, "+"), "K1+236");
/// ```
pub fn station_to_str_real<T>(meters: T, join: &str) -> String
where
    T: Real,
{
    let whole = round_half_even(meters).to_i64().unwrap_or(0);
    format_meters(whole, join)
}

fn format_meters(meters: i64, join: &str) -> String {
    let km = meters / 1000;
    let rem = (meters % 1000).unsigned_abs();
    let sign = if meters < 0 && km == 0 { "-" } else { "" };
    format!("K{sign}{km}{join}{rem:03}")
}

/// Parse chainage text into meters, returning `default` if the text is malformed.
///
/// See [parse_station] for the accepted formats.
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::station_to_num;
/// assert_eq!(station_to_num("K1+234", -1), 1234);
/// assert_eq!(station_to_num("k1.234", -1), 1234);
/// assert_eq!(station_to_num("1234", -1), 1234);
/// assert_eq!(station_to_num("K--", -1), -1);
/// assert_eq!(station_to_num("", 7), 7);
/// ```
pub fn station_to_num(text: &str, default: i32) -> i32 {
    parse_station(text).unwrap_or(default)
}

/// Parse chainage text into meters.
///
/// Any number of leading `K`/`k` characters are ignored. The kilometer/meter separator may be `+`,
/// `-` or `.`, checked in that priority order and using the last occurrence. Text without a
/// separator is parsed as plain meters. A negative kilometer part (including `-0`) negates the
/// meter part as well so negative chainages round trip through [station_to_str].
///
/// # Errors
///
/// [ChainageError::MalformedStation] if either part is not an integer or the result overflows
/// `i32`.
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::{parse_station, station_to_str};
/// # use road_chainage::ChainageError;
/// assert_eq!(parse_station("K12+345"), Ok(12345));
/// assert_eq!(parse_station("K1-200"), Ok(1200));
/// assert_eq!(parse_station(&station_to_str(-500, "+")), Ok(-500));
/// assert_eq!(
///     parse_station("K1+2x"),
///     Err(ChainageError::MalformedStation("K1+2x".to_string()))
/// );
/// ```
pub fn parse_station(text: &str) -> Result<i32> {
    let malformed = || ChainageError::MalformedStation(text.to_string());
    let cleaned = text.trim().trim_start_matches(['K', 'k']);

    let separator = cleaned
        .rfind('+')
        .or_else(|| cleaned.rfind('-'))
        .or_else(|| cleaned.rfind('.'));

    let Some(index) = separator else {
        return cleaned.trim().parse::<i32>().map_err(|_| malformed());
    };

    let km_text = cleaned[..index].trim();
    let km: i32 = km_text.parse().map_err(|_| malformed())?;
    let m: i32 = cleaned[index + 1..].trim().parse().map_err(|_| malformed())?;

    let km_meters = km.checked_mul(1000).ok_or_else(malformed)?;
    let total = if km_text.starts_with('-') {
        km_meters.checked_sub(m)
    } else {
        km_meters.checked_add(m)
    };

    total.ok_or_else(malformed)
}
