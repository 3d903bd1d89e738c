//!
//! Adaptive precision number formatting.
//!

///
/// Formats a measurement with a precision depending on its magnitude.
///
/// Large values lose their fractional part, values below one keep up to four significant decimals.
///
pub fn format(value: f64) -> String {
    let magnitude = value.abs();
    let is_whole = value.fract() == 0.0;

    if magnitude >= 1_000.0 {
        format!("{:.0}", value.trunc())
    } else if magnitude >= 100.0 {
        if is_whole {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    } else if magnitude >= 10.0 {
        if is_whole {
            format!("{value:.0}")
        } else {
            format!("{value:.2}")
        }
    } else if magnitude >= 1.0 {
        format!("{value:.2}")
    } else {
        let formatted = format!("{value:.4}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_owned()
    }
}
