pub mod activity;
pub mod athlete;
pub mod exercise;
pub mod workout;

pub use activity::{ActivityKind, AthleteKind};
pub use athlete::Athlete;
pub use exercise::Exercise;
pub use workout::Workout;

/// Format a quantity the way the journal prints it: shortest round-trip form that
/// always keeps a decimal point (`5.0`, `5.25`).
///
/// Very large and very small values use a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub(crate) fn format_quantity(value: f64) -> String {
    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_quantity_keeps_decimal_point() {
        assert_eq!(format_quantity(5.0), "5.0");
        assert_eq!(format_quantity(0.0), "0.0");
        assert_eq!(format_quantity(5.25), "5.25");
        assert_eq!(format_quantity(60.0), "60.0");
    }

    #[test]
    fn test_format_quantity_exponent_is_signed_and_padded() {
        assert_eq!(format_quantity(1e16), "1e+16");
        assert_eq!(format_quantity(2.5e20), "2.5e+20");
        assert_eq!(format_quantity(1e100), "1e+100");
        assert_eq!(format_quantity(1.5e-5), "1.5e-05");
        assert_eq!(format_quantity(123456789.0), "123456789.0");
    }
}
