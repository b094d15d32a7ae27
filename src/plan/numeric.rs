//! Numeric helpers shared by the plan calculations

/// Gym plate increment in lbs
pub const WEIGHT_STEP: f64 = 5.0;

/// Coerce raw numeric input to a finite value (NaN and infinities become 0)
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Round to the nearest multiple of 5 lbs
pub fn round_to_five(weight: f64) -> f64 {
    (finite_or_zero(weight) / WEIGHT_STEP).round() * WEIGHT_STEP
}

/// Parse a weight typed by the user, keeping only the digits.
///
/// "225 lbs" -> 225, "" -> 0, "abc" -> 0. Values that overflow `u32` are 0.
pub fn parse_weight_input(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Convert a finite, non-negative float to a whole number of lbs
pub fn to_whole_lbs(value: f64) -> u32 {
    let value = finite_or_zero(value).round();
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(12.5), 12.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_round_to_five() {
        assert_eq!(round_to_five(188.7), 190.0);
        assert_eq!(round_to_five(187.4), 185.0);
        assert_eq!(round_to_five(65.0), 65.0);
        assert_eq!(round_to_five(f64::NAN), 0.0);
    }

    #[test]
    fn test_parse_weight_input_strips_non_digits() {
        assert_eq!(parse_weight_input("225"), 225);
        assert_eq!(parse_weight_input("225 lbs"), 225);
        assert_eq!(parse_weight_input("1,000"), 1000);
        assert_eq!(parse_weight_input(""), 0);
        assert_eq!(parse_weight_input("abc"), 0);
    }

    #[test]
    fn test_parse_weight_input_overflow() {
        assert_eq!(parse_weight_input("99999999999999"), 0);
    }

    #[test]
    fn test_to_whole_lbs() {
        assert_eq!(to_whole_lbs(202.5), 203);
        assert_eq!(to_whole_lbs(-10.0), 0);
        assert_eq!(to_whole_lbs(f64::NAN), 0);
        assert_eq!(to_whole_lbs(1e20), u32::MAX);
    }
}
