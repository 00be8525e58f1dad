/// Rounds half away from zero to a whole number.
#[allow(clippy::cast_possible_truncation)]
pub fn round_whole(value: f64) -> i64 {
    // `as` saturates and maps NaN to 0, so -0.0 also comes out as 0
    value.round() as i64
}

/// Whole-number rendering with an optional unit suffix, e.g. `76%` or `-5`.
pub fn format_rounded(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", round_whole(value))
}

/// Y-axis tick label: whole numbers, no decimals.
pub fn format_axis_label(value: f64) -> String {
    format_rounded(value, "")
}

/// Review rating with one decimal place, `-` when unrated.
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| "-".to_string(), |r| format!("{r:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_whole(2.5), 3);
        assert_eq!(round_whole(-2.5), -3);
        assert_eq!(round_whole(10.2), 10);
        assert_eq!(round_whole(-0.4), 0);
    }

    #[test]
    fn test_axis_label() {
        assert_eq!(format_axis_label(15.7), "16");
        assert_eq!(format_axis_label(10.2), "10");
        assert_eq!(format_axis_label(5.0), "5");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_rounded(-0.2, "%"), "0%");
    }

    #[test]
    fn test_rating() {
        assert_eq!(format_rating(Some(4.5)), "4.5");
        assert_eq!(format_rating(Some(4.0)), "4.0");
        assert_eq!(format_rating(None), "-");
    }
}
