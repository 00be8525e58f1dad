use super::{metric::MetricKey, trends::TrendsResponse};
use crate::utils::format::format_rounded;

/// Arrow shown next to a stat: whether the raw value went up or down.
///
/// This is purely presentational. For `Average` a lower value is a better
/// rank, so `Down` there is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` only on a strict increase.
    pub fn between(current: f64, previous: f64) -> Self {
        if current > previous {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Returns CSS class name for the delta label
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Up => "text-positive",
            Direction::Down => "text-negative",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
        }
    }
}

/// Display triple for one stat card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedStat {
    pub formatted_value: String,
    pub direction: Direction,
    pub formatted_delta: String,
}

impl DerivedStat {
    /// Shown before any trends have loaded.
    pub fn placeholder() -> Self {
        Self {
            formatted_value: "0".to_string(),
            direction: Direction::Up,
            formatted_delta: "0".to_string(),
        }
    }
}

/// Computes the display value, direction and delta for one metric.
///
/// Without a pair every metric shows the all-zero placeholder, without a
/// `%` suffix. Otherwise the delta is taken on the raw values and both value
/// and delta are rounded half away from zero. Only negative deltas carry a
/// sign.
pub fn derive_stat(pair: Option<&TrendsResponse>, metric: MetricKey) -> DerivedStat {
    let Some(pair) = pair else {
        return DerivedStat::placeholder();
    };

    let current = metric.stat_value(&pair.current);
    let previous = metric.stat_value(&pair.previous);
    let suffix = if metric.is_percentage() { "%" } else { "" };

    DerivedStat {
        formatted_value: format_rounded(current, suffix),
        direction: Direction::between(current, previous),
        formatted_delta: format_rounded(current - previous, suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trends::Trend;

    fn trend(average: f64, top_3: f64, market_share: f64) -> Trend {
        Trend {
            average,
            top_3_position: 0.0,
            top_3_percentage: top_3,
            market_share_position: 0.0,
            market_share_percentage: market_share,
            execution_date: None,
        }
    }

    #[test]
    fn test_equal_values_point_down() {
        let pair = TrendsResponse {
            current: trend(10.0, 50.0, 50.0),
            previous: trend(10.0, 50.0, 50.0),
        };

        let stat = derive_stat(Some(&pair), MetricKey::Top3);
        assert_eq!(stat.direction, Direction::Down);
        assert_eq!(stat.formatted_delta, "0%");
    }

    #[test]
    fn test_delta_rounds_raw_difference() {
        // round(10.4) - round(9.6) would be 0, the raw delta rounds to 1
        let pair = TrendsResponse {
            current: trend(10.4, 0.0, 0.0),
            previous: trend(9.6, 0.0, 0.0),
        };

        let stat = derive_stat(Some(&pair), MetricKey::Average);
        assert_eq!(stat.formatted_value, "10");
        assert_eq!(stat.formatted_delta, "1");
        assert_eq!(stat.direction, Direction::Up);
    }

    #[test]
    fn test_direction_classes() {
        assert_eq!(Direction::Up.css_class(), "text-positive");
        assert_eq!(Direction::Down.as_str(), "down");
    }
}
