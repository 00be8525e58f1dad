use super::{error::AppError, trends::Trend, trends_history::TrendHistory};

/// Metric a stat card or the trend chart is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MetricKey {
    /// Mean ranking position
    #[default]
    Average,
    /// Top 3 placements
    Top3,
    /// Market share
    MarketShare,
}

impl MetricKey {
    /// Identifier used in radio inputs and query strings.
    pub fn id(&self) -> &'static str {
        match self {
            MetricKey::Average => "average",
            MetricKey::Top3 => "top_3",
            MetricKey::MarketShare => "market_share",
        }
    }

    /// Label of the stat card.
    pub fn stat_label(&self) -> &'static str {
        match self {
            MetricKey::Average => "Average Ranking",
            MetricKey::Top3 => "Top 3%",
            MetricKey::MarketShare => "Market Share%",
        }
    }

    /// Name of the chart series.
    pub fn series_label(&self) -> &'static str {
        match self {
            MetricKey::Average => "Average Position",
            MetricKey::Top3 => "Top 3 Position",
            MetricKey::MarketShare => "Market Share Position",
        }
    }

    /// Label shown next to the graph selector radio button.
    pub fn option_label(&self) -> &'static str {
        match self {
            MetricKey::Average => "Average Position",
            MetricKey::Top3 => "Top 3%",
            MetricKey::MarketShare => "Market Share",
        }
    }

    /// Percentage metrics render with a trailing `%`.
    pub fn is_percentage(&self) -> bool {
        !matches!(self, MetricKey::Average)
    }

    /// Value compared between the current and previous snapshot.
    pub fn stat_value(&self, trend: &Trend) -> f64 {
        match self {
            MetricKey::Average => trend.average,
            MetricKey::Top3 => trend.top_3_percentage,
            MetricKey::MarketShare => trend.market_share_percentage,
        }
    }

    /// Value plotted for a history record.
    pub fn series_value(&self, record: &TrendHistory) -> f64 {
        match self {
            MetricKey::Average => record.average,
            MetricKey::Top3 => record.top_3_position,
            MetricKey::MarketShare => record.market_share_position,
        }
    }

    /// All metrics in display order.
    pub fn all() -> &'static [MetricKey] {
        &[MetricKey::Average, MetricKey::Top3, MetricKey::MarketShare]
    }
}

impl std::fmt::Display for MetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for MetricKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "average" => Ok(MetricKey::Average),
            "top_3" | "top3" => Ok(MetricKey::Top3),
            "market_share" | "marketshare" => Ok(MetricKey::MarketShare),
            _ => Err(AppError::ConfigError(format!("Invalid metric: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("average".parse::<MetricKey>().unwrap(), MetricKey::Average);
        assert_eq!("top_3".parse::<MetricKey>().unwrap(), MetricKey::Top3);
        assert_eq!("marketShare".parse::<MetricKey>().unwrap(), MetricKey::MarketShare);
        assert!("median".parse::<MetricKey>().is_err());
    }

    #[test]
    fn test_id_round_trips_through_from_str() {
        for metric in MetricKey::all() {
            assert_eq!(metric.id().parse::<MetricKey>().unwrap(), *metric);
        }
    }

    #[test]
    fn test_only_average_is_not_a_percentage() {
        assert!(!MetricKey::Average.is_percentage());
        assert!(MetricKey::Top3.is_percentage());
        assert!(MetricKey::MarketShare.is_percentage());
    }
}
