use super::dates::deserialize_optional_datetime;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One point-in-time ranking measurement for a location.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trend {
    /// Mean ranking position (lower is a better rank)
    pub average: f64,
    pub top_3_position: f64,
    /// Share of keywords ranking in the top 3 (0-100)
    pub top_3_percentage: f64,
    pub market_share_position: f64,
    /// Market share (0-100)
    pub market_share_percentage: f64,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub execution_date: Option<DateTime<Utc>>,
}

/// Current and previous measurement, always delivered together.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendsResponse {
    pub current: Trend,
    pub previous: Trend,
}
