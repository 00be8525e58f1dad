use super::{metric::MetricKey, trends_history::{TrendHistory, TrendsHistoryResponse}};

/// Chart point; `original` is kept for tooltips and drill-down.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub timestamp_millis: i64,
    pub value: f64,
    pub original: TrendHistory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// `[timestamp, value]` pairs in the shape the chart renderer expects
    pub fn chart_data(&self) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .map(|p| vec![p.timestamp_millis as f64, p.value])
            .collect()
    }
}

/// Projects the history onto one named series for the selected metric.
///
/// Returns no series at all when there is no history or it is empty. Points
/// keep delivery order and carry the raw, unrounded value.
pub fn derive_series(history: Option<&TrendsHistoryResponse>, metric: MetricKey) -> Vec<Series> {
    let Some(history) = history.filter(|h| !h.is_empty()) else {
        return vec![];
    };

    let points = history
        .history
        .iter()
        .map(|record| SeriesPoint {
            timestamp_millis: record.execution_date.timestamp_millis(),
            value: metric.series_value(record),
            original: record.clone(),
        })
        .collect();

    vec![Series {
        name: metric.series_label().to_string(),
        points,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(day: u32, top_3_position: f64) -> TrendHistory {
        TrendHistory {
            execution_date: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            average: 10.0,
            top_3_position,
            top_3_percentage: 70.0,
            market_share_position: 2.0,
            market_share_percentage: 40.0,
            keywords: vec![],
        }
    }

    #[test]
    fn test_delivery_order_is_not_resorted() {
        let history = TrendsHistoryResponse {
            history: vec![record(3, 1.0), record(1, 2.0), record(2, 3.0)],
        };

        let series = derive_series(Some(&history), MetricKey::Top3);
        let values: Vec<f64> = series[0].points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_chart_data_pairs() {
        let history = TrendsHistoryResponse {
            history: vec![record(1, 4.5)],
        };

        let series = derive_series(Some(&history), MetricKey::Top3);
        let data = series[0].chart_data();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0][1], 4.5);
        assert_eq!(data[0][0], 1_704_067_200_000.0);
    }
}
