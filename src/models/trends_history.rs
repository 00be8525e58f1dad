use super::dates::deserialize_datetime;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A dated measurement plus the keywords it was computed over.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendHistory {
    #[serde(deserialize_with = "deserialize_datetime")]
    pub execution_date: DateTime<Utc>,
    pub average: f64,
    pub top_3_position: f64,
    pub top_3_percentage: f64,
    pub market_share_position: f64,
    pub market_share_percentage: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// History records in the order the API delivered them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendsHistoryResponse {
    pub history: Vec<TrendHistory>,
}

impl TrendsHistoryResponse {
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recent record by execution date, regardless of delivery order
    pub fn latest(&self) -> Option<&TrendHistory> {
        self.history.iter().max_by_key(|record| record.execution_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HISTORY_JSON: &str = r#"{
        "history": [
            {
                "execution_date": "2025-04-09T13:48:01.000000Z",
                "average": 11,
                "top_3_position": 29.67,
                "top_3_percentage": 65.02,
                "market_share_position": 15,
                "market_share_percentage": 73.67,
                "keywords": ["library", "bookkeeping", "book keepers"]
            },
            {
                "execution_date": "2025-04-07T13:48:01.000000Z",
                "average": 5.333333333333333,
                "top_3_position": 30.67,
                "top_3_percentage": 8.81,
                "market_share_position": 10,
                "market_share_percentage": 68.67,
                "keywords": ["library"]
            }
        ]
    }"#;

    #[test]
    fn test_history_keeps_delivery_order() {
        let response: TrendsHistoryResponse = serde_json::from_str(HISTORY_JSON).unwrap();
        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[0].average, 11.0);
        assert_eq!(response.history[1].keywords, vec!["library".to_string()]);
    }

    #[test]
    fn test_latest_uses_execution_date() {
        let response: TrendsHistoryResponse = serde_json::from_str(HISTORY_JSON).unwrap();
        let latest = response.latest().unwrap();
        assert_eq!(latest.keywords.len(), 3);
    }

    #[test]
    fn test_record_requires_execution_date() {
        let json = r#"{
            "history": [{
                "average": 11,
                "top_3_position": 29.67,
                "top_3_percentage": 65.02,
                "market_share_position": 15,
                "market_share_percentage": 73.67,
                "keywords": []
            }]
        }"#;

        assert!(serde_json::from_str::<TrendsHistoryResponse>(json).is_err());
    }
}
