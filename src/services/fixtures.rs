use crate::models::error::AppError;
use crate::services::api::{FetchJson, LOCATIONS_PATH};
use async_trait::async_trait;
use serde_json::{Value, json};

pub const TRENDS_NOT_FOUND: &str = "Trends not found";

/// In-process stand-in for the dashboard API.
///
/// Serves the same payloads the placeholder endpoints return, for locations
/// 6, 7 and 8. Unknown ids behave like the endpoints' 404.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureClient;

impl FixtureClient {
    pub fn new() -> Self {
        Self
    }

    /// Resolves an endpoint path to its fixture payload.
    pub fn respond(&self, path: &str) -> Result<Option<Value>, AppError> {
        if path == LOCATIONS_PATH {
            return Ok(Some(locations()));
        }

        if let Some(id) = path.strip_prefix("/api/trends-history/") {
            return lookup(id, trends_history);
        }

        if let Some(id) = path.strip_prefix("/api/trends/") {
            return lookup(id, trends);
        }

        Err(AppError::NotFound(format!("No route for {path}")))
    }
}

#[async_trait(?Send)]
impl FetchJson for FixtureClient {
    async fn get_json(&self, path: &str) -> Result<Option<Value>, AppError> {
        self.respond(path)
    }
}

fn lookup(id: &str, table: fn(u32) -> Option<Value>) -> Result<Option<Value>, AppError> {
    id.parse::<u32>()
        .ok()
        .and_then(table)
        .map(Some)
        .ok_or_else(|| AppError::NotFound(TRENDS_NOT_FOUND.to_string()))
}

fn locations() -> Value {
    json!({
        "locations": [
            {
                "id": 6,
                "name": "Ledger & Leaf Bookkeeping",
                "location_name": "Ledger & Leaf Bookkeeping",
                "image": null,
                "location_image": null,
                "primary_phone": "+1 512-555-0161",
                "address": "118 Congress Ave, Austin, TX 78701",
                "city": "Austin",
                "state": "TX",
                "zip": "78701",
                "primary_category": "Bookkeeping service",
                "website_url": "https://ledgerandleaf.example.com",
                "review_count": 42,
                "ave_review_rating": 4.7,
                "location_name_initials": "LL",
                "completion_percentage": 90,
                "latitude": 30.2655,
                "longitude": -97.7446
            },
            {
                "id": 7,
                "name": "Harbor Tax & Accounting",
                "location_name": "Harbor Tax & Accounting",
                "image": null,
                "location_image": null,
                "primary_phone": "+1 206-555-0174",
                "address": "901 Western Ave, Seattle, WA 98104",
                "city": "Seattle",
                "state": "WA",
                "zip": "98104",
                "primary_category": "Tax preparation service",
                "website_url": "https://harbortax.example.com",
                "review_count": 18,
                "ave_review_rating": 4.2,
                "location_name_initials": "HT",
                "completion_percentage": 75,
                "latitude": 47.6038,
                "longitude": -122.3381
            },
            {
                "id": 8,
                "name": "Northwind Software Studio",
                "location_name": "Northwind Software Studio",
                "image": null,
                "location_image": null,
                "primary_phone": "+1 303-555-0188",
                "address": null,
                "city": "Denver",
                "state": "CO",
                "zip": "80202",
                "primary_category": "Software company",
                "website_url": null,
                "review_count": 7,
                "ave_review_rating": null,
                "location_name_initials": "NS",
                "completion_percentage": null,
                "latitude": 39.7508,
                "longitude": -104.9966
            }
        ]
    })
}

fn trends(id: u32) -> Option<Value> {
    let (current, previous) = match id {
        6 => (
            json!({
                "average": 11,
                "top_3_position": 29.67,
                "top_3_percentage": 65.02,
                "market_share_position": 15,
                "market_share_percentage": 73.67
            }),
            json!({
                "average": 5,
                "execution_date": "2025-04-08T13:48:01.000000Z",
                "top_3_position": 39,
                "top_3_percentage": 13.77,
                "market_share_position": 18,
                "market_share_percentage": 57
            }),
        ),
        7 => (
            json!({
                "average": 13,
                "top_3_position": 25.12,
                "top_3_percentage": 70.11,
                "market_share_position": 12,
                "market_share_percentage": 80.23
            }),
            json!({
                "average": 7,
                "execution_date": "2025-04-08T13:48:01.000000Z",
                "top_3_position": 35.5,
                "top_3_percentage": 20.45,
                "market_share_position": 14,
                "market_share_percentage": 60.5
            }),
        ),
        8 => (
            json!({
                "average": 9,
                "top_3_position": 31.8,
                "top_3_percentage": 60.5,
                "market_share_position": 17,
                "market_share_percentage": 70.2
            }),
            json!({
                "average": 4,
                "execution_date": "2025-04-08T13:48:01.000000Z",
                "top_3_position": 41.2,
                "top_3_percentage": 15.3,
                "market_share_position": 20,
                "market_share_percentage": 55.7
            }),
        ),
        _ => return None,
    };

    Some(json!({ "current": current, "previous": previous }))
}

/// (date, average, top 3 position, top 3 %, market share position, market share %)
type HistoryRow = (&'static str, f64, f64, f64, f64, f64);

fn trends_history(id: u32) -> Option<Value> {
    let (keywords, rows): ([&str; 3], [HistoryRow; 3]) = match id {
        6 => (
            ["library", "bookkeeping", "book keepers"],
            [
                ("2025-04-09T13:48:01.000000Z", 11.0, 29.67, 65.02, 15.0, 73.67),
                ("2025-04-08T13:48:01.000000Z", 5.0, 39.0, 13.77, 18.0, 57.0),
                ("2025-04-07T13:48:01.000000Z", 5.333_333_333_333_333, 30.67, 8.81, 10.0, 68.67),
            ],
        ),
        7 => (
            ["finance", "accounting", "tax"],
            [
                ("2025-04-09T13:48:01.000000Z", 13.0, 25.12, 70.11, 12.0, 80.23),
                ("2025-04-08T13:48:01.000000Z", 7.0, 35.5, 20.45, 14.0, 60.5),
                ("2025-04-07T13:48:01.000000Z", 6.1, 28.9, 10.2, 9.0, 65.1),
            ],
        ),
        8 => (
            ["software", "development", "coding"],
            [
                ("2025-04-09T13:48:01.000000Z", 9.0, 31.8, 60.5, 17.0, 70.2),
                ("2025-04-08T13:48:01.000000Z", 4.0, 41.2, 15.3, 20.0, 55.7),
                ("2025-04-07T13:48:01.000000Z", 5.7, 34.1, 9.5, 11.0, 66.8),
            ],
        ),
        _ => return None,
    };

    let history: Vec<Value> = rows
        .iter()
        .map(|(date, average, top_3_pos, top_3_pct, share_pos, share_pct)| {
            json!({
                "execution_date": date,
                "average": average,
                "top_3_position": top_3_pos,
                "top_3_percentage": top_3_pct,
                "market_share_position": share_pos,
                "market_share_percentage": share_pct,
                "keywords": keywords,
            })
        })
        .collect();

    Some(json!({ "history": history }))
}
