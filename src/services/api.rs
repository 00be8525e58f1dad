use crate::config::Config;
use crate::models::{error::AppError, locations::LocationId};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

// ENDPOINTS
pub const LOCATIONS_PATH: &str = "/api/locations";

pub fn trends_path(location_id: LocationId) -> String {
    format!("/api/trends/{location_id}")
}

pub fn trends_history_path(location_id: LocationId) -> String {
    format!("/api/trends-history/{location_id}")
}

/// Source of JSON payloads for the stores.
///
/// `Ok(None)` means the request succeeded but carried no payload (an empty
/// body or a JSON `null`).
#[async_trait(?Send)]
pub trait FetchJson {
    async fn get_json(&self, path: &str) -> Result<Option<Value>, AppError>;
}

/// Error body returned by the API on 4xx responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub message: String,
}

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins an endpoint path onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the origin the `/api/...` paths are resolved against.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Uses the page origin when running in a browser.
    pub fn browser_origin(self) -> Self {
        match web_sys::window().and_then(|w| w.location().origin().ok()) {
            Some(origin) => self.base_url(origin),
            None => self,
        }
    }

    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

// API CLIENT
/// HTTP client for the dashboard API.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

#[async_trait(?Send)]
impl FetchJson for ApiClient {
    async fn get_json(&self, path: &str) -> Result<Option<Value>, AppError> {
        let response = self
            .http
            .get(self.config.url_for(path))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(error_for_status(status.as_u16(), &body));
        }

        parse_body(&body)
    }
}

/// Parses a successful response body; empty and `null` bodies carry no payload.
pub fn parse_body(body: &str) -> Result<Option<Value>, AppError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(body) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(AppError::DataError(format!("Failed to parse response: {e}"))),
    }
}

/// Creates an error based on HTTP status code.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        429 => AppError::RateLimited,
        404 => AppError::NotFound(error_message(body)),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::builder()
            .base_url("https://dashboard.example.com/")
            .build();

        assert_eq!(
            config.url_for(&trends_path(6)),
            "https://dashboard.example.com/api/trends/6"
        );
        assert_eq!(
            config.url_for(&trends_history_path(7)),
            "https://dashboard.example.com/api/trends-history/7"
        );
    }

    #[test]
    fn test_not_found_uses_error_body_message() {
        let body = r#"{"statusCode":404,"message":"Trends not found"}"#;
        assert_eq!(
            error_for_status(404, body),
            AppError::NotFound("Trends not found".to_string())
        );
    }

    #[test]
    fn test_not_found_with_plain_body() {
        assert_eq!(
            error_for_status(404, "nope"),
            AppError::NotFound("nope".to_string())
        );
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(error_for_status(429, ""), AppError::RateLimited);
        assert!(matches!(error_for_status(500, "boom"), AppError::ApiError(msg) if msg.contains("Server error")));
        assert!(matches!(error_for_status(400, ""), AppError::ApiError(msg) if msg.contains("Client error")));
    }

    #[test]
    fn test_parse_body_absent_payloads() {
        assert_eq!(parse_body("").unwrap(), None);
        assert_eq!(parse_body("  \n").unwrap(), None);
        assert_eq!(parse_body("null").unwrap(), None);
    }

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        assert!(matches!(parse_body("{not json"), Err(AppError::DataError(_))));
    }

    #[test]
    fn test_parse_body_payload() {
        let value = parse_body(r#"{"history": []}"#).unwrap().unwrap();
        assert!(value["history"].is_array());
    }
}
