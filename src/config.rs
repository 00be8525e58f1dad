/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Serve the built-in fixture payloads instead of calling the API
    pub const USE_FIXTURES: bool = true;

    /// Origin used when the page origin is unavailable
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:3000";

    /// Trend chart height in pixels
    pub const CHART_HEIGHT: u32 = 350;

    /// Series, area and marker colour of the trend chart
    pub const CHART_COLOR: &'static str = "#28A6BD";

    /// Delay before re-rendering the chart after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
