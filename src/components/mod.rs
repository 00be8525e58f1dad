pub mod chart;
pub mod company_stats;
pub mod graph_selector;
pub mod location_details;
pub mod stats_viewer;

pub use chart::TrendChart;
pub use company_stats::CompanyStats;
pub use graph_selector::GraphSelector;
pub use location_details::LocationDetails;
pub use stats_viewer::StatsViewer;
