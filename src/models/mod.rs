pub mod dates;
pub mod error;
pub mod locations;
pub mod metric;
pub mod series;
pub mod stats;
pub mod trends;
pub mod trends_history;
