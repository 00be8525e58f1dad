pub mod use_locations;
pub mod use_store;

pub use use_locations::{LocationsHandle, use_locations};
pub use use_store::{use_store, use_trends, use_trends_history};
