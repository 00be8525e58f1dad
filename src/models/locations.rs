use crate::utils::format::format_rating;
use serde::Deserialize;

pub type LocationId = u32;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// A tracked business location.
///
/// Only the fields the dashboard shows are modelled; anything else the API
/// sends is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub location_image: Option<String>,
    #[serde(default)]
    pub primary_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub primary_category: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub ave_review_rating: Option<f64>,
    #[serde(default)]
    pub location_name_initials: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn display_name(&self) -> &str {
        self.location_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.name)
    }

    /// Logo image, preferring the location-specific one
    pub fn logo_url(&self) -> Option<&str> {
        non_empty(self.location_image.as_deref()).or_else(|| non_empty(self.image.as_deref()))
    }

    /// Initials for the logo fallback, derived from the name when the API
    /// does not provide them.
    pub fn initials(&self) -> String {
        match self.location_name_initials.as_deref() {
            Some(initials) if !initials.is_empty() => initials.to_string(),
            _ => self
                .display_name()
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .take(2)
                .collect::<String>()
                .to_uppercase(),
        }
    }

    /// Google Maps search link for the address, if there is one.
    pub fn maps_url(&self) -> Option<String> {
        self.address
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(|address| format!("{MAPS_SEARCH_URL}{}", urlencoding::encode(address)))
    }

    pub fn review_count_label(&self) -> String {
        format!("({})", self.review_count)
    }

    pub fn rating_label(&self) -> String {
        format_rating(self.ave_review_rating)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
}
