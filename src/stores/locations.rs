use super::{Loadable, StateCell, fetch_payload};
use crate::models::locations::{Location, LocationId, LocationsResponse};
use crate::services::{Services, api::LOCATIONS_PATH};
use yew::Callback;

const ERROR_CONTEXT: &str = "Error fetching locations:";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationsState {
    pub locations: Vec<Location>,
    pub selected: Option<Location>,
    pub loading: bool,
}

impl LocationsState {
    pub fn selected_id(&self) -> Option<LocationId> {
        self.selected.as_ref().map(|location| location.id)
    }
}

impl Loadable for LocationsState {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// The location list and the location the dashboard is showing.
pub struct LocationsStore {
    services: Services,
    cell: StateCell<LocationsState>,
}

impl LocationsStore {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            cell: StateCell::new(LocationsState::default()),
        }
    }

    /// Receives a snapshot after every state change.
    pub fn with_listener(mut self, listener: Callback<LocationsState>) -> Self {
        self.cell.set_listener(listener);
        self
    }

    pub fn state(&self) -> LocationsState {
        self.cell.snapshot()
    }

    /// Loads the location list and selects its first entry.
    ///
    /// An absent payload empties the list and clears the selection. A failure
    /// is logged and leaves the previous list and selection in place.
    pub async fn fetch_locations(&self) {
        let generation = self.cell.begin();

        match fetch_payload::<LocationsResponse>(self.services.client.as_ref(), LOCATIONS_PATH)
            .await
        {
            Ok(payload) => self.cell.settle(generation, |state| {
                state.locations = payload.map(|p| p.locations).unwrap_or_default();
                state.selected = state.locations.first().cloned();
            }),
            Err(e) => {
                self.services.sink.error(ERROR_CONTEXT, &e);
                self.cell.settle(generation, |_| ());
            }
        }
    }

    /// Selects a loaded location; unknown ids keep the current selection.
    pub fn select_location(&self, location_id: LocationId) {
        self.cell.update(|state| {
            if let Some(location) = state.locations.iter().find(|l| l.id == location_id) {
                state.selected = Some(location.clone());
            }
        });
    }
}
