use super::{Loadable, StateCell, fetch_payload};
use crate::models::{
    locations::LocationId, trends::TrendsResponse, trends_history::TrendsHistoryResponse,
};
use crate::services::{
    Services,
    api::{trends_history_path, trends_path},
};
use serde::de::DeserializeOwned;
use std::rc::Rc;
use yew::Callback;

/// A per-location payload a `Store` can fetch.
pub trait Resource: DeserializeOwned + 'static {
    /// Prefix of the log line written when a fetch fails
    const ERROR_CONTEXT: &'static str;

    fn path(location_id: LocationId) -> String;
}

impl Resource for TrendsResponse {
    const ERROR_CONTEXT: &'static str = "Error fetching trends:";

    fn path(location_id: LocationId) -> String {
        trends_path(location_id)
    }
}

impl Resource for TrendsHistoryResponse {
    const ERROR_CONTEXT: &'static str = "Error fetching trends history:";

    fn path(location_id: LocationId) -> String {
        trends_history_path(location_id)
    }
}

/// What a store exposes to views: the last payload and a loading flag.
#[derive(Debug)]
pub struct StoreState<T> {
    pub data: Option<Rc<T>>,
    pub loading: bool,
}

impl<T> StoreState<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
        }
    }
}

impl<T> Clone for StoreState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
        }
    }
}

impl<T: PartialEq> PartialEq for StoreState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.loading == other.loading
    }
}

impl<T> Loadable for StoreState<T> {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Holds the latest payload of one resource for the selected location.
///
/// A successful payload replaces the held data wholesale. An absent payload
/// or a failure leaves it untouched; failures are reported to the diagnostic
/// sink and never propagated.
pub struct Store<T: Resource> {
    services: Services,
    cell: StateCell<StoreState<T>>,
}

/// Current/previous snapshot pair of the selected location.
pub type TrendsStore = Store<TrendsResponse>;

/// Dated snapshot history of the selected location.
pub type TrendsHistoryStore = Store<TrendsHistoryResponse>;

impl<T: Resource> Store<T> {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            cell: StateCell::new(StoreState::default()),
        }
    }

    /// Receives a snapshot after every state change.
    pub fn with_listener(mut self, listener: Callback<StoreState<T>>) -> Self {
        self.cell.set_listener(listener);
        self
    }

    pub fn state(&self) -> StoreState<T> {
        self.cell.snapshot()
    }

    pub async fn fetch(&self, location_id: LocationId) {
        let generation = self.cell.begin();
        let path = T::path(location_id);

        let payload = match fetch_payload::<T>(self.services.client.as_ref(), &path).await {
            Ok(payload) => payload,
            Err(e) => {
                self.services.sink.error(T::ERROR_CONTEXT, &e);
                None
            }
        };

        self.cell.settle(generation, |state| {
            if let Some(payload) = payload {
                state.data = Some(Rc::new(payload));
            }
        });
    }
}
