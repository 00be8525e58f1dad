pub mod locations;
pub mod store;

use crate::models::error::AppError;
use crate::services::api::FetchJson;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use yew::Callback;

pub use locations::{LocationsState, LocationsStore};
pub use store::{Resource, Store, StoreState, TrendsHistoryStore, TrendsStore};

/// States that carry a loading flag.
pub trait Loadable {
    fn set_loading(&mut self, loading: bool);
}

/// Store state plus the generation of the most recent request.
///
/// Every fetch bumps the generation; a response is committed only while its
/// generation is still the latest, so a slow superseded request can never
/// overwrite newer data or clear the loading flag early. Borrows are never
/// held across an await.
pub(crate) struct StateCell<S> {
    inner: RefCell<(S, u64)>,
    listener: Option<Callback<S>>,
}

impl<S: Clone + Loadable> StateCell<S> {
    pub(crate) fn new(state: S) -> Self {
        Self {
            inner: RefCell::new((state, 0)),
            listener: None,
        }
    }

    pub(crate) fn set_listener(&mut self, listener: Callback<S>) {
        self.listener = Some(listener);
    }

    pub(crate) fn snapshot(&self) -> S {
        self.inner.borrow().0.clone()
    }

    /// Marks a new request in flight and returns its generation.
    pub(crate) fn begin(&self) -> u64 {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.1 += 1;
            inner.0.set_loading(true);
            inner.1
        };
        self.notify();
        generation
    }

    /// Applies a settled request's outcome and clears the loading flag,
    /// unless a newer request has started since.
    pub(crate) fn settle(&self, generation: u64, apply: impl FnOnce(&mut S)) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.1 != generation {
                return;
            }
            apply(&mut inner.0);
            inner.0.set_loading(false);
        }
        self.notify();
    }

    /// Synchronous change outside the request cycle.
    pub(crate) fn update(&self, apply: impl FnOnce(&mut S)) {
        apply(&mut self.inner.borrow_mut().0);
        self.notify();
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener.emit(self.snapshot());
        }
    }
}

/// Fetches `path` and parses the payload into `T`.
///
/// An absent payload is `Ok(None)`; a payload of the wrong shape is a
/// `DataError`, never a default value.
pub(crate) async fn fetch_payload<T: DeserializeOwned>(
    client: &dyn FetchJson,
    path: &str,
) -> Result<Option<T>, AppError> {
    match client.get_json(path).await? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| AppError::DataError(format!("Unexpected payload from {path}: {e}"))),
        None => Ok(None),
    }
}
