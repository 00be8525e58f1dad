use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::locations::LocationId;
use crate::services::Services;
use crate::stores::{LocationsState, LocationsStore};

/// Handle returned by `use_locations` hook
#[derive(Clone, PartialEq)]
pub struct LocationsHandle {
    pub state: LocationsState,
    pub select: Callback<LocationId>,
}

/// Loads the location list once on mount.
#[hook]
pub fn use_locations(services: Services) -> LocationsHandle {
    let state = use_state(LocationsState::default);

    let store = {
        let setter = state.setter();
        use_memo((), move |_| {
            LocationsStore::new(services).with_listener(Callback::from(move |s| setter.set(s)))
        })
    };

    {
        let store = Rc::clone(&store);
        use_effect_with((), move |_| {
            spawn_local(async move {
                store.fetch_locations().await;
            });

            || ()
        });
    }

    let select = {
        let store = Rc::clone(&store);
        Callback::from(move |id: LocationId| store.select_location(id))
    };

    LocationsHandle {
        state: (*state).clone(),
        select,
    }
}
