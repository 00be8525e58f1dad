use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    locations::LocationId, trends::TrendsResponse, trends_history::TrendsHistoryResponse,
};
use crate::services::Services;
use crate::stores::{Resource, Store, StoreState};

/// Keeps a `Store<T>` for the component's lifetime and refetches whenever
/// the selected location changes.
#[hook]
pub fn use_store<T>(services: Services, location_id: Option<LocationId>) -> StoreState<T>
where
    T: Resource + PartialEq,
{
    let state = use_state(StoreState::<T>::default);

    let store = {
        let setter = state.setter();
        use_memo((), move |_| {
            Store::<T>::new(services).with_listener(Callback::from(move |s| setter.set(s)))
        })
    };

    {
        let store = Rc::clone(&store);
        use_effect_with(location_id, move |location_id| {
            if let Some(id) = *location_id {
                spawn_local(async move {
                    store.fetch(id).await;
                });
            }

            || () // Cleanup
        });
    }

    (*state).clone()
}

#[hook]
pub fn use_trends(
    services: Services,
    location_id: Option<LocationId>,
) -> StoreState<TrendsResponse> {
    use_store::<TrendsResponse>(services, location_id)
}

#[hook]
pub fn use_trends_history(
    services: Services,
    location_id: Option<LocationId>,
) -> StoreState<TrendsHistoryResponse> {
    use_store::<TrendsHistoryResponse>(services, location_id)
}
