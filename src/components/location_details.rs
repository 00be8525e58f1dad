use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::locations::{Location, LocationId};
use crate::stores::LocationsState;

#[derive(Properties, PartialEq)]
pub struct LocationDetailsProps {
    pub state: LocationsState,
    pub on_select: Callback<LocationId>,
}

/// Location picker plus contact details of the selected location.
#[function_component(LocationDetails)]
pub fn location_details(props: &LocationDetailsProps) -> Html {
    let on_change = {
        let callback = props.on_select.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = target.value().parse::<LocationId>() {
                callback.emit(id);
            }
        })
    };

    let selected = props.state.selected.as_ref();
    let selected_id = props.state.selected_id();

    html! {
        <div class="location-details">
            <RoundedLogo location={selected.cloned()} />
            <div class="location-info">
                <select
                    class="location-selector"
                    onchange={on_change}
                    aria-label="Select location"
                    title="Select location"
                >
                    {
                        props.state.locations.iter().map(|location| {
                            let selected = Some(location.id) == selected_id;
                            html! {
                                <option value={location.id.to_string()} {selected}>
                                    {&location.name}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                if let Some(location) = selected {
                    <ContactDetails location={location.clone()} />
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LocationProps {
    location: Location,
}

#[derive(Properties, PartialEq)]
struct OptionalLocationProps {
    location: Option<Location>,
}

#[function_component(RoundedLogo)]
fn rounded_logo(props: &OptionalLocationProps) -> Html {
    let Some(location) = &props.location else {
        return html! { <div class="rounded-logo placeholder"></div> };
    };

    match location.logo_url() {
        Some(url) => html! {
            <img class="rounded-logo" src={url.to_string()} alt={location.display_name().to_string()} />
        },
        None => html! {
            <div class="rounded-logo initials" title={location.display_name().to_string()}>
                {location.initials()}
            </div>
        },
    }
}

#[function_component(ContactDetails)]
fn contact_details(props: &LocationProps) -> Html {
    let location = &props.location;

    html! {
        <div class="contact-details">
            <p class="location-rating">
                <span class="rating-value">{location.rating_label()}</span>
                <span class="rating-stars" aria-hidden="true">{"★"}</span>
                <span class="review-count">{location.review_count_label()}</span>
            </p>
            if let Some(address) = &location.address {
                <p class="location-address">{address}</p>
            }
            if let Some(phone) = &location.primary_phone {
                <p class="location-phone">{phone}</p>
            }
            <div class="location-links">
                if let Some(url) = &location.website_url {
                    <a class="link-with-icon" href={url.clone()} target="_blank" rel="noopener noreferrer">
                        {"Website"}
                    </a>
                }
                if let Some(url) = location.maps_url() {
                    <a class="link-with-icon" href={url} target="_blank" rel="noopener noreferrer">
                        {"View on Maps"}
                    </a>
                }
            </div>
        </div>
    }
}
