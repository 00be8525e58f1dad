use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::metric::MetricKey;

#[derive(Properties, PartialEq)]
pub struct GraphSelectorProps {
    pub selected: MetricKey,
    pub on_change: Callback<MetricKey>,
}

/// Radio group choosing which metric the trend chart plots.
#[function_component(GraphSelector)]
pub fn graph_selector(props: &GraphSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if let Ok(metric) = target.value().parse::<MetricKey>() {
                callback.emit(metric);
            }
        })
    };

    html! {
        <div class="graph-selector" role="radiogroup" aria-label="Select chart metric">
            {
                MetricKey::all().iter().map(|metric| {
                    let id = metric.id();
                    let checked = *metric == props.selected;
                    let marker_class = if checked {
                        "graph-selector-marker selected"
                    } else {
                        "graph-selector-marker"
                    };
                    html! {
                        <div class="graph-selector-option" key={id}>
                            <input
                                type="radio"
                                class="sr-only"
                                name="graph-metric"
                                {id}
                                value={id}
                                {checked}
                                onchange={on_change.clone()}
                            />
                            <label for={id}>
                                <span class={marker_class}></span>
                                <span class="graph-selector-label">{metric.option_label()}</span>
                            </label>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
