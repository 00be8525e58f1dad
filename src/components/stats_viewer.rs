use crate::models::stats::DerivedStat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsViewerProps {
    pub label: AttrValue,
    pub stat: DerivedStat,
    #[prop_or(false)]
    pub loading: bool,
}

/// One stat card: value, label and the change since the previous snapshot.
#[function_component(StatsViewer)]
pub fn stats_viewer(props: &StatsViewerProps) -> Html {
    if props.loading {
        return html! {
            <div class="stats-viewer">
                <div class="stats-skeleton animate-pulse"></div>
                <div class="stats-skeleton stats-skeleton-small animate-pulse"></div>
            </div>
        };
    }

    let stat = &props.stat;
    let delta_class = format!("stats-delta {}", stat.direction.css_class());

    html! {
        <div class="stats-viewer">
            <div class="stats-body">
                <p class="stats-value">{&stat.formatted_value}</p>
                <p class="stats-label">{&props.label}</p>
            </div>
            <div class="stats-change" data-direction={stat.direction.as_str()}>
                <span class="stats-icon">{stat.direction.icon()}</span>
                <span class={delta_class}>{&stat.formatted_delta}</span>
            </div>
        </div>
    }
}
