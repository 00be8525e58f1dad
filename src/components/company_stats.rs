use crate::models::{metric::MetricKey, stats::derive_stat, trends::TrendsResponse};
use crate::stores::StoreState;
use yew::prelude::*;

use super::stats_viewer::StatsViewer;

#[derive(Properties, PartialEq)]
pub struct CompanyStatsProps {
    pub state: StoreState<TrendsResponse>,
}

/// Stat cards for every metric of the selected location.
#[function_component(CompanyStats)]
pub fn company_stats(props: &CompanyStatsProps) -> Html {
    let pair = props.state.data();

    html! {
        <div class="company-stats">
            {
                MetricKey::all().iter().map(|metric| {
                    html! {
                        <StatsViewer
                            key={metric.id()}
                            label={metric.stat_label()}
                            stat={derive_stat(pair, *metric)}
                            loading={props.state.is_loading()}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
