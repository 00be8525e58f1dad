use yew::prelude::*;

use rank_dashboard::components::{CompanyStats, LocationDetails, TrendChart};
use rank_dashboard::hooks::{use_locations, use_trends, use_trends_history};
use rank_dashboard::services::Services;

#[function_component(App)]
fn app() -> Html {
    let services = use_memo((), |_| Services::from_config());

    let locations = use_locations((*services).clone());
    let location_id = locations.state.selected_id();
    let trends = use_trends((*services).clone(), location_id);
    let history = use_trends_history((*services).clone(), location_id);

    html! {
        <div class="app-container">
            <header class="app-header">
                <LocationDetails state={locations.state.clone()} on_select={locations.select.clone()} />
            </header>

            <main class="app-main">
                <section class="stats-section">
                    <h2>{"Ranking Overview"}</h2>
                    <CompanyStats state={trends} />
                </section>

                <section class="chart-section">
                    <h2>{"Ranking History"}</h2>
                    <TrendChart state={history} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
