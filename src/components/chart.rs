use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid},
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Formatter, ItemStyle,
        JsFunction, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use serde_json::{Map, Value};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use super::graph_selector::GraphSelector;
use crate::config::Config;
use crate::models::{
    metric::MetricKey,
    series::{Series, derive_series},
    trends_history::TrendsHistoryResponse,
};
use crate::stores::StoreState;
use crate::utils::debounce::debounced_resize_listener;

const CHART_ID: &str = "trend-chart";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

// Same rounding as `format_axis_label`: half away from zero, no decimals
const AXIS_LABEL_BODY: &str =
    "return String(value < 0 ? -Math.round(-value) : Math.round(value));";

// `keywords` is spliced in ahead of this body, keyed by epoch millis
const TOOLTIP_BODY: &str = r"
var point = Array.isArray(params) ? params[0] : params;
var escape = function (text) { return String(text).replace(/&/g, '&amp;').replace(/</g, '&lt;'); };
var lines = [new Date(point.value[0]).toLocaleDateString(), point.marker + escape(point.seriesName) + ': ' + point.value[1]];
var tracked = keywords[point.value[0]];
if (tracked) { lines.push(escape(tracked)); }
return lines.join('<br/>');";

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub state: StoreState<TrendsHistoryResponse>,
}

/// History chart for the selected location with a metric picker.
#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let metric = use_state(MetricKey::default);
    let loading = props.state.is_loading();

    let series = use_memo(
        (props.state.data.clone(), *metric),
        |(history, metric)| derive_series(history.as_deref(), *metric),
    );

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (series.clone(), container_ref, loading),
            |(series, container_ref, loading)| {
                let listener = if *loading {
                    None
                } else {
                    container_ref.cast::<HtmlElement>().and_then(|container| {
                        render_chart(&container, series);

                        let series = Rc::clone(series);
                        debounced_resize_listener(
                            move || render_chart(&container, &series),
                            Config::RESIZE_DEBOUNCE_MS,
                        )
                    })
                };

                move || drop(listener)
            },
        );
    }

    let on_metric_change = {
        let metric = metric.clone();
        Callback::from(move |selected: MetricKey| metric.set(selected))
    };

    let keywords = props
        .state
        .data()
        .and_then(TrendsHistoryResponse::latest)
        .map(|record| record.keywords.clone())
        .unwrap_or_default();

    let style = format!("height: {}px;", Config::CHART_HEIGHT);

    html! {
        <div class="trend-chart">
            <GraphSelector selected={*metric} on_change={on_metric_change} />
            <div class="chart-container" ref={container_ref} {style}>
                if loading {
                    <div class="chart-loading">
                        <div class="spinner animate-spin"></div>
                    </div>
                } else if series.is_empty() {
                    <p class="chart-empty">{"No trend history available"}</p>
                } else {
                    <div id={CHART_ID} />
                }
            </div>
            if !keywords.is_empty() {
                <ul class="keyword-list" aria-label="Tracked keywords">
                    { for keywords.iter().map(|keyword| html! { <li class="keyword">{keyword}</li> }) }
                </ul>
            }
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &[Series]) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || series.is_empty() {
        return;
    }

    let chart = build_chart(series);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(series: &[Series]) -> CharmingChart {
    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
                .formatter(Formatter::Function(tooltip_formatter(series))),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Time)
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(
                    AxisLabel::new()
                        .color(AXIS_COLOR)
                        .formatter(Formatter::Function(JsFunction::new_with_args(
                            "value",
                            AXIS_LABEL_BODY,
                        ))),
                )
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    series.iter().fold(chart, |chart, s| {
        chart.series(
            Line::new()
                .name(s.name.clone())
                .data(s.chart_data())
                .item_style(ItemStyle::new().color(Config::CHART_COLOR))
                .line_style(LineStyle::new().color(Config::CHART_COLOR).width(3))
                .area_style(AreaStyle::new().color(Config::CHART_COLOR).opacity(0.2)),
        )
    })
}

/// Tooltip listing the keywords tracked on the hovered snapshot.
fn tooltip_formatter(series: &[Series]) -> JsFunction {
    let keywords: Map<String, Value> = series
        .iter()
        .flat_map(|s| &s.points)
        .filter(|point| !point.original.keywords.is_empty())
        .map(|point| {
            (
                point.timestamp_millis.to_string(),
                Value::from(point.original.keywords.join(", ")),
            )
        })
        .collect();

    let body = format!("var keywords = {};{TOOLTIP_BODY}", Value::Object(keywords));
    JsFunction::new_with_args("params", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trends_history::{TrendHistory, TrendsHistoryResponse};
    use chrono::{TimeZone, Utc};

    fn history() -> TrendsHistoryResponse {
        TrendsHistoryResponse {
            history: vec![TrendHistory {
                execution_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                average: 15.5,
                top_3_position: 5.0,
                top_3_percentage: 75.2,
                market_share_position: 3.0,
                market_share_percentage: 45.8,
                keywords: vec!["keyword1".to_string(), "keyword2".to_string()],
            }],
        }
    }

    fn rendered() -> String {
        let series = derive_series(Some(&history()), MetricKey::Average);
        build_chart(&series).to_string()
    }

    #[test]
    fn test_axis_label_formatter_is_a_function() {
        let chart = rendered();
        assert!(chart.contains(
            "function(value) { return String(value < 0 ? -Math.round(-value) : Math.round(value)); }"
        ));
        assert!(!chart.contains("\"function(value)"));
    }

    #[test]
    fn test_tooltip_lists_snapshot_keywords() {
        let chart = rendered();
        assert!(chart.contains("function(params)"));
        assert!(chart.contains(r#"{"1704067200000":"keyword1, keyword2"}"#));
    }

    #[test]
    fn test_series_styling() {
        let chart = rendered();
        assert!(chart.contains("Average Position"));
        assert!(chart.contains(Config::CHART_COLOR));
    }
}
