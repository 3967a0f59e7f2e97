use crate::dashboards::d100_sales_performance::api;
use crate::shared::latest_request::LatestRequest;
use crate::shared::plotly::render_or_log;
use contracts::dashboards::d100_sales_performance::{FilterOptionsResponse, PerformanceResponse};
use contracts::enums::Metric;
use leptos::prelude::*;
use leptos::task::spawn_local;

const WATERFALL_ID: &str = "d100-waterfall";
const LINE_STACKED_ID: &str = "d100-line-stacked";

/// Sales Performance Dashboard component
#[component]
pub fn SalesPerformanceDashboard() -> impl IntoView {
    let (options, set_options) = signal(None::<FilterOptionsResponse>);
    let (selected_year, set_selected_year) = signal(None::<i32>);
    let (selected_metric, set_selected_metric) = signal(Metric::default());

    // Data state
    let (data, set_data) = signal(None::<PerformanceResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Load filter options on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_filter_options().await {
                Ok(loaded) => {
                    set_selected_year.set(Some(loaded.default_year));
                    set_options.set(Some(loaded));
                }
                Err(err) => {
                    log::error!("Failed to load D100 options: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // Load data when year or metric changes; only the latest reply is shown
    let latest = LatestRequest::new();
    Effect::new(move |_| {
        let Some(year) = selected_year.get() else {
            return;
        };
        let metric = selected_metric.get();
        set_loading.set(true);
        set_error.set(None);

        let latest = latest.clone();
        let ticket = latest.next();
        spawn_local(async move {
            let result = api::get_performance(year, metric).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    // Redraw charts when data changes
    Effect::new(move |_| {
        let Some(current) = data.get() else {
            return;
        };
        render_or_log(WATERFALL_ID, &current.waterfall);
        render_or_log(LINE_STACKED_ID, &current.line_stacked);
    });

    let years = move || options.get().map(|o| o.years).unwrap_or_default();
    let metrics = move || options.get().map(|o| o.metrics).unwrap_or_default();

    view! {
        <div id="d100_sales_performance--dashboard" class="dashboard">
            <div class="dashboard-controls">
                <label>
                    "Year "
                    <select on:change=move |ev| {
                        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
                            set_selected_year.set(Some(year));
                        }
                    }>
                        <For
                            each=years
                            key=|year| *year
                            children=move |year| {
                                view! {
                                    <option
                                        value=year.to_string()
                                        prop:selected=move || selected_year.get() == Some(year)
                                    >
                                        {year}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>

                <div>
                    {move || {
                        metrics()
                            .into_iter()
                            .filter_map(|option| {
                                let metric = Metric::from_code(&option.code)?;
                                Some(view! {
                                    <label>
                                        <input
                                            type="radio"
                                            name="d100-metric"
                                            value=option.code
                                            prop:checked=move || selected_metric.get() == metric
                                            on:change=move |_| set_selected_metric.set(metric)
                                        />
                                        {option.label}
                                    </label>
                                })
                            })
                            .collect_view()
                    }}
                </div>
            </div>

            {move || {
                if loading.get() {
                    view! { <div class="dashboard-loading">"Загрузка данных..."</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="dashboard-error">
                            <strong>"⚠ Ошибка: "</strong>
                            {err}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <h2 class="dashboard-title">{move || data.get().map(|d| d.title).unwrap_or_default()}</h2>
            <div class="dashboard-summary">
                {move || data.get().map(|d| d.summary.text).unwrap_or_default()}
            </div>

            <div id=WATERFALL_ID class="chart"></div>
            <div id=LINE_STACKED_ID class="chart"></div>
        </div>
    }
}
