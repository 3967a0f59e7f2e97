use crate::dashboards::d100_sales_performance::api::get_filter_options;
use crate::dashboards::d101_sales_overview::api;
use crate::shared::export::download_csv;
use crate::shared::latest_request::LatestRequest;
use crate::shared::plotly::render_or_log;
use chrono::NaiveDate;
use contracts::dashboards::d100_sales_performance::FilterOptionsResponse;
use contracts::dashboards::d101_sales_overview::{OverviewRequest, OverviewResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

const SALES_ID: &str = "d101-sales";
const GP_PCT_ID: &str = "d101-gp-pct";
const QUANTITY_ID: &str = "d101-quantity";
const PROFIT_ID: &str = "d101-profit";
const YTD_VS_PYTD_ID: &str = "d101-ytd-vs-pytd";

/// Sales Overview Dashboard component
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let (options, set_options) = signal(None::<FilterOptionsResponse>);

    // Filters
    let products = RwSignal::new(Vec::<String>::new());
    let countries = RwSignal::new(Vec::<String>::new());
    let (start_date, set_start_date) = signal(None::<NaiveDate>);
    let (end_date, set_end_date) = signal(None::<NaiveDate>);

    // Data state
    let (data, set_data) = signal(None::<OverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let request = Memo::new(move |_| OverviewRequest {
        products: products.get(),
        countries: countries.get(),
        start_date: start_date.get(),
        end_date: end_date.get(),
    });

    Effect::new(move |_| {
        spawn_local(async move {
            match get_filter_options().await {
                Ok(loaded) => set_options.set(Some(loaded)),
                Err(err) => log::error!("Failed to load D101 options: {}", err),
            }
        });
    });

    // Reload when any filter changes; replies to older filters are dropped
    let latest = LatestRequest::new();
    Effect::new(move |_| {
        let current = request.get();
        set_loading.set(true);
        set_error.set(None);

        let latest = latest.clone();
        let ticket = latest.next();
        spawn_local(async move {
            let result = api::get_overview(&current).await;
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

    Effect::new(move |_| {
        let Some(current) = data.get() else {
            return;
        };
        render_or_log(SALES_ID, &current.sales);
        render_or_log(GP_PCT_ID, &current.gross_profit_pct);
        render_or_log(QUANTITY_ID, &current.quantity);
        render_or_log(PROFIT_ID, &current.profit);
        render_or_log(YTD_VS_PYTD_ID, &current.ytd_vs_pytd);
    });

    let on_export = move |_| {
        let current = request.get_untracked();
        spawn_local(async move {
            let result = match api::export_overview(&current).await {
                Ok(content) => download_csv(&content, "sales_overview.csv"),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                log::error!("D101 export failed: {}", e);
                set_error.set(Some(e));
            }
        });
    };

    let date_min = move || options.get().and_then(|o| o.date_min).unwrap_or_default();
    let date_max = move || options.get().and_then(|o| o.date_max).unwrap_or_default();

    view! {
        <div id="d101_sales_overview--dashboard" class="dashboard">
            <div class="dashboard-controls">
                <CheckboxList
                    title="Product"
                    items=Signal::derive(move || {
                        options.get().map(|o| o.products).unwrap_or_default()
                    })
                    selected=products
                />
                <CheckboxList
                    title="Country"
                    items=Signal::derive(move || {
                        options.get().map(|o| o.countries).unwrap_or_default()
                    })
                    selected=countries
                />
                <div>
                    <label>
                        "From "
                        <input
                            type="date"
                            min=date_min
                            max=date_max
                            on:change=move |ev| set_start_date.set(parse_date(&event_target_value(&ev)))
                        />
                    </label>
                    <label>
                        " To "
                        <input
                            type="date"
                            min=date_min
                            max=date_max
                            on:change=move |ev| set_end_date.set(parse_date(&event_target_value(&ev)))
                        />
                    </label>
                </div>
                <button on:click=on_export>"Export CSV"</button>
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

            <div class="dashboard-summary">
                {move || data.get().map(|d| format!("{} sales rows", d.record_count)).unwrap_or_default()}
            </div>

            <div class="chart-grid">
                <div id=SALES_ID class="chart"></div>
                <div id=GP_PCT_ID class="chart"></div>
                <div id=QUANTITY_ID class="chart"></div>
                <div id=PROFIT_ID class="chart"></div>
            </div>
            <div id=YTD_VS_PYTD_ID class="chart"></div>
        </div>
    }
}

/// Multi-select as a list of checkboxes; nothing checked means "all"
#[component]
fn CheckboxList(
    title: &'static str,
    #[prop(into)] items: Signal<Vec<String>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <fieldset class="checkbox-list">
            <legend>{title}</legend>
            <For
                each=move || items.get()
                key=|item| item.clone()
                children=move |item| {
                    let value = item.clone();
                    let checked_value = item.clone();
                    view! {
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || selected.get().contains(&checked_value)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected.update(|values| toggle(values, &value, checked));
                                }
                            />
                            {item}
                        </label>
                        <br />
                    }
                }
            />
        </fieldset>
    }
}

fn toggle(values: &mut Vec<String>, value: &str, checked: bool) {
    let present = values.iter().any(|v| v == value);
    if checked && !present {
        values.push(value.to_string());
    } else if !checked && present {
        values.retain(|v| v != value);
    }
}

/// Empty input clears the bound
fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes_once() {
        let mut values = vec!["Lavender".to_string()];
        toggle(&mut values, "Hydrangea", true);
        toggle(&mut values, "Hydrangea", true);
        assert_eq!(values, vec!["Lavender", "Hydrangea"]);

        toggle(&mut values, "Lavender", false);
        assert_eq!(values, vec!["Hydrangea"]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-05"), NaiveDate::from_ymd_opt(2024, 3, 5));
        assert_eq!(parse_date(""), None);
    }
}
