use crate::dashboards::{SalesOverviewDashboard, SalesPerformanceDashboard};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Performance,
    Overview,
}

#[component]
pub fn App() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Performance);

    view! {
        <header class="app-header">
            <button
                class:active=move || tab.get() == Tab::Performance
                on:click=move |_| set_tab.set(Tab::Performance)
            >
                "Sales Performance"
            </button>
            <button
                class:active=move || tab.get() == Tab::Overview
                on:click=move |_| set_tab.set(Tab::Overview)
            >
                "Sales Overview"
            </button>
        </header>
        {move || match tab.get() {
            Tab::Performance => view! { <SalesPerformanceDashboard /> }.into_any(),
            Tab::Overview => view! { <SalesOverviewDashboard /> }.into_any(),
        }}
    }
}
