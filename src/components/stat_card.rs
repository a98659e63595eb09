//! Summary tile for one dashboard statistic.

use leptos::prelude::*;

/// A single stat tile: label above the count, colored per kind.
#[component]
pub fn StatCard(label: &'static str, value: usize, kind: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{kind}")>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}
