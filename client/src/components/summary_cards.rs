//! Allotment summary counters.

use leptos::prelude::*;

use crate::state::allotment::AllotmentSummary;

/// Four stat cards over the full schedule.
#[component]
pub fn SummaryCards(#[prop(into)] summary: Signal<AllotmentSummary>) -> impl IntoView {
    let card = move |label: &'static str, modifier: &'static str, pick: fn(&AllotmentSummary) -> usize| {
        view! {
            <div class=format!("stat-card stat-card--{modifier}")>
                <span class="stat-card__value">{move || summary.with(pick)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <div class="stat-cards">
            {card("Total", "total", |s| s.total)}
            {card("Allocated", "allocated", |s| s.allocated)}
            {card("Pending", "pending", |s| s.pending)}
            {card("Not eligible", "not-eligible", |s| s.not_eligible)}
        </div>
    }
}
