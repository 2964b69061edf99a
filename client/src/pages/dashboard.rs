//! Clinic dashboard: today's appointment list and status breakdown.

use leptos::prelude::*;

use crate::components::appointment_list::AppointmentList;
use crate::components::pie_chart::PieChart;
use crate::state::appointments::{
    AppointmentFilter, AppointmentStatus, AppointmentsState, demo_appointments, status_breakdown,
    visible_appointments,
};
use crate::util::pie::pie_slices;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let list = StoredValue::new(demo_appointments());
    let state = RwSignal::new(AppointmentsState::default());

    let visible = Memo::new(move |_| {
        let (filter, query) = state.with(|s| (s.filter, s.query.clone()));
        list.with_value(|l| visible_appointments(l, filter, &query))
    });
    let slices = Memo::new(move |_| {
        let breakdown = list.with_value(|l| status_breakdown(l));
        let entries: Vec<(&str, &str, usize)> = breakdown
            .iter()
            .map(|&(status, count)| (status.label(), status.color(), count))
            .collect();
        pie_slices(&entries)
    });

    let filter_button = move |label: &'static str, filter: AppointmentFilter| {
        view! {
            <button
                class="tabs__tab"
                class:tabs__tab--active=move || state.with(|s| s.filter == filter)
                on:click=move |_| state.update(|s| s.filter = filter)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <h1>"Clinic Dashboard"</h1>
            </header>
            <div class="dashboard-page__grid">
                <section class="panel">
                    <div class="panel__controls">
                        <div class="tabs">
                            {filter_button("All", AppointmentFilter::All)}
                            {AppointmentStatus::ALL
                                .into_iter()
                                .map(|status| filter_button(status.label(), AppointmentFilter::Only(status)))
                                .collect::<Vec<_>>()}
                        </div>
                        <input
                            class="search-input"
                            type="search"
                            placeholder="Search patient, doctor, department…"
                            prop:value=move || state.with(|s| s.query.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.query = value);
                            }
                        />
                    </div>
                    <AppointmentList items=visible/>
                </section>
                <section class="panel">
                    <PieChart title="Appointments by status" slices=slices/>
                </section>
            </div>
        </div>
    }
}
