//! Appointment rows for the clinic dashboard.

use leptos::prelude::*;

use crate::state::appointments::Appointment;

#[component]
pub fn AppointmentList(#[prop(into)] items: Signal<Vec<Appointment>>) -> impl IntoView {
    view! {
        <Show
            when=move || items.with(|i| !i.is_empty())
            fallback=|| view! { <p class="appointment-list__empty">"No appointments match."</p> }
        >
            <ul class="appointment-list">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|a| {
                            view! {
                                <li class="appointment-list__item">
                                    <div class="appointment-list__when">
                                        <span>{a.date}</span>
                                        <span>{a.time}</span>
                                    </div>
                                    <div class="appointment-list__who">
                                        <strong>{a.patient}</strong>
                                        <span>{format!("{} · {}", a.doctor, a.department)}</span>
                                    </div>
                                    <span
                                        class="badge"
                                        style=format!("background:{}", a.status.color())
                                    >
                                        {a.status.label()}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}
