//! Read-only exam allotment table.

#[cfg(test)]
#[path = "allotment_table_test.rs"]
mod allotment_table_test;

use leptos::prelude::*;

use crate::net::types::{AllotmentRecord, AllotmentStatus};

fn status_class(status: AllotmentStatus) -> &'static str {
    match status {
        AllotmentStatus::Allocated => "badge badge--ok",
        AllotmentStatus::Pending => "badge badge--warn",
        AllotmentStatus::NotEligible => "badge badge--danger",
    }
}

/// Room cell text. Allocated rows without a room show a TBA marker.
fn room_text(record: &AllotmentRecord) -> String {
    if record.has_placement() {
        match (&record.building, &record.room_name) {
            (Some(b), Some(n)) => format!("{} · {b} ({n})", record.room_code),
            (Some(b), None) => format!("{} · {b}", record.room_code),
            _ => record.room_code.clone(),
        }
    } else if record.status == AllotmentStatus::Allocated {
        "Room TBA".to_owned()
    } else {
        "—".to_owned()
    }
}

#[component]
pub fn AllotmentTable(#[prop(into)] rows: Signal<Vec<AllotmentRecord>>) -> impl IntoView {
    view! {
        <table class="allotment-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Session"</th>
                    <th>"Subject"</th>
                    <th>"Time"</th>
                    <th>"Room"</th>
                    <th>"Seat"</th>
                    <th>"Hall ticket"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|r| {
                            let date = r.date_key().to_owned();
                            let room = room_text(&r);
                            let note = r.reason.clone().or_else(|| r.venue_note.clone());
                            let badge = status_class(r.status);
                            let status = r.status.label();
                            view! {
                                <tr class="allotment-table__row">
                                    <td>{date}</td>
                                    <td>{r.session}</td>
                                    <td>
                                        <span class="allotment-table__code">{r.subject_code}</span>
                                        " "
                                        {r.subject_name}
                                    </td>
                                    <td>{format!("{}–{}", r.start_time, r.end_time)}</td>
                                    <td>{room}</td>
                                    <td>{r.seat_no.unwrap_or_else(|| "—".to_owned())}</td>
                                    <td>{r.hall_ticket_no.unwrap_or_else(|| "—".to_owned())}</td>
                                    <td>
                                        <span class=badge>{status}</span>
                                        {note.map(|n| view! { <small class="allotment-table__note">{n}</small> })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
