//! Exam seat allotment page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the signed-in student's allotments once per mount, then derives the
//! visible table from tab + search on every change. Summary cards always
//! reflect the full record set.
//!
//! LIFECYCLE
//! =========
//! The fetch task holds an `AliveFlag` clone; teardown clears it so a late
//! response never writes into a disposed page. A second task re-reads the
//! local date every `DATE_CHECK_SECS` so an open page moves records from
//! Upcoming to Past after midnight; it stops on the same flag.

use leptos::prelude::*;

use crate::components::allotment_table::AllotmentTable;
use crate::components::summary_cards::SummaryCards;
use crate::config::PortalConfig;
use crate::state::allotment::{AllotmentState, AllotmentTab, today_iso};
#[cfg(feature = "hydrate")]
use crate::state::allotment::{DATE_CHECK_SECS, advance_today};
use crate::state::notice::NoticeState;
use crate::util::alive::AliveFlag;
use crate::util::export::{download_json, export_filename, export_payload};
use crate::util::notice::flash;

#[component]
pub fn AllotmentPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let notice = expect_context::<RwSignal<NoticeState>>();
    let state = RwSignal::new(AllotmentState::default());
    let today = RwSignal::new(today_iso());

    state.update(AllotmentState::begin_load);
    let alive = AliveFlag::new();

    #[cfg(feature = "hydrate")]
    {
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_allotments(&config).await;
            let applied = alive_task.run_if_alive(|| {
                state.update(|s| {
                    s.finish_load(outcome);
                });
            });
            if !applied {
                log::debug!("allotment: page torn down before load finished; result dropped");
            }
        });

        let alive_clock = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(DATE_CHECK_SECS)).await;
                if !alive_clock.is_alive() {
                    break;
                }
                today.maybe_update(|d| advance_today(d, today_iso()));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
    on_cleanup(move || alive.kill());

    let visible = Memo::new(move |_| today.with(|t| state.with(|s| s.visible(t))));
    let summary = Memo::new(move |_| state.with(AllotmentState::summary));

    let on_export = move |_| {
        let rows = visible.get_untracked();
        let filename = export_filename(chrono::Local::now().naive_local());
        match export_payload(&rows) {
            Ok(payload) => {
                download_json(&filename, &payload);
                flash(notice, format!("Exported {} records", rows.len()));
            }
            Err(e) => {
                log::warn!("allotment: export failed err={e}");
                flash(notice, "Export failed");
            }
        }
    };

    let on_reset = move |_| {
        state.update(AllotmentState::reset);
        flash(notice, "Filters reset");
    };

    view! {
        <div class="allotment-page">
            <header class="page-header">
                <h1>"Exam Seat Allotment"</h1>
                <div class="page-header__actions">
                    <button class="btn" on:click=on_export disabled=move || state.with(|s| s.loading)>
                        "Export JSON"
                    </button>
                    <button class="btn btn--ghost" on:click=on_reset>"Reset"</button>
                </div>
            </header>

            <SummaryCards summary=summary/>

            {move || {
                state
                    .with(|s| s.origin.banner())
                    .map(|text| view! { <p class="allotment-page__banner">{text}</p> })
            }}

            <div class="allotment-page__controls">
                <div class="tabs" role="tablist">
                    {AllotmentTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    role="tab"
                                    class:tabs__tab--active=move || state.with(|s| s.tab == tab)
                                    on:click=move |_| state.update(|s| s.tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search subject, room, seat, hall ticket…"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.query = value);
                    }
                />
            </div>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="allotment-page__loading">"Loading allotments..."</p> }
            >
                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=|| view! { <p class="allotment-page__empty">"No records match your filters."</p> }
                >
                    <AllotmentTable rows=visible/>
                </Show>
            </Show>
        </div>
    }
}
