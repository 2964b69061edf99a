//! Navigation sidebar with theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Clinic Dashboard"),
    ("/allotment", "Exam Allotment"),
    ("/agents", "Agents"),
    ("/help", "Help Center"),
    ("/settings", "Settings"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__title">"Campus Care"</span>
                <button
                    class="btn sidebar__collapse"
                    title="Collapse sidebar"
                    on:click=move |_| ui.update(UiState::toggle_sidebar)
                >
                    {move || if ui.with(|u| u.sidebar_collapsed) { "»" } else { "«" }}
                </button>
            </div>
            <ul class="sidebar__links">
                {NAV_ITEMS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <A href=href attr:class="sidebar__link">{label}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <button
                class="btn sidebar__dark-toggle"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::dark_mode::toggle(ui.with_untracked(|u| u.dark_mode));
                    ui.update(|u| u.dark_mode = next);
                }
            >
                {move || if ui.with(|u| u.dark_mode) { "☀ Light" } else { "☾ Dark" }}
            </button>
        </nav>
    }
}
