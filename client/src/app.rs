//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_toast::NoticeToast;
use crate::components::sidebar::Sidebar;
use crate::config::PortalConfig;
use crate::pages::{
    agents::AgentsPage, allotment::AllotmentPage, dashboard::DashboardPage, help::HelpPage,
    settings::SettingsPage,
};
use crate::state::notice::NoticeState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves `PortalConfig` once and provides it alongside the shared notice
/// and shell state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notice = RwSignal::new(NoticeState::default());

    provide_context(PortalConfig::from_browser());
    provide_context(ui);
    provide_context(notice);

    // Theme preference is browser-only; apply it after hydration.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-portal.css"/>
        <Title text="Campus Care Portal"/>

        <Router>
            <div class=move || ui.with(UiState::shell_class)>
                <Sidebar/>
                <main class="portal-shell__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=DashboardPage/>
                        <Route path=StaticSegment("allotment") view=AllotmentPage/>
                        <Route path=StaticSegment("agents") view=AgentsPage/>
                        <Route path=StaticSegment("help") view=HelpPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </main>
                <NoticeToast/>
            </div>
        </Router>
    }
}
