//! Agent configuration page.

use leptos::prelude::*;

use crate::components::agent_card::AgentCard;
use crate::state::agents::{AgentsState, demo_agents};

#[component]
pub fn AgentsPage() -> impl IntoView {
    let agents = RwSignal::new(AgentsState::new(demo_agents()));
    let ids: Vec<String> = agents.with_untracked(|s| s.agents.iter().map(|a| a.id.clone()).collect());

    view! {
        <div class="agents-page">
            <header class="page-header">
                <h1>"Agents"</h1>
                <span class="page-header__meta">
                    {move || agents.with(|s| format!("{} of {} enabled", s.enabled_count(), s.agents.len()))}
                </span>
            </header>
            <div class="agents-page__grid">
                {ids.into_iter().map(|id| view! { <AgentCard agent_id=id agents=agents/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
