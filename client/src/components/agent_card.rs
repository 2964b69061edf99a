//! One agent's toggle panel.
//!
//! Inputs never write settings directly; each change is dispatched as an
//! `AgentMsg` through `AgentsState::apply`.

use leptos::prelude::*;

use crate::state::agents::{AgentField, AgentMsg, AgentsState};
use crate::state::notice::NoticeState;
use crate::util::notice::flash;

#[component]
pub fn AgentCard(agent_id: String, agents: RwSignal<AgentsState>) -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let id = StoredValue::new(agent_id);

    let setting = move |field: AgentField| {
        id.with_value(|id| agents.with(|s| s.agent(id).map_or(false, |a| field.get(&a.settings))))
    };
    let dispatch = move |msg: AgentMsg| {
        let mut changed = false;
        agents.update(|s| changed = s.apply(msg));
        changed
    };
    let name = move || id.with_value(|id| agents.with(|s| s.agent(id).map(|a| a.name.clone()).unwrap_or_default()));
    let description =
        move || id.with_value(|id| agents.with(|s| s.agent(id).map(|a| a.description.clone()).unwrap_or_default()));

    let on_reset = move |_| {
        if dispatch(AgentMsg::Reset { agent_id: id.get_value() }) {
            flash(notice, format!("{} restored to defaults", name()));
        }
    };

    view! {
        <section class="agent-card" class:agent-card--off=move || !setting(AgentField::Enabled)>
            <header class="agent-card__header">
                <h3>{name}</h3>
                <button class="btn btn--ghost" on:click=on_reset>"Reset"</button>
            </header>
            <p class="agent-card__description">{description}</p>
            <ul class="agent-card__toggles">
                {AgentField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <li class="agent-card__toggle">
                                <label>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || setting(field)
                                        disabled=move || {
                                            field != AgentField::Enabled && !setting(AgentField::Enabled)
                                        }
                                        on:change=move |ev| {
                                            dispatch(AgentMsg::Set {
                                                agent_id: id.get_value(),
                                                field,
                                                value: event_target_checked(&ev),
                                            });
                                        }
                                    />
                                    {field.label()}
                                </label>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
