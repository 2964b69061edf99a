//! Profile settings form.

use leptos::prelude::*;

use crate::state::notice::NoticeState;
use crate::state::profile::{ProfileError, ProfileFlag, ProfileMsg, ProfileState, ProfileText};
use crate::util::notice::flash;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();
    let profile = RwSignal::new(ProfileState::default());
    let errors = RwSignal::new(Vec::<ProfileError>::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = Ok(());
        profile.update(|p| result = p.save());
        match result {
            Ok(()) => {
                errors.set(Vec::new());
                flash(notice, "Profile saved");
            }
            Err(errs) => errors.set(errs),
        }
    };
    let on_discard = move |_| {
        profile.update(ProfileState::discard);
        errors.set(Vec::new());
    };

    view! {
        <div class="settings-page">
            <header class="page-header">
                <h1>"Profile Settings"</h1>
            </header>
            <form class="settings-form" on:submit=on_submit>
                {ProfileText::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label class="settings-form__field">
                                <span>{field.label()}</span>
                                <input
                                    type=field.input_type()
                                    prop:value=move || profile.with(|p| field.get(&p.draft).to_owned())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        profile.update(|p| p.apply(ProfileMsg::SetText { field, value }));
                                    }
                                />
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
                <fieldset class="settings-form__flags">
                    <legend>"Notifications & security"</legend>
                    {ProfileFlag::ALL
                        .into_iter()
                        .map(|flag| {
                            view! {
                                <label class="settings-form__flag">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || profile.with(|p| flag.get(&p.draft))
                                        on:change=move |ev| {
                                            let value = event_target_checked(&ev);
                                            profile.update(|p| p.apply(ProfileMsg::SetFlag { flag, value }));
                                        }
                                    />
                                    {flag.label()}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>
                <Show when=move || errors.with(|e| !e.is_empty())>
                    <ul class="settings-form__errors">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e.to_string()}</li> }).collect::<Vec<_>>()}
                    </ul>
                </Show>
                <div class="settings-form__actions">
                    <button
                        class="btn btn--ghost"
                        type="button"
                        on:click=on_discard
                        disabled=move || !profile.with(ProfileState::is_dirty)
                    >
                        "Discard"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || !profile.with(ProfileState::is_dirty)>
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
