//! Transient confirmation toast driven by the shared notice signal.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notice = expect_context::<RwSignal<NoticeState>>();

    view! {
        <Show when=move || notice.with(|n| n.message.is_some())>
            <div class="notice-toast" role="status" aria-live="polite">
                {move || notice.with(|n| n.message.clone().unwrap_or_default())}
            </div>
        </Show>
    }
}
