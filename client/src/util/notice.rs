//! Raise a transient notice and schedule its dismissal.

use leptos::prelude::*;

use crate::state::notice::NoticeState;
#[cfg(feature = "hydrate")]
use crate::state::notice::NOTICE_DISMISS_MS;

/// Show `message` now and clear it after `NOTICE_DISMISS_MS` unless a newer
/// notice replaced it first.
pub fn flash(notice: RwSignal<NoticeState>, message: impl Into<String>) {
    let mut seq = 0;
    let message = message.into();
    notice.update(|n| seq = n.show(message));

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
            notice.update(|n| {
                n.dismiss(seq);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}
