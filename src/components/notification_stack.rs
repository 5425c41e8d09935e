//! Corner toast stack and the helpers that feed it.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};

/// Show a toast and schedule its auto-dismissal.
pub fn notify(state: RwSignal<NotificationState>, kind: NotificationKind, message: impl Into<String>) {
    let mut id = String::new();
    state.update(|s| id = s.push(kind, message));
    schedule_dismiss(state, id);
}

/// Show a short-lived stat detail tooltip.
pub fn show_tooltip(state: RwSignal<NotificationState>, message: impl Into<String>) {
    let mut id = String::new();
    state.update(|s| id = s.push_tooltip(message));
    schedule_dismiss(state, id);
}

fn schedule_dismiss(state: RwSignal<NotificationState>, id: String) {
    #[cfg(feature = "hydrate")]
    {
        let ttl_ms = state.with_untracked(|s| s.get(&id).map_or(0, |n| n.ttl_ms));
        gloo_timers::callback::Timeout::new(ttl_ms, move || {
            state.try_update(|s| s.dismiss(&id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = (state, id);
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let state = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-stack" aria-live="polite">
            <For
                each=move || state.get().items
                key=|n| n.id.clone()
                children=move |n: Notification| {
                    let id = n.id.clone();
                    view! {
                        <div class=n.kind.class() role="status">
                            <span class="notification__message">{n.message}</span>
                            <button
                                class="notification__close"
                                aria-label="Dismiss"
                                on:click=move |_ev| {
                                    state.update(|s| {
                                        s.dismiss(&id);
                                    });
                                }
                            >
                                "\u{00d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
