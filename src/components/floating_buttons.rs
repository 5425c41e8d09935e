use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::viewport::{scroll_to_section, scroll_to_top};

/// Back-to-top and floating "schedule a meeting" buttons. Both appear only
/// after the visitor has scrolled a little way down.
#[component]
pub fn FloatingButtons() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <a
            href="#contact"
            class="floating-cta"
            class:show=move || ui.get().floating_cta_visible
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_section("contact");
            }
        >
            "Schedule a meeting"
        </a>
        <button
            class="back-to-top"
            class:show=move || ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=move |_ev| scroll_to_top()
        >
            "\u{2191}"
        </button>
    }
}
