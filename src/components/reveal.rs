use leptos::prelude::*;

use crate::state::ui::UiState;

/// Wraps content that fades in the first time it scrolls into view.
///
/// `revealed` is one-way; pass a signal to observe it (the statistics use it
/// to start their counters).
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] revealed: Option<RwSignal<bool>>,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let revealed = revealed.unwrap_or_else(|| RwSignal::new(false));
    let node_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        ui.track();
        if revealed.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = node_ref.get() {
                let top = el.get_bounding_client_rect().top();
                if crate::util::scroll::is_revealed(top, crate::util::viewport::viewport_height()) {
                    revealed.set(true);
                }
            }
        }
    });

    let base = if class.is_empty() { "fade-in".to_owned() } else { format!("fade-in {class}") };

    view! {
        <div node_ref=node_ref class=base class:animate=move || revealed.get()>
            {children()}
        </div>
    }
}
