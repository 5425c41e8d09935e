//! Count-up display for a formatted number such as `98%`.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::counter::CounterTarget;
#[cfg(feature = "hydrate")]
use crate::util::counter::CounterAnimation;

/// Shows `value` and counts up to it from zero each time `trigger` turns on.
///
/// The server renders the final text. Values without a number, and visitors
/// who prefer reduced motion, always see the final text.
#[component]
pub fn AnimatedValue(
    value: String,
    #[prop(into)] trigger: Signal<bool>,
    duration_ms: u32,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let text = RwSignal::new(value.clone());
    let target = CounterTarget::parse(&value);
    // Bumped per run; a loop exits when it no longer owns the latest run.
    let generation = RwSignal::new(0_u64);

    Effect::new(move |was_on: Option<bool>| {
        let on = trigger.get();
        if on && was_on != Some(true) {
            match target.clone() {
                Some(target) if !ui.get_untracked().reduced_motion => {
                    let run = generation.get_untracked() + 1;
                    generation.set(run);
                    start_count(text, generation, run, target, duration_ms, delay_ms);
                }
                _ => text.set(value.clone()),
            }
        }
        on
    });

    view! { <span class=class>{move || text.get()}</span> }
}

#[cfg(feature = "hydrate")]
fn start_count(
    text: RwSignal<String>,
    generation: RwSignal<u64>,
    run: u64,
    target: CounterTarget,
    duration_ms: u32,
    delay_ms: u32,
) {
    use std::time::Duration;

    use gloo_timers::future::sleep;

    use crate::util::viewport::now_ms;

    let animation = CounterAnimation::new(0, target.value, duration_ms);
    text.set(target.format(0));
    leptos::task::spawn_local(async move {
        if delay_ms > 0 {
            sleep(Duration::from_millis(u64::from(delay_ms))).await;
        }
        let started = now_ms();
        loop {
            if generation.try_get_untracked() != Some(run) {
                return;
            }
            let elapsed = now_ms() - started;
            text.set(target.format(animation.value_at(elapsed)));
            if animation.is_finished(elapsed) {
                return;
            }
            sleep(Duration::from_millis(u64::from(animation.step_ms()))).await;
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn start_count(
    text: RwSignal<String>,
    _generation: RwSignal<u64>,
    _run: u64,
    target: CounterTarget,
    _duration_ms: u32,
    _delay_ms: u32,
) {
    text.set(target.format(target.value));
}
