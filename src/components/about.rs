//! About section: headline copy plus the animated statistics row.

use leptos::prelude::*;

use crate::components::animated_value::AnimatedValue;
use crate::components::notification_stack::show_tooltip;
use crate::components::reveal::Reveal;
use crate::consts::STATS_COUNT_MS;
use crate::content::Stat;
use crate::state::notifications::NotificationState;
use crate::util::counter::stagger_delay_ms;

#[component]
pub fn About(stats: Vec<Stat>) -> impl IntoView {
    let revealed = RwSignal::new(false);

    let items = stats
        .into_iter()
        .enumerate()
        .map(|(index, stat)| view! { <StatItem stat delay_ms=stagger_delay_ms(index) trigger=revealed/> })
        .collect_view();

    view! {
        <section id="about" class="about-section">
            <Reveal class="about-content">
                <h2 class="section-title">"Who we are"</h2>
                <p class="section-lead">
                    "A product studio that designs, builds and grows digital platforms for ambitious companies."
                </p>
            </Reveal>
            <Reveal class="about-stats" revealed>
                <div class="stats-row">{items}</div>
            </Reveal>
        </section>
    }
}

/// One statistic. Clicking it (or Enter/Space while focused) shows its detail.
#[component]
fn StatItem(stat: Stat, delay_ms: u32, trigger: RwSignal<bool>) -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let Stat { value, label, detail } = stat;
    let detail = StoredValue::new(detail);

    let show_detail = move || show_tooltip(notifications, detail.get_value());

    view! {
        <div
            class="stat-item"
            role="button"
            tabindex="0"
            on:click=move |_ev| show_detail()
            on:keydown=move |ev| {
                let key = ev.key();
                if key == "Enter" || key == " " {
                    ev.prevent_default();
                    show_detail();
                }
            }
        >
            <AnimatedValue value trigger duration_ms=STATS_COUNT_MS delay_ms class="stat-number"/>
            <span class="stat-label">{label}</span>
        </div>
    }
}
