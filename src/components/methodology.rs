use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::MethodStep;

#[component]
pub fn Methodology(steps: Vec<MethodStep>) -> impl IntoView {
    let items = steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            view! {
                <Reveal class="methodology-step">
                    <span class="methodology-step__number">{format!("{:02}", index + 1)}</span>
                    <h3 class="methodology-step__title">{step.title}</h3>
                    <p class="methodology-step__body">{step.description}</p>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="methodology" class="methodology-section">
            <Reveal>
                <h2 class="section-title">"How we work"</h2>
            </Reveal>
            <div class="methodology-steps">{items}</div>
        </section>
    }
}
