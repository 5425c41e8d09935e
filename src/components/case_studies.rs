use leptos::prelude::*;

use crate::components::animated_value::AnimatedValue;
use crate::components::carousel_widget::CarouselWidget;
use crate::consts::METRIC_COUNT_MS;
use crate::content::{CaseStudy, Deck};
use crate::state::carousel_view::CarouselView;

/// Client success stories. Metrics count up each time their card becomes
/// the active slide.
#[component]
pub fn CaseStudies(deck: Deck<CaseStudy>) -> impl IntoView {
    let Deck { carousel, slides } = deck;
    let slide_count = slides.len();

    view! {
        <section id="cases" class="cases-section">
            <h2 class="section-title">"Case studies"</h2>
            <CarouselWidget label="Case studies" class="cases__carousel" slide_count config=carousel>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, study)| view! { <CaseCard index study/> })
                    .collect_view()}
            </CarouselWidget>
        </section>
    }
}

#[component]
fn CaseCard(index: usize, study: CaseStudy) -> impl IntoView {
    let view = expect_context::<RwSignal<CarouselView>>();
    let active = Signal::derive(move || view.get().is_active(index));
    let CaseStudy { client, industry, summary, metrics } = study;

    let metrics = metrics
        .into_iter()
        .map(|metric| {
            view! {
                <div class="metric">
                    <AnimatedValue value=metric.value trigger=active duration_ms=METRIC_COUNT_MS class="metric-value"/>
                    <span class="metric-label">{metric.label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="minimal-card" class:active=move || active.get()>
            <span class="minimal-card__industry">{industry}</span>
            <h3 class="minimal-card__client">{client}</h3>
            <p class="minimal-card__summary">{summary}</p>
            <div class="minimal-card__metrics">{metrics}</div>
        </article>
    }
}
