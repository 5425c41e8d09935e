use leptos::prelude::*;

use crate::components::carousel_widget::CarouselWidget;
use crate::components::ripple_button::RippleButton;
use crate::content::{Deck, HeroSlide};
use crate::state::carousel_view::CarouselView;
use crate::state::ui::UiState;
use crate::util::viewport::scroll_to_section;

/// Full-height opening section: rotating headlines over a parallax background.
#[component]
pub fn Hero(deck: Deck<HeroSlide>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let Deck { carousel, slides } = deck;
    let slide_count = slides.len();

    let background = move || format!("background-position: center {:.1}px;", ui.get().parallax_offset_px);

    view! {
        <section id="home" class="hero" style=background>
            <CarouselWidget label="Highlights" class="hero__carousel" slide_count config=carousel>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, slide)| view! { <HeroCard index slide/> })
                    .collect_view()}
            </CarouselWidget>
        </section>
    }
}

#[component]
fn HeroCard(index: usize, slide: HeroSlide) -> impl IntoView {
    let view = expect_context::<RwSignal<CarouselView>>();
    let HeroSlide { title, subtitle, cta_label, cta_target } = slide;
    let on_press = Callback::new(move |()| scroll_to_section(&cta_target));

    view! {
        <article class="hero__slide" class:active=move || view.get().is_active(index)>
            <h1 class="hero__title">{title}</h1>
            <p class="hero__subtitle">{subtitle}</p>
            <RippleButton class="btn-primary hero__cta" on_press>
                {cta_label}
            </RippleButton>
        </article>
    }
}
