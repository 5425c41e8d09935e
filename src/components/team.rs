use leptos::prelude::*;

use crate::components::carousel_widget::CarouselWidget;
use crate::content::{Deck, TeamMember};
use crate::state::carousel_view::CarouselView;

#[component]
pub fn Team(deck: Deck<TeamMember>) -> impl IntoView {
    let Deck { carousel, slides } = deck;
    let slide_count = slides.len();

    view! {
        <section id="team" class="team-section">
            <h2 class="section-title">"Our team"</h2>
            <CarouselWidget label="Team" class="team__carousel" slide_count config=carousel>
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(index, member)| view! { <TeamCard index member/> })
                    .collect_view()}
            </CarouselWidget>
        </section>
    }
}

#[component]
fn TeamCard(index: usize, member: TeamMember) -> impl IntoView {
    let view = expect_context::<RwSignal<CarouselView>>();
    let initials: String = member.name.split_whitespace().filter_map(|w| w.chars().next()).collect();

    view! {
        <article class="team-card" class:active=move || view.get().is_active(index)>
            <div class="team-card__avatar" aria-hidden="true">{initials}</div>
            <h3 class="team-card__name">{member.name}</h3>
            <span class="team-card__role">{member.role}</span>
            <p class="team-card__bio">{member.bio}</p>
        </article>
    }
}
