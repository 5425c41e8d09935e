//! Root application component and page-wide context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::about::About;
use crate::components::case_studies::CaseStudies;
use crate::components::contact_form::ContactSection;
use crate::components::floating_buttons::FloatingButtons;
use crate::components::hero::Hero;
use crate::components::methodology::Methodology;
use crate::components::navbar::Navbar;
use crate::components::notification_stack::NotificationStack;
use crate::components::team::Team;
use crate::content::SiteContent;
use crate::state::notifications::NotificationState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and notification state, wires the window scroll
/// listener, and lays out every page section in order.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = SiteContent::bundled();
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(ui);
    provide_context(notifications);

    #[cfg(feature = "hydrate")]
    install_scroll_tracking(ui, site.section_ids());

    let SiteContent { brand, sections, hero, stats, methodology, case_studies, team, countries } = site;

    view! {
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>
        <Title text=brand.clone()/>

        <Navbar brand sections/>
        <main>
            <Hero deck=hero/>
            <About stats/>
            <Methodology steps=methodology/>
            <CaseStudies deck=case_studies/>
            <Team deck=team/>
            <ContactSection countries/>
        </main>
        <FloatingButtons/>
        <NotificationStack/>
    }
}

/// Keep `UiState` in step with the window: viewport class on mount and on
/// resize, scroll-derived fields on a throttled scroll listener with a
/// trailing update so the final position is never dropped.
#[cfg(feature = "hydrate")]
fn install_scroll_tracking(ui: RwSignal<UiState>, section_ids: Vec<String>) {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use crate::consts::SCROLL_THROTTLE_MS;
    use crate::util::scroll::Throttle;
    use crate::util::viewport::{is_mobile_viewport, now_ms, prefers_reduced_motion, scroll_y, section_bounds};

    let refresh = Rc::new(move || {
        let sections = section_bounds(&section_ids);
        let y = scroll_y();
        ui.update(|u| u.apply_scroll(y, &sections));
    });

    Effect::new({
        let refresh = Rc::clone(&refresh);
        move || {
            ui.update_untracked(|u| u.apply_viewport(is_mobile_viewport(), prefers_reduced_motion()));
            refresh();
        }
    });

    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
    let trailing_pending = Rc::new(Cell::new(false));
    window_event_listener(leptos::ev::scroll, move |_ev| {
        if throttle.borrow_mut().ready(now_ms()) {
            refresh();
            return;
        }
        if trailing_pending.replace(true) {
            return;
        }
        let refresh = Rc::clone(&refresh);
        let pending = Rc::clone(&trailing_pending);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let delay = SCROLL_THROTTLE_MS as u32;
        Timeout::new(delay, move || {
            pending.set(false);
            refresh();
        })
        .forget();
    });

    window_event_listener(leptos::ev::resize, move |_ev| {
        ui.update(|u| u.apply_viewport(is_mobile_viewport(), prefers_reduced_motion()));
    });
}
