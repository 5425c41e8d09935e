//! Fixed top navigation with scroll-aware styling and a mobile menu.

use leptos::prelude::*;

use crate::content::NavSection;
use crate::state::ui::UiState;
use crate::util::viewport::scroll_to_section;

#[component]
pub fn Navbar(brand: String, sections: Vec<NavSection>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links = sections
        .into_iter()
        .map(|section| {
            let NavSection { id, label } = section;
            let href = format!("#{id}");
            let active_id = id.clone();
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:active=move || ui.get().is_active_section(&active_id)
                        href=href
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(&id);
                            ui.update(|u| u.menu_open = false);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:scrolled=move || ui.get().navbar_scrolled>
            <a
                class="navbar__brand"
                href="#home"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section("home");
                }
            >
                {brand}
            </a>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || if ui.get().menu_open { "true" } else { "false" }
                on:click=move |_ev| ui.update(|u| u.menu_open = !u.menu_open)
            >
                <span class="navbar__toggle-bar"></span>
            </button>
            <ul class="navbar__links" class:show=move || ui.get().menu_open>
                {links}
            </ul>
        </nav>
    }
}
