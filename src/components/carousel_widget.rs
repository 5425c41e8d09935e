//! Generic slide carousel bound to a `carousel::Carousel` engine.
//!
//! ARCHITECTURE
//! ============
//! The engine is created once the region mounts in the browser and lives in
//! an `Rc<RefCell<_>>` shared by the event handlers. Autoplay ticks reach it
//! through an `IntervalScheduler` holding only a weak reference, so the
//! engine (and with it every live interval) is dropped with the component.
//! Rendering never reads the engine: every engine call is followed by a
//! refresh of the `CarouselView` signal, which slides read from context.

use carousel::{CarouselConfig, Command, SuspendReason};
use leptos::prelude::*;

use crate::state::carousel_view::CarouselView;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::{Rc, Weak};

#[cfg(feature = "hydrate")]
use carousel::{Carousel, FocusTracker, SwipeTracker, TimerId};

#[cfg(feature = "hydrate")]
use crate::util::interval_scheduler::IntervalScheduler;

#[cfg(feature = "hydrate")]
type Engine = Carousel<usize, IntervalScheduler>;
#[cfg(feature = "hydrate")]
type EngineSlot = Rc<RefCell<Option<Engine>>>;

/// Something the page asks the engine to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Command(Command),
    Suspend(SuspendReason),
    Resume(SuspendReason),
}

/// Cloneable access to one widget's engine and view.
#[derive(Clone)]
struct Handle {
    view: RwSignal<CarouselView>,
    #[cfg(feature = "hydrate")]
    engine: EngineSlot,
}

impl Handle {
    /// Run `action` against the engine, then refresh the view.
    ///
    /// A no-op before the engine exists and during server rendering.
    fn send(&self, action: Action) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(mut slot) = self.engine.try_borrow_mut() else {
                leptos::logging::warn!("carousel busy; dropping {action:?}");
                return;
            };
            let Some(engine) = slot.as_mut() else {
                return;
            };
            match action {
                Action::Command(command) => {
                    engine.apply(command);
                }
                Action::Suspend(reason) => engine.suspend_for(reason),
                Action::Resume(reason) => engine.resume_for(reason),
            }
            self.view.update(|v| v.sync_from(engine));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _action = action;
        }
    }
}

/// Build the engine for a mounted widget. Autoplay is left off on phones
/// and held from the start when the region is offscreen.
#[cfg(feature = "hydrate")]
fn mount_engine(
    slot: &EngineSlot,
    view: RwSignal<CarouselView>,
    slide_count: usize,
    config: CarouselConfig,
    visible: bool,
) {
    let config = if crate::util::viewport::is_mobile_viewport() {
        config.with_autoplay(false)
    } else {
        config
    };

    let weak: Weak<RefCell<Option<Engine>>> = Rc::downgrade(slot);
    let scheduler = IntervalScheduler::new(move |id: TimerId| {
        let Some(slot) = weak.upgrade() else {
            return;
        };
        let Ok(mut slot) = slot.try_borrow_mut() else {
            return;
        };
        if let Some(engine) = slot.as_mut() {
            engine.on_timer(id);
            view.update(|v| v.sync_from(engine));
        }
    });

    let mut engine = Carousel::new((0..slide_count).collect(), config, scheduler);
    engine.on_change(move |change| view.update(|v| v.apply_change(change)));
    if !visible {
        engine.suspend_for(SuspendReason::Offscreen);
    }
    view.update(|v| v.sync_from(&engine));
    *slot.borrow_mut() = Some(engine);
}

/// Accessible slide carousel with arrows, dots, autoplay toggle and a
/// progress bar.
///
/// Children are the slides, in order. Each slide can read the widget's
/// `RwSignal<CarouselView>` from context to style itself as active.
#[component]
pub fn CarouselWidget(
    /// Accessible name of the carousel region.
    label: &'static str,
    /// Extra class on the root element.
    #[prop(optional)]
    class: &'static str,
    slide_count: usize,
    config: CarouselConfig,
    children: Children,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let view = RwSignal::new(CarouselView::initial(slide_count, &config));
    provide_context(view);

    let region_ref = NodeRef::<leptos::html::Section>::new();

    let handle = Handle {
        view,
        #[cfg(feature = "hydrate")]
        engine: Rc::new(RefCell::new(None)),
    };

    #[cfg(feature = "hydrate")]
    {
        let slot = Rc::clone(&handle.engine);
        Effect::new(move || {
            if region_ref.get().is_none() || slot.borrow().is_some() {
                return;
            }
            let visible = region_visible(region_ref);
            mount_engine(&slot, view, slide_count, config.clone(), visible);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _config = config;
    }

    // Hold autoplay while the region is scrolled out of view.
    {
        let handle = handle.clone();
        Effect::new(move |was_visible: Option<bool>| {
            ui.track();
            let visible = region_visible(region_ref);
            if was_visible != Some(visible) {
                handle.send(if visible {
                    Action::Resume(SuspendReason::Offscreen)
                } else {
                    Action::Suspend(SuspendReason::Offscreen)
                });
            }
            visible
        });
    }

    #[cfg(feature = "hydrate")]
    let focus = Rc::new(RefCell::new(FocusTracker::default()));

    let on_key_down = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let focus = Rc::clone(&focus);
            move |ev: leptos::ev::KeyboardEvent| {
                focus.borrow_mut().key_down();
                let on_region = ev.target().is_some_and(|t| Some(t) == ev.current_target());
                if let Some(command) = Command::from_region_key(&ev.key(), on_region) {
                    ev.prevent_default();
                    handle.send(Action::Command(command));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let focus = Rc::clone(&focus);
            move |_ev: leptos::ev::PointerEvent| focus.borrow_mut().pointer_down()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_mouse_enter = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| handle.send(Action::Suspend(SuspendReason::Hover))
    };
    let on_mouse_leave = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| handle.send(Action::Resume(SuspendReason::Hover))
    };

    // Only keyboard focus pauses; focus that follows a click is skipped.
    let on_focus_in = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let focus = Rc::clone(&focus);
            move |_ev: leptos::ev::FocusEvent| {
                let from_keyboard = focus.borrow_mut().focus_in();
                if from_keyboard {
                    handle.send(Action::Suspend(SuspendReason::Focus));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::FocusEvent| {}
        }
    };
    let on_focus_out = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let focus = Rc::clone(&focus);
            move |ev: leptos::ev::FocusEvent| {
                if !focus_stays_inside(&ev) {
                    focus.borrow_mut().reset();
                }
                handle.send(Action::Resume(SuspendReason::Focus));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::FocusEvent| {}
        }
    };

    #[cfg(feature = "hydrate")]
    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let swipe = Rc::clone(&swipe);
            move |ev: leptos::ev::TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    swipe.borrow_mut().touch_start(x);
                    handle.send(Action::Suspend(SuspendReason::Touch));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "hydrate")]
        {
            let swipe = Rc::clone(&swipe);
            move |ev: leptos::ev::TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    swipe.borrow_mut().touch_move(x);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let swipe = Rc::clone(&swipe);
            move |_ev: leptos::ev::TouchEvent| {
                let direction = swipe.borrow_mut().touch_end();
                if let Some(direction) = direction {
                    handle.send(Action::Command(direction.command()));
                }
                handle.send(Action::Resume(SuspendReason::Touch));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_cancel = {
        #[cfg(feature = "hydrate")]
        {
            let handle = handle.clone();
            let swipe = Rc::clone(&swipe);
            move |_ev: leptos::ev::TouchEvent| {
                swipe.borrow_mut().cancel();
                handle.send(Action::Resume(SuspendReason::Touch));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_previous = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| handle.send(Action::Command(Command::Previous))
    };
    let on_next = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| handle.send(Action::Command(Command::Next))
    };
    let on_toggle = {
        let handle = handle.clone();
        move |_ev: leptos::ev::MouseEvent| handle.send(Action::Command(Command::ToggleAutoplay))
    };

    let dots = (0..slide_count)
        .map(|index| {
            let handle = handle.clone();
            view! {
                <button
                    class="carousel__dot"
                    class:active=move || view.get().is_active(index)
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_ev| handle.send(Action::Command(Command::GoTo(index)))
                ></button>
            }
        })
        .collect_view();

    let root_class = if class.is_empty() { "carousel".to_owned() } else { format!("carousel {class}") };

    view! {
        <section
            node_ref=region_ref
            class=root_class
            aria-roledescription="carousel"
            aria-label=label
            tabindex="0"
            on:keydown=on_key_down
            on:pointerdown=on_pointer_down
            on:focusin=on_focus_in
            on:focusout=on_focus_out
        >
            <div
                class="carousel__viewport"
                on:mouseenter=on_mouse_enter
                on:mouseleave=on_mouse_leave
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_cancel
            >
                <div class="carousel__track" style=move || view.get().track_style()>
                    {children()}
                </div>
            </div>
            <div class="carousel__controls">
                <button
                    class="carousel__arrow carousel__arrow--prev"
                    aria-label="Previous slide"
                    disabled=move || !view.get().can_previous
                    on:click=on_previous
                >
                    "\u{2039}"
                </button>
                <div class="carousel__dots">{dots}</div>
                <button
                    class="carousel__arrow carousel__arrow--next"
                    aria-label="Next slide"
                    disabled=move || !view.get().can_next
                    on:click=on_next
                >
                    "\u{203a}"
                </button>
                <button
                    class="carousel__autoplay"
                    class:paused=move || !view.get().autoplay
                    aria-label=move || if view.get().autoplay { "Pause autoplay" } else { "Start autoplay" }
                    on:click=on_toggle
                >
                    {move || if view.get().autoplay { "\u{23f8}" } else { "\u{25b6}" }}
                </button>
            </div>
            <div class="carousel__progress">
                <div class="carousel__progress-bar" style=move || view.get().progress_style()></div>
            </div>
        </section>
    }
}

/// Whether the carousel region overlaps the viewport. Unmounted regions
/// count as visible so autoplay is not held before the first measurement.
fn region_visible(region_ref: NodeRef<leptos::html::Section>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = region_ref.get() else {
            return true;
        };
        let rect = el.get_bounding_client_rect();
        crate::util::scroll::is_in_view(rect.top(), rect.bottom(), crate::util::viewport::viewport_height())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _region_ref = region_ref;
        true
    }
}

#[cfg(feature = "hydrate")]
fn first_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| f64::from(t.client_x()))
}

/// Whether a `focusout` moves focus to another element of the same region.
#[cfg(feature = "hydrate")]
fn focus_stays_inside(ev: &leptos::ev::FocusEvent) -> bool {
    use wasm_bindgen::JsCast;

    let Some(region) = ev.current_target() else {
        return false;
    };
    let Some(next) = ev.related_target() else {
        return false;
    };
    match (region.dyn_ref::<web_sys::Node>(), next.dyn_ref::<web_sys::Node>()) {
        (Some(region), Some(next)) => region.contains(Some(next)),
        _ => false,
    }
}
