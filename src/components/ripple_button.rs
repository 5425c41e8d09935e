//! Button with a material-style click ripple.

use leptos::prelude::*;

use crate::util::ripple::Ripple;

#[component]
pub fn RippleButton(
    #[prop(optional)] class: &'static str,
    /// `button` unless set, e.g. `submit` inside a form.
    #[prop(optional)]
    kind: Option<&'static str>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(optional)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ripples = RwSignal::new(Vec::<(u64, Ripple)>::new());
    let next_id = StoredValue::new(0_u64);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        spawn_ripple(&ev, ripples, next_id);
        if let Some(cb) = on_press {
            cb.run(());
        }
    };

    let base = if class.is_empty() { "btn ripple-host".to_owned() } else { format!("btn ripple-host {class}") };

    view! {
        <button type=kind.unwrap_or("button") class=base disabled=move || disabled.get() on:click=on_click>
            {children()}
            <For
                each=move || ripples.get()
                key=|(id, _)| *id
                children=|(_, ripple): (u64, Ripple)| view! { <span class="ripple" style=ripple.style()></span> }
            />
        </button>
    }
}

/// Add a ripple at the click point and remove it once its animation ends.
fn spawn_ripple(ev: &leptos::ev::MouseEvent, ripples: RwSignal<Vec<(u64, Ripple)>>, next_id: StoredValue<u64>) {
    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;
        use wasm_bindgen::JsCast;

        use crate::consts::RIPPLE_TTL_MS;
        use crate::util::ripple::Rect;

        let Some(target) = ev.current_target() else {
            return;
        };
        let Ok(target) = target.dyn_into::<web_sys::Element>() else {
            return;
        };
        let bounds = target.get_bounding_client_rect();
        let rect = Rect { left: bounds.left(), top: bounds.top(), width: bounds.width(), height: bounds.height() };
        let ripple = Ripple::from_click(rect, f64::from(ev.client_x()), f64::from(ev.client_y()));

        let id = next_id.get_value();
        next_id.set_value(id + 1);
        ripples.update(|r| r.push((id, ripple)));
        Timeout::new(RIPPLE_TTL_MS, move || {
            ripples.try_update(|r| r.retain(|(rid, _)| *rid != id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = (ev, ripples, next_id);
    }
}
