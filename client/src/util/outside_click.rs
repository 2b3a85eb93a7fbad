//! Scoped outside-pointer subscription for dismissible panels.
//!
//! The listener is owned by the calling component: it is registered when the
//! component mounts and removed in `on_cleanup`, so two panels on the same
//! page never share or leak a handler.

use leptos::html::{Button, Div};
use leptos::prelude::*;

use crate::state::panel::PointerTarget;

/// Report every window `pointerdown` classified against `panel` and `toggle`.
///
/// Must be called from a component body; the subscription lives as long as
/// that component's reactive owner. No-op outside the browser.
pub fn on_pointerdown_classified(
    panel: NodeRef<Div>,
    toggle: NodeRef<Button>,
    handler: impl Fn(PointerTarget) + 'static,
) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::pointerdown, move |event| {
            let Some(node) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            let in_panel = panel
                .get_untracked()
                .is_some_and(|el| el.contains(Some(&node)));
            let on_toggle = toggle
                .get_untracked()
                .is_some_and(|el| el.contains(Some(&node)));
            handler(PointerTarget::classify(in_panel, on_toggle));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (panel, toggle, handler);
    }
}
