//! Smooth scrolling to anchored elements. Requires a browser environment;
//! SSR and tests no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Smoothly scroll the element with `element_id` into view, if it exists.
///
/// Returns `true` when an element was found and scrolled.
pub fn scroll_into_view_smooth(element_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
        else {
            return false;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
        false
    }
}

/// Scroll to `element_id` after the next paint, once the section block has
/// been unhidden. No-op off-browser.
pub fn scroll_into_view_next_frame(element_id: &'static str) {
    #[cfg(feature = "hydrate")]
    {
        leptos::prelude::request_animation_frame(move || {
            scroll_into_view_smooth(element_id);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = element_id;
    }
}
