//! Documentation page: section sidebar, mobile slide-in panel, and content.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `DocsViewerState` for the visit. The `?section=` query
//! seeds it before the first render (so SSR shows the requested section) and
//! re-applies on client-side navigation. Sidebar components and content blocks
//! read and write the same signal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The mobile panel closes on a pointer-down outside it. That listener is a
//! scoped subscription registered by this page and released when it unmounts.

use leptos::html::{Button, Div};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::doc_section::DocSection;
use crate::components::docs_sidebar::DocsSidebarNav;
use crate::components::site_header::SiteHeader;
use crate::state::docs::{DocsViewerState, SECTION_QUERY_PARAM, SECTIONS};
use crate::util::outside_click::on_pointerdown_classified;
use crate::util::scroll::scroll_into_view_next_frame;

/// Documentation viewer. Exactly one section block is visible at a time.
#[component]
pub fn DocsPage() -> impl IntoView {
    let query = use_query_map();
    let requested = move || query.with(|q| q.get(SECTION_QUERY_PARAM));

    let mut initial = DocsViewerState::default();
    initial.initialize(query.with_untracked(|q| q.get(SECTION_QUERY_PARAM)).as_deref());
    let viewer = RwSignal::new(initial);

    let sidebar_ref = NodeRef::<Div>::new();
    let toggle_ref = NodeRef::<Button>::new();

    // Re-apply the requested section whenever the query string changes.
    Effect::new(move || {
        let section_id = requested();
        if let Some(section) = viewer
            .try_update(|v| v.initialize(section_id.as_deref()))
            .flatten()
        {
            scroll_into_view_next_frame(section.id);
        }
    });

    on_pointerdown_classified(sidebar_ref, toggle_ref, move |target| {
        viewer.maybe_update(|v| v.dismiss_sidebar(target));
    });

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        viewer.update(DocsViewerState::toggle_sidebar);
    };

    view! {
        <div class="docs-page">
            <SiteHeader>
                <button
                    class="docs-page__menu-toggle"
                    node_ref=toggle_ref
                    on:click=on_toggle
                    aria-label="Toggle menu"
                    aria-expanded=move || viewer.with(|v| v.sidebar_open).to_string()
                >
                    <span class="docs-page__menu-bar"></span>
                    <span class="docs-page__menu-bar"></span>
                    <span class="docs-page__menu-bar"></span>
                </button>
            </SiteHeader>

            <div class="docs-page__layout">
                <div
                    class="docs-sidebar docs-sidebar--mobile"
                    class:docs-sidebar--open=move || viewer.with(|v| v.sidebar_open)
                    node_ref=sidebar_ref
                >
                    <DocsSidebarNav viewer=viewer/>
                </div>

                <aside class="docs-sidebar docs-sidebar--desktop">
                    <DocsSidebarNav viewer=viewer/>
                </aside>

                <main class="docs-page__content">
                    {SECTIONS
                        .iter()
                        .map(|section| view! { <DocSection section=section viewer=viewer/> })
                        .collect_view()}
                </main>
            </div>
        </div>
    }
}
