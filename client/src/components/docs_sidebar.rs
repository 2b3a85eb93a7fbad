//! Section navigation list, rendered for both the desktop column and the
//! mobile slide-in panel.

use leptos::prelude::*;

use crate::state::docs::{DocsViewerState, SECTIONS};

/// Sidebar list of catalog sections. Clicking an entry selects it, which also
/// closes the mobile panel.
#[component]
pub fn DocsSidebarNav(viewer: RwSignal<DocsViewerState>) -> impl IntoView {
    view! {
        <nav class="docs-sidebar__nav">
            <ul class="docs-sidebar__list">
                {SECTIONS
                    .iter()
                    .map(|section| {
                        let id = section.id;
                        let active = move || viewer.with(|v| v.is_active(id));
                        view! {
                            <li>
                                <button
                                    class="docs-sidebar__link"
                                    class:docs-sidebar__link--active=active
                                    on:click=move |_| viewer.update(|v| v.select_section(id))
                                >
                                    <span class="docs-sidebar__icon" aria-hidden="true">
                                        {section.icon.glyph()}
                                    </span>
                                    {section.title}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
