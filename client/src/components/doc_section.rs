//! One documentation content block.
//!
//! Every catalog section is rendered, inactive ones hidden, so `#id` anchors
//! resolve to a real position for deep links.

#[cfg(test)]
#[path = "doc_section_test.rs"]
mod doc_section_test;

use leptos::prelude::*;

use crate::state::docs::{DocsViewerState, Section};
use crate::util::markdown::render_markdown_html;

/// Markdown body for a catalog section id.
pub fn section_markdown(id: &str) -> Option<&'static str> {
    let body = match id {
        "introduction" => include_str!("../../content/introduction.md"),
        "requirements" => include_str!("../../content/requirements.md"),
        "installation" => include_str!("../../content/installation.md"),
        "quickstart" => include_str!("../../content/quickstart.md"),
        "configuration" => include_str!("../../content/configuration.md"),
        "project-manifests" => include_str!("../../content/project-manifests.md"),
        "environment" => include_str!("../../content/environment.md"),
        "databases" => include_str!("../../content/databases.md"),
        "commands" => include_str!("../../content/commands.md"),
        "aider" => include_str!("../../content/aider.md"),
        "practices" => include_str!("../../content/practices.md"),
        _ => return None,
    };
    Some(body)
}

const SECTION_CLASS: &str = "docs-section";
const SECTION_HIDDEN_CLASS: &str = "docs-section docs-section--hidden";

/// Class list for a section block: hidden unless `id` is the active section.
pub(crate) fn section_class(viewer: &DocsViewerState, id: &str) -> &'static str {
    if viewer.is_active(id) { SECTION_CLASS } else { SECTION_HIDDEN_CLASS }
}

/// Section block, visible only while it is the active section.
#[component]
pub fn DocSection(section: &'static Section, viewer: RwSignal<DocsViewerState>) -> impl IntoView {
    let body = section_markdown(section.id)
        .map(render_markdown_html)
        .unwrap_or_default();
    let class = move || viewer.with(|v| section_class(v, section.id));

    view! {
        <section id=section.id class=class>
            <h2 class="docs-section__title">{section.title}</h2>
            <div class="docs-section__body docs-markdown" inner_html=body></div>
        </section>
    }
}
