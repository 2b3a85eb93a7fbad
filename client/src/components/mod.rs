//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the documentation viewer pieces and the star-count
//! widget. Viewer components share one `RwSignal<DocsViewerState>` passed in
//! by the docs page; the widget owns its own state per mount.

pub mod doc_section;
pub mod docs_sidebar;
pub mod github_stars;
pub mod site_header;
