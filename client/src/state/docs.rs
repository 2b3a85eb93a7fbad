//! Documentation viewer state: the section catalog, the active section, and
//! the mobile sidebar flag.
//!
//! DESIGN
//! ======
//! The catalog is static. `active_section_id` and `sidebar_open` are two
//! independent flags; they only change through `initialize`,
//! `select_section`, `toggle_sidebar`, and `dismiss_sidebar`.
//!
//! TRADE-OFFS
//! ==========
//! Section deep links are advisory. An unknown `?section=` value falls back
//! to the default section instead of being reported, and `select_section`
//! trusts its caller because ids are only offered from the catalog.

#[cfg(test)]
#[path = "docs_test.rs"]
mod docs_test;

use crate::state::panel::PointerTarget;

/// Symbolic glyph shown next to a section title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionIcon {
    BookOpen,
    Package,
    Terminal,
    Zap,
    Settings,
    Code,
    Shield,
    Database,
}

impl SectionIcon {
    /// Text glyph used when rendering the sidebar.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::BookOpen => "📖",
            Self::Package => "📦",
            Self::Terminal => "⌨",
            Self::Zap => "⚡",
            Self::Settings => "⚙",
            Self::Code => "</>",
            Self::Shield => "🛡",
            Self::Database => "🗄",
        }
    }
}

/// One selectable unit of documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: SectionIcon,
}

/// Fixed section catalog, in sidebar order. The first entry is the default.
pub const SECTIONS: &[Section] = &[
    Section { id: "introduction", title: "Introduction", icon: SectionIcon::BookOpen },
    Section { id: "requirements", title: "Requirements", icon: SectionIcon::Package },
    Section { id: "installation", title: "Installation", icon: SectionIcon::Terminal },
    Section { id: "quickstart", title: "Quick Start", icon: SectionIcon::Zap },
    Section { id: "configuration", title: "Configuration", icon: SectionIcon::Settings },
    Section { id: "project-manifests", title: "Project Manifests", icon: SectionIcon::Code },
    Section { id: "environment", title: "Environment", icon: SectionIcon::Shield },
    Section { id: "databases", title: "Databases", icon: SectionIcon::Database },
    Section { id: "commands", title: "Commands", icon: SectionIcon::Terminal },
    Section { id: "aider", title: "Aider AI Assistant", icon: SectionIcon::Zap },
    Section { id: "practices", title: "Best Practices", icon: SectionIcon::BookOpen },
];

/// Section shown when no valid `?section=` is requested.
pub const DEFAULT_SECTION_ID: &str = SECTIONS[0].id;

/// Query parameter carrying a requested section id.
pub const SECTION_QUERY_PARAM: &str = "section";

/// Look up a catalog entry by id.
pub fn find_section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.id == id)
}

/// Per-visit state of the documentation viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsViewerState {
    pub active_section_id: String,
    pub sidebar_open: bool,
}

impl Default for DocsViewerState {
    fn default() -> Self {
        Self {
            active_section_id: DEFAULT_SECTION_ID.to_owned(),
            sidebar_open: false,
        }
    }
}

impl DocsViewerState {
    /// Apply a requested section from the URL.
    ///
    /// Returns the matched section so the caller can scroll it into view.
    /// A missing or unknown id activates the default section and returns `None`.
    pub fn initialize(&mut self, requested: Option<&str>) -> Option<&'static Section> {
        match requested.and_then(find_section) {
            Some(section) => {
                self.active_section_id = section.id.to_owned();
                Some(section)
            }
            None => {
                self.active_section_id = DEFAULT_SECTION_ID.to_owned();
                None
            }
        }
    }

    /// Make `id` the active section and close the sidebar.
    pub fn select_section(&mut self, id: impl Into<String>) {
        self.active_section_id = id.into();
        self.sidebar_open = false;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Close the sidebar for a pointer-down outside it.
    ///
    /// Returns `true` when the sidebar was open and is now closed.
    pub fn dismiss_sidebar(&mut self, target: PointerTarget) -> bool {
        if self.sidebar_open && target.dismisses() {
            self.sidebar_open = false;
            return true;
        }
        false
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id == id
    }
}
