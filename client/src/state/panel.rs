//! Dismissible slide-in panel state for narrow layouts.
//!
//! DESIGN
//! ======
//! Each page that shows a mobile panel owns its own `PanelState`; nothing is
//! shared between panels. The docs viewer keeps its flag inside
//! `DocsViewerState` and reuses `PointerTarget` for dismissal.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

/// Where a pointer-down landed relative to a dismissible panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the panel.
    Panel,
    /// On the button that toggles the panel.
    ToggleControl,
    /// Anywhere else on the page.
    Outside,
}

impl PointerTarget {
    /// Classify a pointer-down from DOM containment checks.
    pub fn classify(in_panel: bool, on_toggle: bool) -> Self {
        if in_panel {
            Self::Panel
        } else if on_toggle {
            Self::ToggleControl
        } else {
            Self::Outside
        }
    }

    /// Only a pointer-down outside both the panel and its toggle dismisses.
    pub fn dismisses(self) -> bool {
        self == Self::Outside
    }
}

/// Open/closed flag of one mobile panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub open: bool,
}

impl PanelState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the panel for a pointer-down outside it.
    ///
    /// Returns `true` when the panel was open and is now closed.
    pub fn dismiss(&mut self, target: PointerTarget) -> bool {
        if self.open && target.dismisses() {
            self.open = false;
            return true;
        }
        false
    }
}
