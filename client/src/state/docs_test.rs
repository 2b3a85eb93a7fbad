use super::*;
use crate::state::panel::PointerTarget;

fn active_count(state: &DocsViewerState) -> usize {
    SECTIONS.iter().filter(|s| state.is_active(s.id)).count()
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_ids_are_unique() {
    for (i, a) in SECTIONS.iter().enumerate() {
        for (j, b) in SECTIONS.iter().enumerate() {
            if i != j {
                assert_ne!(a.id, b.id);
            }
        }
    }
}

#[test]
fn default_section_is_first_catalog_entry() {
    assert_eq!(DEFAULT_SECTION_ID, "introduction");
    assert_eq!(SECTIONS[0].id, DEFAULT_SECTION_ID);
}

#[test]
fn find_section_matches_exact_id_only() {
    assert_eq!(find_section("databases").map(|s| s.title), Some("Databases"));
    assert!(find_section("Databases").is_none());
    assert!(find_section("").is_none());
}

#[test]
fn icon_glyphs_are_non_empty() {
    for section in SECTIONS {
        assert!(!section.icon.glyph().is_empty());
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn viewer_state_default_is_introduction_with_closed_sidebar() {
    let state = DocsViewerState::default();
    assert_eq!(state.active_section_id, "introduction");
    assert!(!state.sidebar_open);
    assert_eq!(active_count(&state), 1);
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_each_catalog_id_activates_it() {
    for section in SECTIONS {
        let mut state = DocsViewerState::default();
        let matched = state.initialize(Some(section.id));
        assert_eq!(matched, Some(section));
        assert_eq!(state.active_section_id, section.id);
        assert_eq!(active_count(&state), 1);
        assert!(state.is_active(section.id));
    }
}

#[test]
fn initialize_with_unknown_id_falls_back_to_default() {
    let mut state = DocsViewerState::default();
    assert!(state.initialize(Some("not-a-section")).is_none());
    assert_eq!(state.active_section_id, DEFAULT_SECTION_ID);

    // Idempotent.
    assert!(state.initialize(Some("not-a-section")).is_none());
    assert_eq!(state.active_section_id, DEFAULT_SECTION_ID);
    assert_eq!(active_count(&state), 1);
}

#[test]
fn initialize_without_request_keeps_default() {
    let mut state = DocsViewerState::default();
    assert!(state.initialize(None).is_none());
    assert_eq!(state.active_section_id, DEFAULT_SECTION_ID);
}

#[test]
fn initialize_unknown_after_selection_restores_default() {
    let mut state = DocsViewerState::default();
    state.select_section("commands");
    state.initialize(Some("nope"));
    assert_eq!(state.active_section_id, DEFAULT_SECTION_ID);
}

#[test]
fn initialize_does_not_touch_sidebar() {
    let mut state = DocsViewerState::default();
    state.toggle_sidebar();
    state.initialize(Some("aider"));
    assert!(state.sidebar_open);
}

// =============================================================
// select_section
// =============================================================

#[test]
fn select_section_is_last_write_wins() {
    let mut state = DocsViewerState::default();
    state.select_section("installation");
    state.select_section("practices");
    assert_eq!(state.active_section_id, "practices");
    assert!(state.is_active("practices"));
}

#[test]
fn select_section_closes_open_sidebar() {
    let mut state = DocsViewerState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.select_section("environment");
    assert!(!state.sidebar_open);
}

#[test]
fn select_section_sets_id_unconditionally() {
    let mut state = DocsViewerState::default();
    state.select_section("outside-catalog");
    assert_eq!(state.active_section_id, "outside-catalog");
    assert!(find_section(&state.active_section_id).is_none());
    assert_eq!(active_count(&state), 0);
}

// =============================================================
// toggle_sidebar
// =============================================================

#[test]
fn toggle_sidebar_parity() {
    let mut state = DocsViewerState::default();
    for n in 1..=7 {
        state.toggle_sidebar();
        assert_eq!(state.sidebar_open, n % 2 == 1, "after {n} toggles");
    }
}

// =============================================================
// Outside-pointer dismissal
// =============================================================

#[test]
fn outside_pointer_closes_open_sidebar() {
    let mut state = DocsViewerState::default();
    state.toggle_sidebar();
    assert!(state.dismiss_sidebar(PointerTarget::Outside));
    assert!(!state.sidebar_open);
}

#[test]
fn pointer_inside_sidebar_keeps_it_open() {
    let mut state = DocsViewerState::default();
    state.toggle_sidebar();
    assert!(!state.dismiss_sidebar(PointerTarget::Panel));
    assert!(state.sidebar_open);
}

#[test]
fn pointer_on_toggle_does_not_double_toggle() {
    let mut state = DocsViewerState::default();
    state.toggle_sidebar();

    // pointerdown on the toggle is ignored, then the click toggles once.
    assert!(!state.dismiss_sidebar(PointerTarget::ToggleControl));
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn outside_pointer_on_closed_sidebar_is_noop() {
    let mut state = DocsViewerState::default();
    assert!(!state.dismiss_sidebar(PointerTarget::Outside));
    assert!(!state.sidebar_open);
    assert_eq!(state.active_section_id, DEFAULT_SECTION_ID);
}
