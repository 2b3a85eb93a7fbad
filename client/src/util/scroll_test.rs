#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn scroll_is_noop_off_browser() {
    assert!(!scroll_into_view_smooth("introduction"));
}

#[test]
fn deferred_scroll_is_noop_off_browser() {
    scroll_into_view_next_frame("databases");
    assert!(!scroll_into_view_smooth("databases"));
}
