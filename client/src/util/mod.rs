//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (global listeners, scrolling) and
//! content rendering from page and component logic.

pub mod markdown;
pub mod outside_click;
pub mod scroll;
