//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by widget (`docs` for the section viewer, `metric` for the
//! remote counter, `panel` for dismissible mobile panels) so each component
//! depends on one small model. All are plain data with transition methods;
//! components wrap them in `RwSignal`.

pub mod docs;
pub mod metric;
pub mod panel;
