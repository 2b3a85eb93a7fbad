//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `github` reads public repository metadata for the star-count widget. It is
//! the site's only outbound call.

pub mod github;
