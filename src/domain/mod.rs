//! Domain layer types and invariants.

pub mod content;
pub mod error;
pub mod profile;
pub mod projects;
pub mod site;
pub mod slug;
