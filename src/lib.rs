//! folio: a portfolio site publisher.
//!
//! Project content is loosely shaped JSON; it is normalised into a typed
//! content tree, rendered to display blocks and wrapped in askama page
//! templates. Pages are served by a preview server or exported as static files.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
