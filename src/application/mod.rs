//! Application services: rendering, routing and page assembly.

pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod render;
pub mod routes;
pub mod site;
