//! Content-tree renderer.
//!
//! Rendering is pure: it accepts a normalised [`Document`](crate::domain::content::Document)
//! and produces an ordered list of display [`Block`]s. It performs no I/O, keeps
//! no state between calls and never fails; nodes it cannot render are skipped so
//! their siblings still appear.

mod outline;
mod service;
mod types;

pub use outline::outline;
pub use service::{render_document, render_node};
pub use types::{
    Block, BulletBlock, CellBlock, ImageBlock, ImageWidth, NodePosition, NumberedEntry,
    RenderOptions, SubList, TableBlock,
};
