//! Deterministic anchor slugs for document headings.

use std::collections::HashMap;

use slug::slugify;

/// Anchor used when a heading has no sluggable characters.
pub const FALLBACK_ANCHOR: &str = "section";

/// Derive a base slug from the provided human-readable text, or `None` when
/// nothing sluggable remains.
pub fn derive_slug(input: &str) -> Option<String> {
    let candidate = slugify(input.trim());
    (!candidate.is_empty()).then_some(candidate)
}

/// Generates unique anchor slugs within a single document.
///
/// Headings processed in order receive monotonic suffixes when duplicates
/// occur (`deployment`, `deployment-2`, `deployment-3`). Headings that cannot
/// be slugged share the [`FALLBACK_ANCHOR`] sequence.
#[derive(Default, Debug)]
pub struct AnchorSlugger {
    occurrences: HashMap<String, usize>,
}

impl AnchorSlugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for the heading, unique within this slugger.
    pub fn anchor_for(&mut self, heading: &str) -> String {
        let base = derive_slug(heading).unwrap_or_else(|| FALLBACK_ANCHOR.to_string());
        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{base}-{}", *count)
        }
    }
}
