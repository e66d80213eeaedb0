use serde::Serialize;

use crate::config::{DEFAULT_IMAGE_ALT_FALLBACK, DEFAULT_WIDE_IMAGE_MARKER, RenderSettings};

/// Knobs for content-driven presentation decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Alt text used for images that declare none.
    pub image_alt_fallback: String,
    /// File-name substrings that mark an image for wide display.
    pub wide_image_markers: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_alt_fallback: DEFAULT_IMAGE_ALT_FALLBACK.to_string(),
            wide_image_markers: vec![DEFAULT_WIDE_IMAGE_MARKER.to_string()],
        }
    }
}

impl From<&RenderSettings> for RenderOptions {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            image_alt_fallback: settings.image_alt_fallback.clone(),
            wide_image_markers: settings.wide_image_markers.clone(),
        }
    }
}

impl RenderOptions {
    /// Display width for an image, decided by its file name alone.
    pub fn image_width(&self, src: &str) -> ImageWidth {
        let file_name = src.rsplit('/').next().unwrap_or(src);
        if self
            .wide_image_markers
            .iter()
            .any(|marker| !marker.is_empty() && file_name.contains(marker.as_str()))
        {
            ImageWidth::Wide
        } else {
            ImageWidth::Standard
        }
    }
}

/// Where a node sits within its document. Only the first node is special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodePosition {
    pub is_first: bool,
}

impl NodePosition {
    pub fn at(index: usize) -> Self {
        Self {
            is_first: index == 0,
        }
    }
}

/// One display block. Blocks describe structure only; styling is left to the
/// page shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
        anchor: String,
        is_first: bool,
    },
    /// Free text; line breaks are significant.
    Paragraph { text: String },
    /// A nested heading followed by its own rendered content.
    Section {
        heading: String,
        anchor: String,
        children: Vec<Block>,
    },
    Image(ImageBlock),
    Bullet(BulletBlock),
    /// Consecutive standalone numbered items.
    OrderedList { entries: Vec<NumberedEntry> },
    Table(TableBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    pub width: ImageWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageWidth {
    Standard,
    Wide,
}

impl ImageWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageWidth::Standard => "standard",
            ImageWidth::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletBlock {
    pub text: String,
    pub sub_items: Option<SubList>,
    pub numbered: Vec<NumberedEntry>,
    pub table: Option<TableBlock>,
    pub image: Option<ImageBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubList {
    /// Indented secondary bullets.
    Bullets(Vec<String>),
    /// Indented paragraph.
    Note(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedEntry {
    pub text: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    pub header: Option<Vec<CellBlock>>,
    /// Data rows, each padded to `columns` cells.
    pub rows: Vec<Vec<CellBlock>>,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellBlock {
    Text(String),
    /// Compact vertical bullet list inside a cell.
    Bullets(Vec<String>),
}

impl CellBlock {
    pub fn empty() -> Self {
        CellBlock::Text(String::new())
    }
}
