//! HTML emission for rendered content blocks.
//!
//! Each block kind has its own small template; nesting is composed here so the
//! templates themselves never recurse.

use askama::Template;

use crate::application::error::HttpError;
use crate::application::render::{
    Block, BulletBlock, CellBlock, ImageBlock, NumberedEntry, SubList, TableBlock,
};
use crate::presentation::views::{TemplateRenderError, TocEntryView};

const SOURCE: &str = "presentation::blocks::render_blocks";

#[derive(Template)]
#[template(path = "blocks/heading.html")]
struct HeadingTemplate<'a> {
    text: &'a str,
    anchor: &'a str,
    is_first: bool,
}

#[derive(Template)]
#[template(path = "blocks/paragraph.html")]
struct ParagraphTemplate<'a> {
    text: &'a str,
}

#[derive(Template)]
#[template(path = "blocks/section.html")]
struct SectionTemplate<'a> {
    heading: &'a str,
    anchor: &'a str,
    children_html: String,
}

#[derive(Template)]
#[template(path = "blocks/image.html")]
struct ImageTemplate<'a> {
    image: &'a ImageBlock,
    inline: bool,
}

#[derive(Template)]
#[template(path = "blocks/bullet.html")]
struct BulletTemplate<'a> {
    text: &'a str,
    sub_bullets: &'a [String],
    note: Option<&'a str>,
    numbered_html: Option<String>,
    image_html: Option<String>,
    table_html: Option<String>,
}

#[derive(Template)]
#[template(path = "blocks/ordered_list.html")]
struct OrderedListTemplate<'a> {
    entries: &'a [NumberedEntry],
}

#[derive(Template)]
#[template(path = "blocks/table.html")]
struct TableTemplate<'a> {
    header: Option<Vec<CellView<'a>>>,
    rows: Vec<Vec<CellView<'a>>>,
    nested: bool,
}

struct CellView<'a> {
    text: &'a str,
    bullets: &'a [String],
}

impl<'a> CellView<'a> {
    fn new(cell: &'a CellBlock) -> Self {
        match cell {
            CellBlock::Text(text) => Self {
                text: text.as_str(),
                bullets: &[],
            },
            CellBlock::Bullets(items) => Self {
                text: "",
                bullets: items.as_slice(),
            },
        }
    }

    fn has_bullets(&self) -> bool {
        !self.bullets.is_empty()
    }
}

/// Render blocks to an HTML fragment, in order.
pub fn render_blocks(blocks: &[Block]) -> Result<String, HttpError> {
    let mut html = String::new();
    for block in blocks {
        html.push_str(&render_block(block)?);
    }
    Ok(html)
}

fn render_block(block: &Block) -> Result<String, HttpError> {
    match block {
        Block::Heading {
            text,
            anchor,
            is_first,
        } => render(HeadingTemplate {
            text,
            anchor,
            is_first: *is_first,
        }),
        Block::Paragraph { text } => render(ParagraphTemplate { text }),
        Block::Section {
            heading,
            anchor,
            children,
        } => render(SectionTemplate {
            heading,
            anchor,
            children_html: render_blocks(children)?,
        }),
        Block::Image(image) => render(ImageTemplate {
            image,
            inline: false,
        }),
        Block::Bullet(bullet) => render_bullet(bullet),
        Block::OrderedList { entries } => render(OrderedListTemplate { entries }),
        Block::Table(table) => render_table(table, false),
    }
}

fn render_bullet(bullet: &BulletBlock) -> Result<String, HttpError> {
    let (sub_bullets, note): (&[String], Option<&str>) = match &bullet.sub_items {
        Some(SubList::Bullets(items)) => (items.as_slice(), None),
        Some(SubList::Note(note)) => (&[], Some(note.as_str())),
        None => (&[], None),
    };

    let numbered_html = if bullet.numbered.is_empty() {
        None
    } else {
        Some(render(OrderedListTemplate {
            entries: &bullet.numbered,
        })?)
    };
    let image_html = bullet
        .image
        .as_ref()
        .map(|image| render(ImageTemplate {
            image,
            inline: true,
        }))
        .transpose()?;
    let table_html = bullet
        .table
        .as_ref()
        .map(|table| render_table(table, true))
        .transpose()?;

    render(BulletTemplate {
        text: &bullet.text,
        sub_bullets,
        note,
        numbered_html,
        image_html,
        table_html,
    })
}

fn render_table(table: &TableBlock, nested: bool) -> Result<String, HttpError> {
    render(TableTemplate {
        header: table
            .header
            .as_ref()
            .map(|cells| cells.iter().map(CellView::new).collect()),
        rows: table
            .rows
            .iter()
            .map(|row| row.iter().map(CellView::new).collect())
            .collect(),
        nested,
    })
}

fn render<T: Template>(template: T) -> Result<String, HttpError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(SOURCE, "Content rendering failed", err).into()
    })
}

/// Table of contents entries for every heading and section, in document
/// order. Top-level headings sit at depth 0; sections nest one deeper than
/// their parent.
pub fn table_of_contents(blocks: &[Block]) -> Vec<TocEntryView> {
    let mut entries = Vec::new();
    collect_toc(blocks, 0, &mut entries);
    entries
}

fn collect_toc(blocks: &[Block], depth: usize, entries: &mut Vec<TocEntryView>) {
    for block in blocks {
        match block {
            Block::Heading { text, anchor, .. } => entries.push(TocEntryView {
                anchor: anchor.clone(),
                label: text.clone(),
                depth,
            }),
            Block::Section {
                heading,
                anchor,
                children,
            } => {
                entries.push(TocEntryView {
                    anchor: anchor.clone(),
                    label: heading.clone(),
                    depth: depth + 1,
                });
                collect_toc(children, depth + 1, entries);
            }
            _ => {}
        }
    }
}
