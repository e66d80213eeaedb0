use std::fmt::Write;

use super::types::{Block, BulletBlock, CellBlock, NumberedEntry, SubList, TableBlock};

const INDENT: &str = "  ";

/// Plain-text outline of rendered blocks, one line per element, indented by
/// nesting depth. Used by `folio inspect` and in tests.
pub fn outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        write_block(&mut out, block, 0);
    }
    out
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    match block {
        Block::Heading {
            text,
            anchor,
            is_first,
        } => {
            let marker = if *is_first { " first" } else { "" };
            line(out, depth, format_args!("heading #{anchor}{marker}: {text}"));
        }
        Block::Paragraph { text } => {
            line(out, depth, format_args!("paragraph: {}", single_line(text)));
        }
        Block::Section {
            heading,
            anchor,
            children,
        } => {
            line(out, depth, format_args!("section #{anchor}: {heading}"));
            for child in children {
                write_block(out, child, depth + 1);
            }
        }
        Block::Image(image) => {
            line(
                out,
                depth,
                format_args!("image [{}] {} ({})", image.width.as_str(), image.src, image.alt),
            );
        }
        Block::Bullet(bullet) => write_bullet(out, bullet, depth),
        Block::OrderedList { entries } => write_numbered(out, entries, depth),
        Block::Table(table) => write_table(out, table, depth),
    }
}

fn write_bullet(out: &mut String, bullet: &BulletBlock, depth: usize) {
    line(out, depth, format_args!("bullet: {}", bullet.text));
    match &bullet.sub_items {
        Some(SubList::Bullets(items)) => {
            for item in items {
                line(out, depth + 1, format_args!("- {item}"));
            }
        }
        Some(SubList::Note(note)) => {
            line(out, depth + 1, format_args!("note: {}", single_line(note)));
        }
        None => {}
    }
    if !bullet.numbered.is_empty() {
        write_numbered(out, &bullet.numbered, depth + 1);
    }
    if let Some(image) = &bullet.image {
        line(
            out,
            depth + 1,
            format_args!("image [{}] {} ({})", image.width.as_str(), image.src, image.alt),
        );
    }
    if let Some(table) = &bullet.table {
        write_table(out, table, depth + 1);
    }
}

fn write_numbered(out: &mut String, entries: &[NumberedEntry], depth: usize) {
    for (index, entry) in entries.iter().enumerate() {
        line(out, depth, format_args!("{}. {}", index + 1, entry.text));
        for item in &entry.bullets {
            line(out, depth + 1, format_args!("- {item}"));
        }
    }
}

fn write_table(out: &mut String, table: &TableBlock, depth: usize) {
    line(
        out,
        depth,
        format_args!("table {}x{}", table.rows.len(), table.columns),
    );
    if let Some(header) = &table.header {
        line(out, depth + 1, format_args!("header | {}", cells(header)));
    }
    for row in &table.rows {
        line(out, depth + 1, format_args!("row | {}", cells(row)));
    }
}

fn cells(row: &[CellBlock]) -> String {
    row.iter()
        .map(|cell| match cell {
            CellBlock::Text(text) => single_line(text),
            CellBlock::Bullets(items) => format!("[{}]", items.join("; ")),
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn single_line(text: &str) -> String {
    text.replace('\n', "\\n")
}

fn line(out: &mut String, depth: usize, args: std::fmt::Arguments<'_>) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    let start = out.len();
    // Writing into a String cannot fail.
    let _ = out.write_fmt(args);
    let trimmed = out[start..].trim_end().len();
    out.truncate(start + trimmed);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::render::{RenderOptions, render_document};
    use crate::domain::content::Document;

    #[test]
    fn outline_of_mixed_document() {
        let document = Document::from_value(&json!([
            { "type": "heading", "text": "overview" },
            "Some intro text.",
            {
                "type": "subheading",
                "text": "details",
                "content": [
                    { "type": "bullet", "text": "point one", "subItems": ["sub a", "sub b"] }
                ]
            }
        ]));
        let blocks = render_document(&document, &RenderOptions::default());

        insta::assert_snapshot!(outline(&blocks), @r"
        heading #overview first: overview
        paragraph: Some intro text.
        section #details: details
          bullet: point one
            - sub a
            - sub b
        ");
    }

    #[test]
    fn outline_of_tables_and_lists() {
        let document = Document::from_value(&json!([
            { "type": "table", "headers": ["k", "v"], "rows": [["a", ["x", "y"]], ["b"]] },
            { "type": "numbered", "main": "first", "subItems": ["detail"] },
            { "type": "numbered", "main": "second" },
            { "type": "image", "src": "/bounce/Future User Journey.png" }
        ]));
        let blocks = render_document(&document, &RenderOptions::default());

        insta::assert_snapshot!(outline(&blocks), @r"
        table 2x2
          header | k | v
          row | a | [x; y]
          row | b |
        1. first
          - detail
        2. second
        image [wide] /bounce/Future User Journey.png (diagram)
        ");
    }
}
