mod lists;
mod table;

use std::iter::Peekable;

use tracing::debug;

use crate::application::render::types::{
    Block, ImageBlock, NodePosition, NumberedEntry, RenderOptions,
};
use crate::domain::content::{Document, Image, Node};
use crate::domain::slug::AnchorSlugger;

use table::TablePlacement;

/// Render a document into display blocks, top to bottom.
pub fn render_document(document: &Document, options: &RenderOptions) -> Vec<Block> {
    Renderer::new(options).document(document)
}

/// Render a single node in isolation.
///
/// Returns `None` for nodes that produce no output. Standalone numbered items
/// render as a one-entry ordered list here; [`render_document`] merges runs of
/// them instead.
pub fn render_node(node: &Node, position: NodePosition, options: &RenderOptions) -> Option<Block> {
    let mut renderer = Renderer::new(options);
    match node {
        Node::Numbered(item) => Some(Block::OrderedList {
            entries: vec![lists::numbered_entry(item)],
        }),
        other => renderer.node(other, position),
    }
}

struct Renderer<'a> {
    options: &'a RenderOptions,
    anchors: AnchorSlugger,
}

impl<'a> Renderer<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            anchors: AnchorSlugger::new(),
        }
    }

    fn document(&mut self, document: &Document) -> Vec<Block> {
        let mut blocks = Vec::with_capacity(document.len());
        let mut nodes = document.nodes().iter().enumerate().peekable();

        while let Some((index, node)) = nodes.next() {
            let block = match node {
                Node::Numbered(item) => {
                    let mut entries = vec![lists::numbered_entry(item)];
                    entries.extend(take_numbered_run(&mut nodes));
                    Some(Block::OrderedList { entries })
                }
                other => self.node(other, NodePosition::at(index)),
            };
            blocks.extend(block);
        }

        blocks
    }

    fn node(&mut self, node: &Node, position: NodePosition) -> Option<Block> {
        match node {
            Node::PlainText { text } => Some(Block::Paragraph { text: text.clone() }),
            Node::Heading { text } => Some(Block::Heading {
                text: text.clone(),
                anchor: self.anchors.anchor_for(text),
                is_first: position.is_first,
            }),
            Node::Subheading { text, content } => {
                let anchor = self.anchors.anchor_for(text);
                Some(Block::Section {
                    heading: text.clone(),
                    anchor,
                    children: self.document(content),
                })
            }
            Node::Image(image) => Some(Block::Image(self.image(image))),
            Node::Bullet(item) => Some(Block::Bullet(lists::bullet(item))),
            Node::Main(item) => Some(Block::Bullet(lists::main_item(item, self.options))),
            Node::Numbered(item) => Some(Block::OrderedList {
                entries: vec![lists::numbered_entry(item)],
            }),
            Node::Table(table) => Some(Block::Table(table::render_table(
                table,
                TablePlacement::Standalone,
            ))),
            Node::Unknown { reason } => {
                debug!(
                    target = "folio::render",
                    reason = %reason,
                    "skipping unrenderable node"
                );
                None
            }
        }
    }

    fn image(&self, image: &Image) -> ImageBlock {
        ImageBlock {
            src: image.src.clone(),
            alt: image
                .alt
                .clone()
                .unwrap_or_else(|| self.options.image_alt_fallback.clone()),
            width: self.options.image_width(&image.src),
        }
    }
}

fn take_numbered_run<'n, I>(nodes: &mut Peekable<I>) -> Vec<NumberedEntry>
where
    I: Iterator<Item = (usize, &'n Node)>,
{
    let mut entries = Vec::new();
    while let Some((_, Node::Numbered(item))) = nodes.peek() {
        entries.push(lists::numbered_entry(item));
        nodes.next();
    }
    entries
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::application::render::types::{
        BulletBlock, CellBlock, ImageWidth, SubList, TableBlock,
    };

    fn doc(value: serde_json::Value) -> Document {
        Document::from_value(&value)
    }

    fn render(value: serde_json::Value) -> Vec<Block> {
        render_document(&doc(value), &RenderOptions::default())
    }

    fn text_cells(cells: &[&str]) -> Vec<CellBlock> {
        cells
            .iter()
            .map(|cell| CellBlock::Text((*cell).to_string()))
            .collect()
    }

    #[test]
    fn renders_heading_paragraph_and_nested_section() {
        let blocks = render(json!([
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

        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "overview".to_string(),
                    anchor: "overview".to_string(),
                    is_first: true,
                },
                Block::Paragraph {
                    text: "Some intro text.".to_string(),
                },
                Block::Section {
                    heading: "details".to_string(),
                    anchor: "details".to_string(),
                    children: vec![Block::Bullet(BulletBlock {
                        text: "point one".to_string(),
                        sub_items: Some(SubList::Bullets(vec![
                            "sub a".to_string(),
                            "sub b".to_string()
                        ])),
                        numbered: Vec::new(),
                        table: None,
                        image: None,
                    })],
                },
            ]
        );
    }

    #[test]
    fn only_the_first_node_is_marked_first() {
        let blocks = render(json!([
            { "type": "heading", "text": "one" },
            { "type": "heading", "text": "two" }
        ]));
        assert!(matches!(&blocks[0], Block::Heading { is_first: true, .. }));
        assert!(matches!(&blocks[1], Block::Heading { is_first: false, .. }));

        let blocks = render(json!(["intro", { "type": "heading", "text": "later" }]));
        assert!(matches!(&blocks[1], Block::Heading { is_first: false, .. }));
    }

    #[test]
    fn unknown_nodes_are_skipped_between_siblings() {
        let blocks = render(json!([
            { "type": "heading", "text": "before" },
            { "type": "mystery", "payload": 1 },
            { "text": "no tag" },
            { "type": "heading", "text": "after" }
        ]));

        assert_eq!(blocks.len(), 2);
        assert!(matches!(&blocks[0], Block::Heading { text, .. } if text == "before"));
        assert!(matches!(&blocks[1], Block::Heading { text, .. } if text == "after"));
    }

    #[test]
    fn absent_or_empty_sub_items_render_no_sub_list() {
        for item in [
            json!({ "type": "bullet", "text": "a" }),
            json!({ "type": "bullet", "text": "a", "subItems": [] }),
            json!({ "main": "a" }),
            json!({ "main": "a", "subItems": [] }),
        ] {
            let blocks = render(json!([item]));
            match &blocks[0] {
                Block::Bullet(bullet) => assert!(bullet.sub_items.is_none()),
                other => panic!("expected bullet, got {other:?}"),
            }
        }
    }

    #[test]
    fn sub_items_keep_count_and_order() {
        let items = ["first", "second", "third", "fourth"];
        let blocks = render(json!([{ "main": "m", "subItems": items }]));
        let Block::Bullet(bullet) = &blocks[0] else {
            panic!("expected bullet");
        };
        let expected: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        assert_eq!(bullet.sub_items, Some(SubList::Bullets(expected)));
    }

    #[test]
    fn string_sub_items_render_as_note() {
        let blocks = render(json!([{ "type": "bullet", "text": "a", "subItems": "aside" }]));
        let Block::Bullet(bullet) = &blocks[0] else {
            panic!("expected bullet");
        };
        assert_eq!(bullet.sub_items, Some(SubList::Note("aside".to_string())));
    }

    #[test]
    fn standalone_table_keeps_every_row_as_data() {
        let blocks = render(json!([
            { "type": "table", "rows": [["a", "b"], ["c", "d"], ["e", "f"]] }
        ]));

        assert_eq!(
            blocks,
            vec![Block::Table(TableBlock {
                header: None,
                rows: vec![
                    text_cells(&["a", "b"]),
                    text_cells(&["c", "d"]),
                    text_cells(&["e", "f"]),
                ],
                columns: 2,
            })]
        );
    }

    #[test]
    fn nested_table_promotes_first_row_to_header() {
        let blocks = render(json!([{
            "type": "bullet",
            "text": "policies",
            "table": { "rows": [["a", "b"], ["c", "d"], ["e", "f"]] }
        }]));

        let Block::Bullet(bullet) = &blocks[0] else {
            panic!("expected bullet");
        };
        assert_eq!(
            bullet.table,
            Some(TableBlock {
                header: Some(text_cells(&["a", "b"])),
                rows: vec![text_cells(&["c", "d"]), text_cells(&["e", "f"])],
                columns: 2,
            })
        );
    }

    #[test]
    fn image_without_alt_uses_fallback_label() {
        let blocks = render(json!([{ "type": "image", "src": "/architecture.png" }]));
        assert_eq!(
            blocks,
            vec![Block::Image(ImageBlock {
                src: "/architecture.png".to_string(),
                alt: "diagram".to_string(),
                width: ImageWidth::Standard,
            })]
        );
    }

    #[test]
    fn main_item_renders_numbered_list_image_and_table() {
        let blocks = render(json!([{
            "main": "Current state - user journey",
            "numberedItems": [
                { "main": "discover event", "subItems": ["via instagram"] },
                { "main": "buy ticket" }
            ],
            "image": "/bounce/Current User Journey.png",
            "table": { "rows": [["step", "pain"], ["checkout", "wrong account"]] }
        }]));

        let Block::Bullet(bullet) = &blocks[0] else {
            panic!("expected bullet");
        };
        assert_eq!(bullet.numbered.len(), 2);
        assert_eq!(bullet.numbered[0].bullets, vec!["via instagram".to_string()]);
        assert!(bullet.numbered[1].bullets.is_empty());
        let image = bullet.image.as_ref().expect("inline image");
        assert_eq!(image.width, ImageWidth::Wide);
        assert_eq!(image.alt, "Current state - user journey");
        let table = bullet.table.as_ref().expect("inline table");
        assert_eq!(table.header, Some(text_cells(&["step", "pain"])));
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn consecutive_numbered_items_share_one_list() {
        let blocks = render(json!([
            { "type": "numbered", "main": "one" },
            { "type": "numbered", "main": "two", "subItems": ["two-a"] },
            "break",
            { "type": "numbered", "main": "three" }
        ]));

        assert_eq!(blocks.len(), 3);
        let Block::OrderedList { entries } = &blocks[0] else {
            panic!("expected ordered list");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].bullets, vec!["two-a".to_string()]);
        assert!(matches!(&blocks[2], Block::OrderedList { entries } if entries.len() == 1));
    }

    #[test]
    fn subheadings_recurse_to_any_depth() {
        let mut content = json!(["leaf"]);
        for depth in 0..6 {
            content = json!([{ "type": "subheading", "text": format!("level {depth}"), "content": content }]);
        }

        let mut blocks = render(content);
        let mut depth = 0;
        while let Some(Block::Section { children, .. }) = blocks.pop() {
            depth += 1;
            blocks = children;
        }
        assert_eq!(depth, 6);
    }

    #[test]
    fn duplicate_headings_receive_distinct_anchors() {
        let blocks = render(json!([
            { "type": "heading", "text": "deployment" },
            { "type": "subheading", "text": "deployment", "content": [] },
            { "type": "heading", "text": "deployment" }
        ]));

        let anchors: Vec<&str> = blocks
            .iter()
            .map(|block| match block {
                Block::Heading { anchor, .. } | Block::Section { anchor, .. } => anchor.as_str(),
                _ => "",
            })
            .collect();
        assert_eq!(anchors, vec!["deployment", "deployment-2", "deployment-3"]);
    }

    #[test]
    fn rendering_twice_is_identical() {
        let document = doc(json!([
            { "type": "heading", "text": "overview" },
            { "type": "image", "src": "/a.png", "alt": "a" },
            { "type": "bullet", "text": "b", "table": { "rows": [["h"], ["x", "y"]] } },
            { "type": "bogus" }
        ]));
        let options = RenderOptions::default();
        assert_eq!(
            render_document(&document, &options),
            render_document(&document, &options)
        );
    }

    #[test]
    fn render_node_exposes_position_hook() {
        let node = Node::Heading {
            text: "standalone".to_string(),
        };
        let options = RenderOptions::default();
        let first = render_node(&node, NodePosition { is_first: true }, &options);
        let later = render_node(&node, NodePosition { is_first: false }, &options);
        assert!(matches!(first, Some(Block::Heading { is_first: true, .. })));
        assert!(matches!(later, Some(Block::Heading { is_first: false, .. })));
        assert!(render_node(&Node::unknown("x"), NodePosition::default(), &options).is_none());
    }
}
