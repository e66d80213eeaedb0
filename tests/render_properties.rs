use folio::{
    application::render::{Block, CellBlock, RenderOptions, render_document},
    domain::content::{Document, Node},
    infra::content,
};
use serde_json::json;

fn render(value: serde_json::Value) -> Vec<Block> {
    render_document(&Document::from_value(&value), &RenderOptions::default())
}

fn anchors(blocks: &[Block], out: &mut Vec<String>) {
    for block in blocks {
        match block {
            Block::Heading { anchor, .. } => out.push(anchor.clone()),
            Block::Section {
                anchor, children, ..
            } => {
                out.push(anchor.clone());
                anchors(children, out);
            }
            _ => {}
        }
    }
}

#[test]
fn legacy_shapes_normalise() {
    let document = Document::from_value(&json!([
        "text",
        { "main": "x" },
        { "type": "bogus" },
        { "type": "heading" }
    ]));
    let nodes = document.nodes();
    assert!(matches!(&nodes[0], Node::PlainText { text } if text == "text"));
    assert!(matches!(&nodes[1], Node::Main(item) if item.main == "x"));
    assert!(matches!(&nodes[2], Node::Unknown { .. }));
    assert!(matches!(&nodes[3], Node::Unknown { .. }));

    let blocks = render_document(&document, &RenderOptions::default());
    assert_eq!(blocks.len(), 2);
}

#[test]
fn ragged_standalone_table_pads_rows() {
    let blocks = render(json!([{ "type": "table", "rows": [["a"], ["b", "c"]] }]));
    let [Block::Table(table)] = blocks.as_slice() else {
        panic!("expected one table, got {blocks:?}");
    };
    assert_eq!(table.header, None);
    assert_eq!(table.columns, 2);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec![CellBlock::Text("a".into()), CellBlock::empty()]);
}

#[test]
fn architecture_anchors_are_unique() {
    let site = content::bundled().expect("bundled content");
    for project in &site.projects {
        let Some(architecture) = project.architecture() else {
            continue;
        };
        let blocks = render_document(architecture, &RenderOptions::default());
        let mut seen = Vec::new();
        anchors(&blocks, &mut seen);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), seen.len(), "duplicate anchors in {}", project.id);
    }
}

#[test]
fn only_the_first_node_is_marked_first() {
    let blocks = render(json!([
        { "type": "heading", "text": "overview" },
        "intro",
        { "type": "heading", "text": "overview" }
    ]));
    let firsts: Vec<bool> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Heading { is_first, .. } => Some(*is_first),
            _ => None,
        })
        .collect();
    assert_eq!(firsts, vec![true, false]);
}
