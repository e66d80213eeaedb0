use crate::application::render::types::{
    BulletBlock, ImageBlock, NumberedEntry, RenderOptions, SubList,
};
use crate::domain::content::{BulletItem, MainItem, NumberedItem, SubItems};

use super::table::{TablePlacement, render_table};

pub(super) fn bullet(item: &BulletItem) -> BulletBlock {
    BulletBlock {
        text: item.text.clone(),
        sub_items: item.sub_items.as_ref().map(sub_list),
        numbered: Vec::new(),
        table: item
            .table
            .as_ref()
            .map(|table| render_table(table, TablePlacement::Nested)),
        image: None,
    }
}

/// Main items carry the richest inline payload: sub-items, a numbered list,
/// an image and a table, rendered in that order.
pub(super) fn main_item(item: &MainItem, options: &RenderOptions) -> BulletBlock {
    BulletBlock {
        text: item.main.clone(),
        sub_items: item.sub_items.as_ref().map(sub_list),
        numbered: item.numbered_items.iter().map(numbered_entry).collect(),
        table: item
            .table
            .as_ref()
            .map(|table| render_table(table, TablePlacement::Nested)),
        image: item.image.as_ref().map(|src| ImageBlock {
            src: src.clone(),
            alt: item.main.clone(),
            width: options.image_width(src),
        }),
    }
}

pub(super) fn numbered_entry(item: &NumberedItem) -> NumberedEntry {
    NumberedEntry {
        text: item.main.clone(),
        bullets: item.sub_items.clone(),
    }
}

fn sub_list(items: &SubItems) -> SubList {
    match items {
        SubItems::List(entries) => SubList::Bullets(entries.clone()),
        SubItems::Note(note) => SubList::Note(note.clone()),
    }
}
