use crate::application::render::types::{CellBlock, TableBlock};
use crate::domain::content::{Cell, Table};

/// Where a table appears. Nested tables (inside a bullet or main item) treat
/// their first row as the header; standalone tables only ever use declared
/// header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TablePlacement {
    Standalone,
    Nested,
}

pub(super) fn render_table(table: &Table, placement: TablePlacement) -> TableBlock {
    let mut rows: Vec<Vec<CellBlock>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell).collect())
        .collect();

    let header = match placement {
        TablePlacement::Nested if !rows.is_empty() => Some(rows.remove(0)),
        TablePlacement::Nested => None,
        TablePlacement::Standalone if table.headers.is_empty() => None,
        TablePlacement::Standalone => Some(
            table
                .headers
                .iter()
                .map(|label| CellBlock::Text(label.clone()))
                .collect(),
        ),
    };

    let columns = header
        .iter()
        .chain(rows.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let header = header.map(|cells| pad(cells, columns));
    let rows = rows.into_iter().map(|cells| pad(cells, columns)).collect();

    TableBlock {
        header,
        rows,
        columns,
    }
}

fn cell(cell: &Cell) -> CellBlock {
    match cell {
        Cell::Text(text) => CellBlock::Text(text.clone()),
        Cell::Bullets(entries) => CellBlock::Bullets(entries.clone()),
    }
}

fn pad(mut cells: Vec<CellBlock>, columns: usize) -> Vec<CellBlock> {
    cells.resize_with(columns, CellBlock::empty);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| Cell::text(*cell)).collect())
                .collect(),
        )
    }

    #[test]
    fn ragged_rows_are_padded_to_widest() {
        let rendered = render_table(
            &table(&[&["a"], &["b", "c", "d"], &["e", "f"]]),
            TablePlacement::Standalone,
        );
        assert_eq!(rendered.columns, 3);
        assert!(rendered.rows.iter().all(|row| row.len() == 3));
        assert_eq!(rendered.rows[0][2], CellBlock::empty());
    }

    #[test]
    fn standalone_uses_declared_headers() {
        let mut source = table(&[&["1", "2"]]);
        source.headers = vec!["left".to_string(), "right".to_string()];

        let rendered = render_table(&source, TablePlacement::Standalone);
        assert_eq!(
            rendered.header,
            Some(vec![
                CellBlock::Text("left".to_string()),
                CellBlock::Text("right".to_string())
            ])
        );
        assert_eq!(rendered.rows.len(), 1);
    }

    #[test]
    fn nested_ignores_declared_headers() {
        let mut source = table(&[&["h1", "h2"], &["x", "y"]]);
        source.headers = vec!["ignored".to_string()];

        let rendered = render_table(&source, TablePlacement::Nested);
        assert_eq!(
            rendered.header,
            Some(vec![
                CellBlock::Text("h1".to_string()),
                CellBlock::Text("h2".to_string())
            ])
        );
    }

    #[test]
    fn nested_single_row_has_header_and_no_body() {
        let rendered = render_table(&table(&[&["only"]]), TablePlacement::Nested);
        assert!(rendered.header.is_some());
        assert!(rendered.rows.is_empty());
    }

    #[test]
    fn empty_table_has_no_columns() {
        let rendered = render_table(&Table::default(), TablePlacement::Nested);
        assert_eq!(rendered.header, None);
        assert_eq!(rendered.columns, 0);
    }
}
