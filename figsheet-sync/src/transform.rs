//! Selection and row transformation.
//!
//! Pure functions: truncate the fetched list to the configured cap, then map
//! each survivor to one display row. Order always matches fetch order.

use chrono::{DateTime, Utc};

use figsheet_core::types::{
    CellValue, Component, FileKey, LinkStyle, NodeId, PublishBatch, SheetRow, SyncConfig,
};

use crate::error::SyncError;

/// Placeholder cell for components without a description.
const NO_DESCRIPTION: &str = "—";
/// Display label used by the hyperlink-formula link style.
const LINK_LABEL: &str = "Open in Figma";

/// Truncate to at most `cap` components, preserving fetch order.
///
/// An empty survivor set is terminal: the caller must not touch the sheet.
pub fn select(mut components: Vec<Component>, cap: usize) -> Result<Vec<Component>, SyncError> {
    let fetched = components.len();
    components.truncate(cap);
    if components.is_empty() {
        return Err(SyncError::Empty { fetched });
    }
    Ok(components)
}

/// Canonical deep link for a component node.
pub fn component_url(file_key: &FileKey, node_id: &NodeId) -> String {
    format!("https://www.figma.com/file/{file_key}/?node-id={node_id}")
}

/// Header row plus one row per component, in input order.
///
/// `now` is captured once by the caller so every row of a batch carries the
/// same timestamp.
pub fn build_batch(
    components: &[Component],
    config: &SyncConfig,
    now: DateTime<Utc>,
) -> PublishBatch {
    let opts = &config.options;
    let timestamp = now.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let mut rows = Vec::with_capacity(components.len() + 1);
    rows.push(header_row(opts.include_timestamp));

    for (i, component) in components.iter().enumerate() {
        let url = component_url(&config.file_key, &component.node_id);
        let mut cells = vec![
            CellValue::Number(i as u64 + 1),
            CellValue::from(component.name.clone()),
            CellValue::Number(component.usage_count),
            link_cell(opts.link_style, url),
            description_cell(component.description.as_deref()),
        ];
        if opts.include_timestamp {
            cells.push(CellValue::from(timestamp.clone()));
        }
        rows.push(SheetRow(cells));
    }

    PublishBatch { rows }
}

fn header_row(include_timestamp: bool) -> SheetRow {
    let mut cells: Vec<CellValue> = ["#", "Component", "Usage count", "Link", "Description"]
        .into_iter()
        .map(CellValue::from)
        .collect();
    if include_timestamp {
        cells.push(CellValue::from("Updated at"));
    }
    SheetRow(cells)
}

fn link_cell(style: LinkStyle, url: String) -> CellValue {
    match style {
        LinkStyle::Plain => CellValue::Text(url),
        LinkStyle::Formula => CellValue::Text(format!("=HYPERLINK(\"{url}\", \"{LINK_LABEL}\")")),
    }
}

fn description_cell(description: Option<&str>) -> CellValue {
    match description {
        Some(d) if !d.trim().is_empty() => CellValue::from(d),
        _ => CellValue::from(NO_DESCRIPTION),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use figsheet_core::types::{SpreadsheetId, SyncOptions};

    use super::*;

    fn component(id: &str, name: &str, usage: u64) -> Component {
        Component {
            node_id: NodeId::from(id),
            name: name.to_owned(),
            description: None,
            usage_count: usage,
        }
    }

    fn config_with(options: SyncOptions) -> SyncConfig {
        SyncConfig {
            file_key: FileKey::from("filekey"),
            spreadsheet_id: SpreadsheetId::from("sheet-1"),
            max_components: 10,
            options,
        }
    }

    fn cell_text(cell: &CellValue) -> &str {
        match cell {
            CellValue::Text(s) => s,
            CellValue::Number(_) => panic!("expected text cell"),
        }
    }

    #[test]
    fn select_truncates_to_cap_preserving_order() {
        let components: Vec<_> = (0..15)
            .map(|i| component(&format!("1:{i}"), &format!("c{i}"), i))
            .collect();
        let selected = select(components, 10).expect("non-empty");
        assert_eq!(selected.len(), 10);
        assert_eq!(selected[0].name, "c0");
        assert_eq!(selected[9].name, "c9");
    }

    #[test]
    fn select_keeps_short_lists_whole() {
        let components = vec![component("1:0", "only", 0)];
        let selected = select(components, 10).expect("non-empty");
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn select_of_empty_list_is_terminal() {
        let err = select(vec![], 10).expect_err("empty must fail");
        assert!(matches!(err, SyncError::Empty { fetched: 0 }));
    }

    #[test]
    fn select_with_zero_cap_is_terminal() {
        let err = select(vec![component("1:0", "c", 0)], 0).expect_err("zero cap");
        assert!(matches!(err, SyncError::Empty { fetched: 1 }));
    }

    #[test]
    fn batch_has_header_then_indexed_rows() {
        let components = vec![component("1:0", "Button", 7), component("1:1", "Card", 0)];
        let batch = build_batch(&components, &config_with(SyncOptions::default()), Utc::now());

        assert_eq!(batch.rows.len(), 3);
        assert_eq!(batch.data_rows(), 2);
        assert_eq!(batch.rows[0].0[0], CellValue::from("#"));
        assert_eq!(batch.rows[1].0[0], CellValue::Number(1));
        assert_eq!(batch.rows[1].0[1], CellValue::from("Button"));
        assert_eq!(batch.rows[1].0[2], CellValue::Number(7));
        assert_eq!(batch.rows[2].0[0], CellValue::Number(2));
        assert_eq!(batch.rows[2].0[2], CellValue::Number(0));
    }

    #[test]
    fn missing_description_becomes_placeholder() {
        let mut described = component("1:0", "Button", 1);
        described.description = Some("Primary action".to_owned());
        let blank = component("1:1", "Card", 0);
        let mut empty = component("1:2", "Badge", 0);
        empty.description = Some("   ".to_owned());

        let batch = build_batch(
            &[described, blank, empty],
            &config_with(SyncOptions::default()),
            Utc::now(),
        );
        assert_eq!(cell_text(&batch.rows[1].0[4]), "Primary action");
        assert_eq!(cell_text(&batch.rows[2].0[4]), NO_DESCRIPTION);
        assert_eq!(cell_text(&batch.rows[3].0[4]), NO_DESCRIPTION);
    }

    #[test]
    fn formula_link_embeds_the_plain_url() {
        let components = vec![component("12:34", "Button", 0)];
        let plain = build_batch(&components, &config_with(SyncOptions::default()), Utc::now());
        let formula = build_batch(
            &components,
            &config_with(SyncOptions {
                link_style: LinkStyle::Formula,
                ..SyncOptions::default()
            }),
            Utc::now(),
        );

        let plain_url = cell_text(&plain.rows[1].0[3]).to_owned();
        assert_eq!(plain_url, "https://www.figma.com/file/filekey/?node-id=12:34");

        let formula_cell = cell_text(&formula.rows[1].0[3]);
        assert!(formula_cell.starts_with("=HYPERLINK(\""));
        assert!(formula_cell.contains(&plain_url));
        assert!(formula_cell.ends_with("\"Open in Figma\")"));
    }

    #[test]
    fn timestamp_column_is_uniform_across_rows() {
        let components = vec![component("1:0", "a", 0), component("1:1", "b", 0)];
        let now = Utc::now();
        let batch = build_batch(
            &components,
            &config_with(SyncOptions {
                include_timestamp: true,
                ..SyncOptions::default()
            }),
            now,
        );

        assert_eq!(batch.rows[0].0.len(), 6);
        assert_eq!(cell_text(batch.rows[0].0.last().unwrap()), "Updated at");
        let t1 = cell_text(batch.rows[1].0.last().unwrap());
        let t2 = cell_text(batch.rows[2].0.last().unwrap());
        assert_eq!(t1, t2);
        assert!(t1.ends_with("UTC"));
    }

    #[test]
    fn timestamp_column_absent_by_default() {
        let batch = build_batch(
            &[component("1:0", "a", 0)],
            &config_with(SyncOptions::default()),
            Utc::now(),
        );
        assert_eq!(batch.rows[0].0.len(), 5);
        assert_eq!(batch.rows[1].0.len(), 5);
    }
}
