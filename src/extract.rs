// src/extract.rs

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Class marker carried by the fee table on the item page.
const TABLE_SELECTOR: &str = "table.table";

/// Decorative symbols prefixed to some item names in the source markup.
const ITEM_MARKERS: &[char] = &['◆', '◇'];

/// One row of the fee table: all fields are cleaned free-form text.
/// Prices stay as text since the source mixes ranges, units and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub category: String,
    pub item_name: String,
    pub price: String,
}

/// Result of one pass over the fee table.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<FeeRecord>,
    /// Data rows dropped for having fewer than four cells.
    pub skipped_rows: usize,
}

/// Collapse whitespace runs (newlines, tabs, ideographic spaces) into single
/// spaces and trim the ends.
fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Text content of a cell, with element boundaries (`<br>`, nested `<div>`s)
/// joined by a single space.
fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<Vec<_>>().join(" ")
}

/// Parse the fee page and pull one record per data row of the fee table.
///
/// The first `tr` is the header and is skipped. Rows with fewer than four
/// cells are counted in `skipped_rows` and otherwise ignored, so a partial
/// layout change shows up in the count rather than halting the pass.
#[tracing::instrument(level = "info", skip(html))]
pub fn extract_fee_records(html: &str) -> Result<Extraction> {
    let table_sel =
        Selector::parse(TABLE_SELECTOR).expect("CSS selector for the fee table should be valid");
    let row_sel = Selector::parse("tr").expect("CSS selector for table rows should be valid");
    let cell_sel = Selector::parse("td").expect("CSS selector for table cells should be valid");

    let doc = Html::parse_document(html);
    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| anyhow!("no `{}` element in fetched page", TABLE_SELECTOR))?;

    let mut out = Extraction::default();
    for row in table.select(&row_sel).skip(1) {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.len() < 4 {
            out.skipped_rows += 1;
            continue;
        }

        let category = clean_text(&cell_text(cells[1]));
        let item_name = clean_text(&cell_text(cells[2]).replace(ITEM_MARKERS, ""));
        let price = clean_text(&cell_text(cells[3]));

        out.records.push(FeeRecord {
            category,
            item_name,
            price,
        });
    }

    debug!(
        records = out.records.len(),
        skipped = out.skipped_rows,
        "fee table pass complete"
    );
    Ok(out)
}
