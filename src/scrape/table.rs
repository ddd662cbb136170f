//! Keyword-anchored table extraction.
//!
//! The portal offers no stable ids or classes, so tables are located by the
//! header phrases they must contain and converted generically: the first
//! header row names the columns, and only data rows with exactly that many
//! cells survive. Everything here is synchronous and operates on a parsed
//! [`Html`] document.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// One extracted table row: column header → trimmed cell text.
pub type Row = BTreeMap<String, String>;

/// Outcome of extracting a keyword-matched table.
///
/// `Missing` means the page no longer carries a matching table (or the match
/// lost its header row), the signal that the upstream markup changed. On the
/// wire a miss still degrades to an empty list; callers decide whether to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Table located with a header row; the row list may legitimately be empty.
    Found(Vec<Row>),
    /// No table matched the keywords, or the match had no header cells.
    Missing,
}

impl Extraction {
    /// Rows for the response body; a miss degrades to an empty list.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Self::Found(rows) => rows,
            Self::Missing => Vec::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// Find the first table whose full text contains every keyword.
///
/// Tables are scanned in document order (nested tables included, outer
/// first). Matching is case-sensitive substring containment over the
/// concatenated text of the whole table, with no tokenization.
pub fn find_table<'a>(document: &'a Html, keywords: &[&str]) -> Option<ElementRef<'a>> {
    let table_sel = Selector::parse("table").unwrap();
    document.select(&table_sel).find(|table| {
        let text: String = table.text().collect();
        keywords.iter().all(|kw| text.contains(kw))
    })
}

/// Convert a located table into row mappings.
///
/// Column names come from the first row that carries `<th>` cells; every
/// later row contributes a mapping iff its `<td>` count exactly equals the
/// header count. Mismatched rows are dropped silently; the portal pads its
/// tables with spanning separator rows that carry no data.
pub fn table_to_rows(table: Option<ElementRef<'_>>) -> Extraction {
    let Some(table) = table else {
        return Extraction::Missing;
    };

    let tr_sel = Selector::parse("tr").unwrap();
    let th_sel = Selector::parse("th").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    let mut row_iter = table.select(&tr_sel);

    let mut headers: Vec<String> = Vec::new();
    for tr in row_iter.by_ref() {
        let found: Vec<String> = tr.select(&th_sel).map(cell_text).collect();
        if !found.is_empty() {
            headers = found;
            break;
        }
    }
    if headers.is_empty() {
        return Extraction::Missing;
    }

    let mut rows = Vec::new();
    for tr in row_iter {
        let cells: Vec<String> = tr.select(&td_sel).map(cell_text).collect();
        if cells.len() == headers.len() {
            rows.push(headers.iter().cloned().zip(cells).collect());
        }
    }

    Extraction::Found(rows)
}

/// Concatenated text of a cell, trimmed of surrounding whitespace.
pub(crate) fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
