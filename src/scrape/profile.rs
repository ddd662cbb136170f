//! Student profile extraction.
//!
//! The profile page spreads label/value pairs across several small tables
//! instead of one tabular listing, so extraction flattens every two-cell row
//! it can find into a single map. Later duplicates overwrite earlier ones.

use scraper::{Html, Selector};
use std::collections::BTreeMap;

use crate::error::GatewayError;
use crate::portal::{actions, PortalSession};

use super::table::cell_text;

/// Flatten every two-`<td>` row in the document into label/value pairs.
/// Rows with any other cell count are skipped. An empty map means no pair
/// was found anywhere, which callers treat as an extraction miss.
pub fn extract(html: &str) -> BTreeMap<String, String> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse("table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    let mut profile = BTreeMap::new();
    for table in document.select(&table_sel) {
        for tr in table.select(&tr_sel) {
            let cells: Vec<_> = tr.select(&td_sel).collect();
            if let [label, value] = cells[..] {
                profile.insert(cell_text(label), cell_text(value));
            }
        }
    }
    profile
}

/// Fetch the profile page through `session` and extract it.
pub async fn scrape(session: &PortalSession) -> Result<BTreeMap<String, String>, GatewayError> {
    let html = session.fetch_page(actions::PROFILE).await?;
    Ok(extract(&html))
}
