//! Course attendance extraction.

use scraper::Html;

use crate::error::GatewayError;
use crate::portal::{actions, PortalSession};

use super::table::{find_table, table_to_rows, Extraction};

const KEYWORDS: &[&str] = &["Attendance %"];

/// Extract the attendance table from raw page HTML.
pub fn extract(html: &str) -> Extraction {
    let document = Html::parse_document(html);
    table_to_rows(find_table(&document, KEYWORDS))
}

/// Fetch the attendance page through `session` and extract it.
pub async fn scrape(session: &PortalSession) -> Result<Extraction, GatewayError> {
    let html = session.fetch_page(actions::ATTENDANCE).await?;
    Ok(extract(&html))
}
