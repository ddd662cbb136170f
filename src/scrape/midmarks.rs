//! Mid-term marks extraction.
//!
//! The marks page renders two independent tables, one for theory courses and
//! one for laboratory work, so the extraction result keeps them apart.

use scraper::Html;

use crate::error::GatewayError;
use crate::portal::{actions, PortalSession};

use super::table::{find_table, table_to_rows, Extraction};

const THEORY_KEYWORDS: &[&str] = &["CIE-I", "Total Marks"];
const LAB_KEYWORDS: &[&str] = &["Day to Day Marks", "Week 1"];

/// Mid-term marks, split the way the portal renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidMarks {
    pub theory: Extraction,
    pub laboratory: Extraction,
}

/// Extract both marks tables from raw page HTML. Either side can miss
/// independently; a fresh semester often has no laboratory table yet.
pub fn extract(html: &str) -> MidMarks {
    let document = Html::parse_document(html);
    MidMarks {
        theory: table_to_rows(find_table(&document, THEORY_KEYWORDS)),
        laboratory: table_to_rows(find_table(&document, LAB_KEYWORDS)),
    }
}

/// Fetch the marks page through `session` and extract it.
pub async fn scrape(session: &PortalSession) -> Result<MidMarks, GatewayError> {
    let html = session.fetch_page(actions::MID_MARKS).await?;
    Ok(extract(&html))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html><body>
      <table>
        <tr><th>Course</th><th>CIE-I</th><th>Total Marks</th></tr>
        <tr><td>Data Structures</td><td>18</td><td>27</td></tr>
      </table>
      <table>
        <tr><th>Lab</th><th>Day to Day Marks</th><th>Week 1</th></tr>
        <tr><td>DS Lab</td><td>14</td><td>9</td></tr>
      </table>
    </body></html>
    "#;

    #[test]
    fn test_extracts_both_tables() {
        let marks = extract(PAGE);
        let theory = marks.theory.into_rows();
        let lab = marks.laboratory.into_rows();
        assert_eq!(theory.len(), 1);
        assert_eq!(theory[0]["CIE-I"], "18");
        assert_eq!(lab.len(), 1);
        assert_eq!(lab[0]["Week 1"], "9");
    }

    #[test]
    fn test_sides_miss_independently() {
        let theory_only = r#"
        <table>
          <tr><th>Course</th><th>CIE-I</th><th>Total Marks</th></tr>
          <tr><td>Maths</td><td>20</td><td>29</td></tr>
        </table>
        "#;
        let marks = extract(theory_only);
        assert!(!marks.theory.is_missing());
        assert!(marks.laboratory.is_missing());
    }
}
