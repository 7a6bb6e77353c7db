//! Order and report metadata extraction
//!
//! Dated fields share the [`DATE`] sub-pattern substituted into each label
//! context. The matched substring is kept verbatim.

use super::patterns::{compile, compile_all, first_capture, first_match, DATE};
use crate::domain::OrderInfo;
use regex::Regex;
use std::sync::LazyLock;

/// Known institutions, tried in order
static KNOWN_FACILITIES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)UDHRAN\s+HOSPITAL",
        r"(?i)PARIDHI\s+PATHOLOGY",
        r"(?i)DEPARTMENT\s+OF\s+PATHOLOGY",
    ])
});

static BILL_NO_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)Bill\s*No\b\.?\s*[:=]?\s*([A-Z0-9\-/]+)"]));

static BILL_DATE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| dated(&[r"Bill\s+Date\s*[:=]?\s*"]));

static ORDER_DATE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| dated(&[r"Order\s*Date\s*[:=]?\s*"]));

static REPORT_DATE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| dated(&[r"(?:Report|REP)\s*\.?\s*Date\s*[:=]?\s*"]));

static COLLECTION_DATE_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| dated(&[r"(?:Collec\.?|Collection)\s*Date\s*[:=]?\s*"]));

static SAMPLE_NO_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)Sample\s*(?:No|ID)\b\.?\s*[:=]?\s*([A-Z0-9\-]+)"]));

static SERVICE_NO_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(&[r"(?i)Service\s*No\b\s*[:=]?\s*([A-Z0-9]+)"]));

/// Builds case-insensitive patterns of `label` followed by the shared date.
fn dated(labels: &[&str]) -> Vec<Regex> {
    labels
        .iter()
        .map(|label| compile(&format!("(?i){label}{DATE}")))
        .collect()
}

/// Extracts order and report metadata from the whole report text.
pub fn extract_order_info(text: &str) -> OrderInfo {
    let order = OrderInfo {
        bill_no: first_capture(&BILL_NO_PATTERNS, text),
        bill_date: first_capture(&BILL_DATE_PATTERNS, text),
        order_date: first_capture(&ORDER_DATE_PATTERNS, text),
        report_date: first_capture(&REPORT_DATE_PATTERNS, text),
        collection_date: first_capture(&COLLECTION_DATE_PATTERNS, text),
        sample_no: first_capture(&SAMPLE_NO_PATTERNS, text),
        service_no: first_capture(&SERVICE_NO_PATTERNS, text),
        facility: resolve_facility(text),
    };

    tracing::debug!(
        report_date_found = order.report_date.is_some(),
        facility_found = order.facility.is_some(),
        "Order information extracted"
    );

    order
}

/// First known institution named anywhere in the text.
pub fn resolve_facility(text: &str) -> Option<String> {
    first_match(&KNOWN_FACILITIES, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_fields_share_date_pattern() {
        let text = "Bill Date : 12-Jan-2024 09:15 am\n\
                    Collection Date: 12-Jan-2024 10:02\n\
                    Report Date: 13/Jan/2024\n\
                    Order Date 11-Jan-24";
        let order = extract_order_info(text);

        assert_eq!(order.bill_date.as_deref(), Some("12-Jan-2024 09:15 am"));
        assert_eq!(order.collection_date.as_deref(), Some("12-Jan-2024 10:02"));
        assert_eq!(order.report_date.as_deref(), Some("13/Jan/2024"));
        assert_eq!(order.order_date.as_deref(), Some("11-Jan-24"));
    }

    #[test]
    fn test_abbreviated_labels() {
        let text = "REP. DATE : 02-Feb-2024\nCollec. Date: 01-Feb-2024";
        let order = extract_order_info(text);
        assert_eq!(order.report_date.as_deref(), Some("02-Feb-2024"));
        assert_eq!(order.collection_date.as_deref(), Some("01-Feb-2024"));
    }

    #[test]
    fn test_identifiers() {
        let text = "Bill No : BL/4521\nSample No: S-778\nService No : SRV20931";
        let order = extract_order_info(text);
        assert_eq!(order.bill_no.as_deref(), Some("BL/4521"));
        assert_eq!(order.sample_no.as_deref(), Some("S-778"));
        assert_eq!(order.service_no.as_deref(), Some("SRV20931"));
    }

    #[test]
    fn test_words_starting_with_no_are_not_identifiers() {
        let text = "SAMPLE NOT RECEIVED\nBill Notes pending\nService Now open";
        let order = extract_order_info(text);
        assert!(order.sample_no.is_none());
        assert!(order.bill_no.is_none());
        assert!(order.service_no.is_none());
    }

    #[test]
    fn test_unparseable_date_left_empty() {
        let order = extract_order_info("Report Date: 2024-01-13");
        assert!(order.report_date.is_none());
    }

    #[test]
    fn test_facility_first_known_wins() {
        let text = "Department of Pathology\nPARIDHI PATHOLOGY LAB";
        assert_eq!(resolve_facility(text).as_deref(), Some("PARIDHI PATHOLOGY"));
        assert_eq!(resolve_facility("City Clinic"), None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_order_info(""), OrderInfo::default());
    }
}
