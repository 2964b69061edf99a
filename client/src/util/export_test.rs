use chrono::NaiveDate;

use super::*;
use crate::state::allotment::demo_records;

#[test]
fn export_filename_embeds_timestamp() {
    let now = NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|d| d.and_hms_opt(14, 25, 1))
        .unwrap();
    assert_eq!(export_filename(now), "exam-allotment-20251231-142501.json");
}

#[test]
fn export_payload_is_pretty_json_of_given_records() {
    let mut records = demo_records();
    records.truncate(2);
    let payload = export_payload(&records).unwrap();

    assert!(payload.contains('\n'));
    let parsed: Vec<AllotmentRecord> = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn export_payload_of_empty_view_is_empty_array() {
    assert_eq!(export_payload(&[]).unwrap(), "[]");
}

#[test]
fn object_url_outlives_the_click() {
    assert!(REVOKE_DELAY_MS > 0);
}

#[test]
fn download_outside_browser_is_a_no_op() {
    let payload = export_payload(&demo_records()).unwrap();
    download_json("exam-allotment-test.json", &payload);
}
