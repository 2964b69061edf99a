use super::*;
use crate::state::allotment::demo_records;

#[test]
fn room_text_includes_building_and_room_name() {
    let records = demo_records();
    assert_eq!(room_text(&records[0]), "B-204 · Block B (Seminar Hall 2)");
}

#[test]
fn room_text_marks_allocated_rows_without_room() {
    let mut record = demo_records().remove(0);
    record.room_code.clear();
    assert_eq!(room_text(&record), "Room TBA");
}

#[test]
fn room_text_is_dash_for_pending_rows() {
    assert_eq!(room_text(&demo_records()[2]), "—");
}

#[test]
fn status_class_maps_each_status() {
    assert_eq!(status_class(AllotmentStatus::Allocated), "badge badge--ok");
    assert_eq!(status_class(AllotmentStatus::Pending), "badge badge--warn");
    assert_eq!(status_class(AllotmentStatus::NotEligible), "badge badge--danger");
}
