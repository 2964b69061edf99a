use super::*;

#[test]
fn classify_ok_with_items_is_loaded() {
    let body = r#"{
        "ok": true,
        "items": [{
            "id": "x1",
            "examDate": "2026-02-10",
            "session": "AN",
            "subjectCode": "PH101",
            "subjectName": "Physics",
            "startTime": "14:00",
            "endTime": "17:00",
            "roomCode": "C-010",
            "status": "ALLOCATED"
        }]
    }"#;
    match classify_allotment_body(body) {
        FetchOutcome::Loaded(items) => {
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].room_code, "C-010");
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn classify_skips_item_with_unknown_status_and_keeps_the_rest() {
    let body = r#"{
        "ok": true,
        "items": [
            {"id": "x1", "examDate": "2026-02-10", "session": "AN", "subjectCode": "PH101",
             "subjectName": "Physics", "startTime": "14:00", "endTime": "17:00",
             "roomCode": "C-010", "status": "ALLOCATED"},
            {"id": "x2", "examDate": "2026-02-11", "session": "FN", "subjectCode": "PH102",
             "subjectName": "Optics", "startTime": "09:30", "endTime": "12:30",
             "status": "WITHDRAWN"},
            {"id": "x3", "examDate": "2026-02-12", "session": "FN", "subjectCode": "PH103",
             "subjectName": "Mechanics", "startTime": "09:30", "endTime": "12:30",
             "status": "PENDING"}
        ]
    }"#;
    match classify_allotment_body(body) {
        FetchOutcome::Loaded(items) => {
            let ids: Vec<&str> = items.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["x1", "x3"]);
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

#[test]
fn classify_with_only_undecodable_items_is_malformed() {
    let body = r#"{"ok": true, "items": [{"id": "x2", "status": "WITHDRAWN"}, 42]}"#;
    assert!(matches!(
        classify_allotment_body(body),
        FetchOutcome::Failed(FetchError::Malformed(_))
    ));
}

#[test]
fn classify_ok_with_no_items_is_empty() {
    assert_eq!(classify_allotment_body(r#"{"ok": true, "items": []}"#), FetchOutcome::Empty);
    assert_eq!(classify_allotment_body(r#"{"ok": true}"#), FetchOutcome::Empty);
}

#[test]
fn classify_not_ok_is_rejected() {
    assert_eq!(
        classify_allotment_body(r#"{"ok": false, "items": []}"#),
        FetchOutcome::Failed(FetchError::Rejected)
    );
}

#[test]
fn classify_invalid_json_is_malformed() {
    assert!(matches!(
        classify_allotment_body("<html>502</html>"),
        FetchOutcome::Failed(FetchError::Malformed(_))
    ));
    assert!(matches!(
        classify_allotment_body(r#"{"items": []}"#),
        FetchOutcome::Failed(FetchError::Malformed(_))
    ));
}

#[test]
fn fetch_error_codes_and_messages() {
    assert_eq!(FetchError::Status(401).code(), "E_STATUS");
    assert_eq!(FetchError::Status(401).to_string(), "request failed: 401");
    assert_eq!(FetchError::Rejected.code(), "E_REJECTED");
    assert_eq!(FetchError::Transport("reset".to_owned()).code(), "E_TRANSPORT");
    assert_eq!(FetchError::Unavailable.code(), "E_UNAVAILABLE");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_outside_browser_is_unavailable() {
    let outcome = futures::executor::block_on(fetch_allotments(&PortalConfig::default()));
    assert_eq!(outcome, FetchOutcome::Failed(FetchError::Unavailable));
}
