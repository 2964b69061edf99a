use super::*;
use crate::net::api::FetchError;

const TODAY: &str = "2025-12-31";

fn ids(records: &[AllotmentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

fn loaded_state() -> AllotmentState {
    let mut state = AllotmentState::default();
    state.begin_load();
    state.finish_load(FetchOutcome::Failed(FetchError::Unavailable));
    state
}

// =============================================================
// Tab filtering
// =============================================================

#[test]
fn past_record_is_excluded_from_upcoming_and_included_in_past_and_all() {
    let records = demo_records();
    let upcoming = visible_records(&records, AllotmentTab::Upcoming, "", TODAY);
    let past = visible_records(&records, AllotmentTab::Past, "", TODAY);
    let all = visible_records(&records, AllotmentTab::All, "", TODAY);

    assert_eq!(ids(&upcoming), vec!["ea-1002", "ea-1003"]);
    assert_eq!(ids(&past), vec!["ea-1001"]);
    assert_eq!(ids(&all), vec!["ea-1001", "ea-1002", "ea-1003"]);
}

#[test]
fn record_dated_today_counts_as_upcoming() {
    assert!(tab_matches(AllotmentTab::Upcoming, "2025-12-31", TODAY));
    assert!(!tab_matches(AllotmentTab::Past, "2025-12-31", TODAY));
}

#[test]
fn time_of_day_is_ignored_for_tab_comparison() {
    let mut records = demo_records();
    records[1].exam_date = "2025-12-31T23:59:00".to_owned();
    let past = visible_records(&records, AllotmentTab::Past, "", TODAY);
    assert_eq!(ids(&past), vec!["ea-1001"]);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn output_is_sorted_ascending_under_every_tab() {
    let mut records = demo_records();
    records.reverse();
    for tab in AllotmentTab::ALL {
        for today in ["2025-01-01", TODAY, "2027-01-01"] {
            let out = visible_records(&records, tab, "", today);
            let dates: Vec<&str> = out.iter().map(|r| r.exam_date.as_str()).collect();
            let mut sorted = dates.clone();
            sorted.sort_unstable();
            assert_eq!(dates, sorted, "tab={tab:?} today={today}");
        }
    }
}

// =============================================================
// Summary
// =============================================================

#[test]
fn summary_counts_demo_set() {
    let summary = AllotmentSummary::from_records(&demo_records());
    assert_eq!(summary, AllotmentSummary { total: 3, allocated: 2, pending: 1, not_eligible: 0 });
}

#[test]
fn summary_is_invariant_under_tab_and_search() {
    let mut state = loaded_state();
    let baseline = state.summary();
    for tab in AllotmentTab::ALL {
        state.tab = tab;
        for query in ["", "networks", "zzz"] {
            state.query = query.to_owned();
            assert_eq!(state.summary(), baseline);
        }
    }
}

// =============================================================
// Search
// =============================================================

#[test]
fn search_matches_subject_name_case_insensitively() {
    let out = visible_records(&demo_records(), AllotmentTab::All, "NETWORKS", TODAY);
    assert_eq!(ids(&out), vec!["ea-1002"]);
}

#[test]
fn search_matches_room_code_and_hall_ticket() {
    let records = demo_records();
    assert_eq!(ids(&visible_records(&records, AllotmentTab::All, "b-204", TODAY)), vec!["ea-1001"]);
    assert_eq!(visible_records(&records, AllotmentTab::All, "ht2025cs", TODAY).len(), 3);
}

#[test]
fn search_matches_status_label() {
    let out = visible_records(&demo_records(), AllotmentTab::All, "pending", TODAY);
    assert_eq!(ids(&out), vec!["ea-1003"]);
}

#[test]
fn search_with_no_match_returns_empty() {
    assert!(visible_records(&demo_records(), AllotmentTab::All, "chemistry", TODAY).is_empty());
}

#[test]
fn blank_query_matches_everything() {
    assert!(demo_records().iter().all(|r| matches_query(r, "   ")));
}

#[test]
fn haystack_treats_missing_fields_as_empty() {
    let record = &demo_records()[2];
    let hay = search_haystack(record);
    assert!(hay.starts_with("2026-01-03 fn ma302"));
    assert!(hay.contains("pending"));
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_restores_upcoming_tab_and_clears_query() {
    let mut state = loaded_state();
    state.tab = AllotmentTab::Past;
    state.query = "networks".to_owned();
    state.reset();
    assert_eq!(state.tab, AllotmentTab::Upcoming);
    assert!(state.query.is_empty());

    state.reset();
    assert_eq!(state.tab, AllotmentTab::Upcoming);
}

// =============================================================
// Load
// =============================================================

#[test]
fn failed_load_shows_demo_records_and_stops_loading_once() {
    let mut state = AllotmentState::default();
    state.begin_load();
    assert!(state.loading);

    assert!(state.finish_load(FetchOutcome::Failed(FetchError::Status(503))));
    assert!(!state.loading);
    assert_eq!(state.records, demo_records());
    assert_eq!(state.origin, DataOrigin::SampleFallback("request failed: 503".to_owned()));

    assert!(!state.finish_load(FetchOutcome::Loaded(Vec::new())));
    assert_eq!(state.records, demo_records());
}

#[test]
fn empty_load_shows_demo_records_with_distinct_origin() {
    let mut state = AllotmentState::default();
    state.begin_load();
    state.finish_load(FetchOutcome::Empty);
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.origin, DataOrigin::SampleEmpty);
    assert!(state.origin.banner().is_some());
}

#[test]
fn live_load_replaces_records_wholesale() {
    let mut state = loaded_state();
    let mut live = demo_records();
    live.truncate(1);
    live[0].id = "live-1".to_owned();

    state.begin_load();
    state.finish_load(FetchOutcome::Loaded(live));
    assert_eq!(ids(&state.records), vec!["live-1"]);
    assert_eq!(state.origin, DataOrigin::Live);
    assert_eq!(state.origin.banner(), None);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut state = AllotmentState::default();
    assert!(!state.finish_load(FetchOutcome::Empty));
    assert!(state.records.is_empty());
    assert_eq!(state.origin, DataOrigin::NotLoaded);
}

#[test]
fn today_iso_is_calendar_date_shaped() {
    let today = today_iso();
    assert_eq!(today.len(), 10);
    assert_eq!(today.as_bytes()[4], b'-');
    assert_eq!(today.as_bytes()[7], b'-');
}

// =============================================================
// Date rollover
// =============================================================

#[test]
fn advance_today_ignores_same_date() {
    let mut today = TODAY.to_owned();
    assert!(!advance_today(&mut today, TODAY.to_owned()));
    assert_eq!(today, TODAY);
}

#[test]
fn rollover_moves_todays_exam_into_past() {
    let records = demo_records();
    let mut today = TODAY.to_owned();
    assert_eq!(ids(&visible_records(&records, AllotmentTab::Upcoming, "", &today)), vec!["ea-1002", "ea-1003"]);

    assert!(advance_today(&mut today, "2026-01-01".to_owned()));
    assert_eq!(today, "2026-01-01");
    assert_eq!(ids(&visible_records(&records, AllotmentTab::Upcoming, "", &today)), vec!["ea-1003"]);
    assert_eq!(ids(&visible_records(&records, AllotmentTab::Past, "", &today)), vec!["ea-1001", "ea-1002"]);
}
