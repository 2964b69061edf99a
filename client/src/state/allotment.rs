//! Exam-allotment view state and its pure derivations.
//!
//! DESIGN
//! ======
//! The record set is replaced wholesale by a single load per activation and is
//! never mutated afterwards. Everything the table shows (tab/search subset,
//! ordering, summary counts) is recomputed from `records` + UI fields, so the
//! derivations are plain functions that tests can drive without a runtime.
//!
//! Summary counts ignore tab and search: they describe the
//! user's full schedule, not the current view.

#[cfg(test)]
#[path = "allotment_test.rs"]
mod allotment_test;

use crate::net::api::FetchOutcome;
use crate::net::types::{AllotmentRecord, AllotmentStatus};

/// Mutually exclusive date filter over the record set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AllotmentTab {
    #[default]
    Upcoming,
    Past,
    All,
}

impl AllotmentTab {
    pub const ALL: [Self; 3] = [Self::Upcoming, Self::Past, Self::All];

    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Past => "Past",
            Self::All => "All",
        }
    }
}

/// Where the displayed records came from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataOrigin {
    /// Nothing loaded yet.
    #[default]
    NotLoaded,
    Live,
    /// Service answered with an empty list; samples shown instead.
    SampleEmpty,
    /// Service failed; samples shown instead. Carries a display message.
    SampleFallback(String),
}

impl DataOrigin {
    /// Banner text, or `None` when live data needs no explanation.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::NotLoaded | Self::Live => None,
            Self::SampleEmpty => Some("No allotments published yet. Showing sample schedule.".to_owned()),
            Self::SampleFallback(msg) => Some(format!("Allotment service unavailable ({msg}). Showing sample schedule.")),
        }
    }
}

/// Counts over the full record set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllotmentSummary {
    pub total: usize,
    pub allocated: usize,
    pub pending: usize,
    pub not_eligible: usize,
}

impl AllotmentSummary {
    pub fn from_records(records: &[AllotmentRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                AllotmentStatus::Allocated => acc.allocated += 1,
                AllotmentStatus::Pending => acc.pending += 1,
                AllotmentStatus::NotEligible => acc.not_eligible += 1,
            }
            acc
        })
    }
}

/// Allotment page state.
#[derive(Clone, Debug, Default)]
pub struct AllotmentState {
    pub records: Vec<AllotmentRecord>,
    pub loading: bool,
    pub origin: DataOrigin,
    pub tab: AllotmentTab,
    pub query: String,
}

impl AllotmentState {
    /// Mark a load as in flight.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a load outcome. Ignored unless a load is pending, so `loading`
    /// drops from true to false exactly once per `begin_load`.
    /// Returns whether the outcome was applied.
    pub fn finish_load(&mut self, outcome: FetchOutcome) -> bool {
        if !self.loading {
            return false;
        }
        match outcome {
            FetchOutcome::Loaded(items) => {
                log::info!("allotment: loaded {} records", items.len());
                self.records = items;
                self.origin = DataOrigin::Live;
            }
            FetchOutcome::Empty => {
                log::info!("allotment: service returned no records, using samples");
                self.records = demo_records();
                self.origin = DataOrigin::SampleEmpty;
            }
            FetchOutcome::Failed(err) => {
                log::warn!("allotment: load failed code={} err={err}", err.code());
                self.records = demo_records();
                self.origin = DataOrigin::SampleFallback(err.to_string());
            }
        }
        self.loading = false;
        true
    }

    /// Clear the search text and return to the upcoming tab.
    pub fn reset(&mut self) {
        self.query.clear();
        self.tab = AllotmentTab::Upcoming;
    }

    pub fn summary(&self) -> AllotmentSummary {
        AllotmentSummary::from_records(&self.records)
    }

    pub fn visible(&self, today: &str) -> Vec<AllotmentRecord> {
        visible_records(&self.records, self.tab, &self.query, today)
    }
}

/// Whether a record dated `date_key` belongs under `tab` relative to `today`.
/// Both dates are compared as ISO `YYYY-MM-DD` strings.
pub fn tab_matches(tab: AllotmentTab, date_key: &str, today: &str) -> bool {
    match tab {
        AllotmentTab::Upcoming => date_key >= today,
        AllotmentTab::Past => date_key < today,
        AllotmentTab::All => true,
    }
}

/// Lowercased text searched by the free-text query.
pub fn search_haystack(record: &AllotmentRecord) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();
    [
        record.exam_date.clone(),
        record.session.clone(),
        record.subject_code.clone(),
        record.subject_name.clone(),
        record.room_code.clone(),
        opt(&record.building),
        opt(&record.seat_no),
        record.status.as_str().to_owned(),
        opt(&record.hall_ticket_no),
    ]
    .join(" ")
    .to_lowercase()
}

pub fn matches_query(record: &AllotmentRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || search_haystack(record).contains(&needle)
}

/// Tab + search subset, sorted ascending by exam date (stable).
pub fn visible_records(records: &[AllotmentRecord], tab: AllotmentTab, query: &str, today: &str) -> Vec<AllotmentRecord> {
    let mut out: Vec<AllotmentRecord> = records
        .iter()
        .filter(|r| tab_matches(tab, r.date_key(), today))
        .filter(|r| matches_query(r, query))
        .cloned()
        .collect();
    out.sort_by(|a, b| a.exam_date.cmp(&b.exam_date));
    out
}

/// Client-local calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// How often a mounted page re-reads the calendar date.
pub const DATE_CHECK_SECS: u64 = 60;

/// Move `current` to `now` if the calendar date has rolled over.
/// Returns whether it changed.
pub fn advance_today(current: &mut String, now: String) -> bool {
    if *current == now {
        return false;
    }
    log::debug!("allotment: date rolled over {current} -> {now}");
    *current = now;
    true
}

/// Built-in sample schedule shown when the service has nothing to offer.
pub fn demo_records() -> Vec<AllotmentRecord> {
    vec![
        AllotmentRecord {
            id: "ea-1001".to_owned(),
            exam_date: "2025-12-29".to_owned(),
            session: "FN".to_owned(),
            subject_code: "CS301".to_owned(),
            subject_name: "Operating Systems".to_owned(),
            start_time: "09:30".to_owned(),
            end_time: "12:30".to_owned(),
            room_code: "B-204".to_owned(),
            building: Some("Block B".to_owned()),
            room_name: Some("Seminar Hall 2".to_owned()),
            seat_no: Some("B204-17".to_owned()),
            token: Some("T-0417".to_owned()),
            venue_note: Some("Enter via east stairwell".to_owned()),
            hall_ticket_no: Some("HT2025CS0417".to_owned()),
            status: AllotmentStatus::Allocated,
            reason: None,
            allocated_by: Some("Exam Cell".to_owned()),
            allocated_at: Some("2025-12-20T10:15:00Z".to_owned()),
        },
        AllotmentRecord {
            id: "ea-1002".to_owned(),
            exam_date: "2025-12-31".to_owned(),
            session: "AN".to_owned(),
            subject_code: "CS305".to_owned(),
            subject_name: "Computer Networks".to_owned(),
            start_time: "14:00".to_owned(),
            end_time: "17:00".to_owned(),
            room_code: "A-112".to_owned(),
            building: Some("Block A".to_owned()),
            room_name: Some("Lab Wing 1".to_owned()),
            seat_no: Some("A112-05".to_owned()),
            token: None,
            venue_note: None,
            hall_ticket_no: Some("HT2025CS0417".to_owned()),
            status: AllotmentStatus::Allocated,
            reason: None,
            allocated_by: Some("Exam Cell".to_owned()),
            allocated_at: Some("2025-12-21T08:40:00Z".to_owned()),
        },
        AllotmentRecord {
            id: "ea-1003".to_owned(),
            exam_date: "2026-01-03".to_owned(),
            session: "FN".to_owned(),
            subject_code: "MA302".to_owned(),
            subject_name: "Probability & Statistics".to_owned(),
            start_time: "09:30".to_owned(),
            end_time: "12:30".to_owned(),
            room_code: String::new(),
            building: None,
            room_name: None,
            seat_no: None,
            token: None,
            venue_note: None,
            hall_ticket_no: Some("HT2025CS0417".to_owned()),
            status: AllotmentStatus::Pending,
            reason: Some("Seat plan not yet published".to_owned()),
            allocated_by: None,
            allocated_at: None,
        },
    ]
}
