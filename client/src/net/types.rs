//! Wire DTOs for the exam-allotment endpoint.
//!
//! DESIGN
//! ======
//! Field names follow the camelCase JSON the portal API emits so records can
//! be deserialized directly and re-serialized unchanged for export. The
//! envelope is strict; its items are decoded individually.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Allocation outcome for one exam sitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllotmentStatus {
    Allocated,
    Pending,
    NotEligible,
}

impl AllotmentStatus {
    /// Wire label, also used for search matching.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allocated => "ALLOCATED",
            Self::Pending => "PENDING",
            Self::NotEligible => "NOT_ELIGIBLE",
        }
    }

    /// Human-facing label for table badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Allocated => "Allocated",
            Self::Pending => "Pending",
            Self::NotEligible => "Not eligible",
        }
    }
}

/// One exam-room allocation as delivered by the portal API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllotmentRecord {
    pub id: String,
    /// ISO calendar date (`YYYY-MM-DD`), optionally followed by a time part.
    pub exam_date: String,
    /// Named slot, e.g. `FN` / `AN`.
    pub session: String,
    pub subject_code: String,
    pub subject_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub room_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hall_ticket_no: Option<String>,
    pub status: AllotmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_at: Option<String>,
}

impl AllotmentRecord {
    /// Calendar-date prefix of `exam_date`, ignoring any time-of-day suffix.
    pub fn date_key(&self) -> &str {
        self.exam_date.get(..10).unwrap_or(&self.exam_date)
    }

    /// Whether the room assignment is usable. Only meaningful for
    /// `Allocated`; other statuses never carry a placement.
    pub fn has_placement(&self) -> bool {
        self.status == AllotmentStatus::Allocated && !self.room_code.trim().is_empty()
    }
}

/// Envelope returned by `GET /api/exam-allotment`.
///
/// Items stay raw here and are decoded one by one, so a single record with
/// an unknown status or a missing field does not discard the rest.
#[derive(Clone, Debug, Deserialize)]
pub struct AllotmentResponse {
    pub ok: bool,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

impl AllotmentResponse {
    /// Decode every item that parses as a record. Returns the records and
    /// the number of items skipped.
    pub fn decode_items(self) -> (Vec<AllotmentRecord>, usize) {
        let total = self.items.len();
        let records: Vec<AllotmentRecord> = self
            .items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("allotment: skipping undecodable item err={e}");
                    None
                }
            })
            .collect();
        let skipped = total - records.len();
        (records, skipped)
    }
}
