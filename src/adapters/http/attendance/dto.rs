//! HTTP DTOs for attendance endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::attendance::AttendeeRecord;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to check a student in.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub roll_no: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for an admitted check-in.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResponse {
    pub ok: bool,
    pub total: u32,
}

/// One attendee in a session view or list.
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeResponse {
    pub roll_no: String,
    pub checked_in_at: String,
}

impl From<&AttendeeRecord> for AttendeeResponse {
    fn from(record: &AttendeeRecord) -> Self {
        Self {
            roll_no: record.roll_no().as_str().to_string(),
            checked_in_at: record.checked_in_at().to_rfc3339(),
        }
    }
}

/// Attendee list in check-in order.
#[derive(Debug, Clone, Serialize)]
pub struct AttendeeListResponse {
    pub attendees_count: u32,
    pub attendees: Vec<AttendeeResponse>,
}

impl From<Vec<AttendeeRecord>> for AttendeeListResponse {
    fn from(records: Vec<AttendeeRecord>) -> Self {
        Self {
            attendees_count: records.len() as u32,
            attendees: records.iter().map(Into::into).collect(),
        }
    }
}
