//! Attendee record value object.

use crate::domain::foundation::Timestamp;
use serde::Serialize;

use super::RollNumber;

/// One admitted check-in: who, and when the ledger admitted them.
///
/// The timestamp is assigned by the ledger at admission and is never
/// taken from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendeeRecord {
    roll_no: RollNumber,
    checked_in_at: Timestamp,
}

impl AttendeeRecord {
    /// Creates a record for a roll number admitted at `checked_in_at`.
    pub fn new(roll_no: RollNumber, checked_in_at: Timestamp) -> Self {
        Self {
            roll_no,
            checked_in_at,
        }
    }

    /// Returns the roll number.
    pub fn roll_no(&self) -> &RollNumber {
        &self.roll_no
    }

    /// Returns when the check-in was admitted.
    pub fn checked_in_at(&self) -> &Timestamp {
        &self.checked_in_at
    }
}
