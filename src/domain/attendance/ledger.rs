//! Attendance ledger: the ordered check-in list for one session.

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use serde::Serialize;

use super::{AttendeeRecord, RollNumber};

/// Ordered collection of admitted check-ins for a single session.
///
/// Created empty when its session starts and kept for the session's whole
/// lifetime, including after it ends. Append order is display order.
///
/// # Invariants
///
/// - no two records share a roll number under case-insensitive comparison
///
/// The ledger itself is not thread-safe; the storage layer serializes
/// access per session so the duplicate check and the append happen as one
/// critical section.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AttendanceLedger {
    records: Vec<AttendeeRecord>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Admits a check-in, stamping it with `now`.
    ///
    /// Returns the new total attendee count.
    ///
    /// # Errors
    ///
    /// - `DuplicateCheckIn` if the roll number is already present
    ///   (case-insensitive)
    pub fn check_in(&mut self, roll_no: RollNumber, now: Timestamp) -> Result<u32, DomainError> {
        if self.contains(&roll_no) {
            return Err(DomainError::new(
                ErrorCode::DuplicateCheckIn,
                format!("Student '{}' already checked in", roll_no),
            )
            .with_detail("roll_no", roll_no.as_str()));
        }

        self.records.push(AttendeeRecord::new(roll_no, now));
        Ok(self.count())
    }

    /// Returns true if the roll number is already recorded (case-insensitive).
    pub fn contains(&self, roll_no: &RollNumber) -> bool {
        self.records.iter().any(|r| r.roll_no().matches(roll_no))
    }

    /// Returns the records in check-in order.
    pub fn records(&self) -> &[AttendeeRecord] {
        &self.records
    }

    /// Returns the number of admitted check-ins.
    pub fn count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Returns true if nobody has checked in.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(s: &str) -> RollNumber {
        RollNumber::new(s).unwrap()
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = AttendanceLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn check_in_returns_running_count() {
        let mut ledger = AttendanceLedger::new();
        assert_eq!(ledger.check_in(roll("A-101"), Timestamp::now()).unwrap(), 1);
        assert_eq!(ledger.check_in(roll("A-102"), Timestamp::now()).unwrap(), 2);
    }

    #[test]
    fn duplicate_check_in_is_rejected() {
        let mut ledger = AttendanceLedger::new();
        ledger.check_in(roll("A-101"), Timestamp::now()).unwrap();

        let result = ledger.check_in(roll("A-101"), Timestamp::now());
        assert!(matches!(result, Err(e) if e.code == ErrorCode::DuplicateCheckIn));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn duplicate_check_is_case_insensitive() {
        let mut ledger = AttendanceLedger::new();
        ledger.check_in(roll("A-101"), Timestamp::now()).unwrap();

        let result = ledger.check_in(roll("a-101"), Timestamp::now());
        assert!(matches!(result, Err(e) if e.code == ErrorCode::DuplicateCheckIn));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn rejected_check_in_does_not_alter_the_ledger() {
        let mut ledger = AttendanceLedger::new();
        ledger.check_in(roll("A-101"), Timestamp::now()).unwrap();
        let before = ledger.records().to_vec();

        let _ = ledger.check_in(roll("a-101"), Timestamp::now());
        assert_eq!(ledger.records(), before.as_slice());
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut ledger = AttendanceLedger::new();
        ledger.check_in(roll("C-3"), Timestamp::now()).unwrap();
        ledger.check_in(roll("A-1"), Timestamp::now()).unwrap();
        ledger.check_in(roll("B-2"), Timestamp::now()).unwrap();

        let order: Vec<&str> = ledger
            .records()
            .iter()
            .map(|r| r.roll_no().as_str())
            .collect();
        assert_eq!(order, vec!["C-3", "A-1", "B-2"]);
    }

    #[test]
    fn check_in_stamps_the_supplied_timestamp() {
        let mut ledger = AttendanceLedger::new();
        let at = Timestamp::now();
        ledger.check_in(roll("A-101"), at).unwrap();
        assert_eq!(ledger.records()[0].checked_in_at(), &at);
    }

    #[test]
    fn contains_matches_case_variants() {
        let mut ledger = AttendanceLedger::new();
        ledger.check_in(roll("AbC-9"), Timestamp::now()).unwrap();
        assert!(ledger.contains(&roll("abc-9")));
        assert!(ledger.contains(&roll("ABC-9")));
        assert!(!ledger.contains(&roll("abc-8")));
    }
}
