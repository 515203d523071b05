//! Attendance domain module.
//!
//! Owns everything about check-ins: the validated roll number value
//! object, the per-check-in record, and the ordered ledger that admits or
//! rejects check-ins for one session.

mod errors;
mod ledger;
mod record;
mod roll_number;

pub use errors::AttendanceError;
pub use ledger::AttendanceLedger;
pub use record::AttendeeRecord;
pub use roll_number::{RollNumber, MAX_ROLL_NO_LENGTH};
