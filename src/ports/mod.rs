//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod session_store;

pub use session_store::{CheckInOutcome, SessionSnapshot, SessionStore};
