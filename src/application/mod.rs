//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::attendance::{
    CheckInCommand, CheckInHandler, CheckInResult, ListAttendeesHandler, ListAttendeesQuery,
};
pub use handlers::session::{
    EndSessionCommand, EndSessionHandler, GetSessionHandler, GetSessionQuery, StartSessionCommand,
    StartSessionHandler, StartSessionResult,
};
