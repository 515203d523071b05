//! Session command and query handlers.

mod end_session;
mod get_session;
mod start_session;

pub use end_session::{EndSessionCommand, EndSessionHandler};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use start_session::{StartSessionCommand, StartSessionHandler, StartSessionResult};
