//! Attendance HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AttendanceHandlers;
pub use routes::attendance_routes;
