//! Adapters - Implementations of ports for concrete technologies.
//!
//! - `http` - axum REST adapters per domain area
//! - `storage` - in-memory session store

pub mod http;
pub mod storage;
