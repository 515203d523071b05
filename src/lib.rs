//! Rollcall - Attendance Session Service
//!
//! This crate implements time-boxed attendance sessions: an instructor
//! starts a session for a subject, students check in once each by roll
//! number, and the session stays queryable after it ends or expires.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
