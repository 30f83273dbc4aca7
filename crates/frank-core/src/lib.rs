//! # frank-core
//!
//! Core types shared by every frank crate.
//!
//! - Record structs for the planner tables (values, goals, weekly plans,
//!   to-dos, reviews)
//! - Enums for quadrants, tables, goal and review kinds
//! - Calendar helpers (default week, week of month, overdue checks)
//! - Pure view builders over already-fetched rows
//! - Cross-cutting error types and CLI response shapes

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod text;
pub mod views;
