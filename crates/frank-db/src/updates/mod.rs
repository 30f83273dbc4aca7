//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are serialized into the PATCH body; `Some(None)` clears a nullable
//! column.

pub mod goal;
pub mod review;
pub mod todo;
pub mod value;
pub mod weekly_plan;
