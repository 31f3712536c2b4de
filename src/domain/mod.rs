//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep module/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — module descriptor, layout tags, report/output structs.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.

pub mod models;
