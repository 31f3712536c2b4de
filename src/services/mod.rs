//! Service layer containing the generation logic and side-effect helpers.
//!
//! ## Service map
//! - `scan.rs` — non-recursive include-directory listing.
//! - `layout.rs` — include-layout classification policy.
//! - `modulemap.rs` — descriptor text rendering and writing.
//! - `generate.rs` — idempotent generation orchestration.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod generate;
pub mod layout;
pub mod modulemap;
pub mod output;
pub mod scan;
