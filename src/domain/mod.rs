//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report/output structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — salary statistics, per-department averages, the
//!   combined `--json` report, and the output envelope.
//!
//! ## Rule of thumb
//! Domain types are data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` output and the contract
//! schema under `docs/contracts/`. Keep both synchronized.

pub mod models;
