//! # movesmith-types
//!
//! Shared data model for the movesmith assistant.
//!
//! ```text
//! instruction ──▶ Intent ──┐
//!                          ├──▶ generated Move source
//! GenerationParameters ────┘
//!
//! Move source ──▶ CodeContext (modules / structs / functions, append-only)
//! Move source ──▶ Vec<Finding> (warning / suggestion / confirmation)
//! ```
//!
//! Everything in here is plain data. The decision logic lives in the
//! `movesmith-intent`, `movesmith-templates`, `movesmith-context` and
//! `movesmith-review` crates.

#![deny(unsafe_code)]

pub mod context;
pub mod finding;
pub mod intent;
pub mod params;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use context::{CodeContext, ContextSnapshot, ExtractionSummary, OrderedSet};
pub use finding::{Finding, Severity};
pub use intent::Intent;
pub use params::{GenerationParameters, DEFAULT_ADDRESS};
