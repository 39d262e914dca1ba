//! # movesmith-assistant
//!
//! The **assistant facade** is the single entry point that wires the classifier,
//! template catalog, context extractor, reviewer and concept glossary
//! together, and owns the accumulated [`CodeContext`](movesmith_types::CodeContext).
//!
//! ```text
//!  instruction ──► IntentClassifier ──► TemplateCatalog ──► Move source
//!  concept     ──► ConceptGlossary  ──► explanation
//!  code        ──► CodeReviewer     ──► findings
//!  code        ──► ContextExtractor ──► CodeContext (only mutation)
//! ```
//!
//! [`Assistant`] is single-owner. Wrap it in [`SharedAssistant`] when
//! several tasks need it at once.

#![deny(unsafe_code)]

pub mod assistant;
pub mod concepts;
pub mod shared;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use assistant::Assistant;
pub use concepts::{ConceptEntry, ConceptGlossary, CONCEPTS, CONCEPT_NOT_FOUND};
pub use shared::SharedAssistant;

pub use movesmith_templates::FALLBACK_MESSAGE;
pub use movesmith_types::{
    CodeContext, ContextSnapshot, ExtractionSummary, Finding, GenerationParameters, Intent,
    Severity,
};
