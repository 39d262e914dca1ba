//! # movesmith-context
//!
//! **Context Extractor** scans raw Move source for declarations and folds
//! them into an append-only [`CodeContext`](movesmith_types::CodeContext).
//!
//! Extraction works on text, not a syntax tree. Declarations inside comments
//! or string literals are collected like real ones.

#![deny(unsafe_code)]

pub mod extractor;
pub mod pattern;

pub use extractor::ContextExtractor;
pub use pattern::{
    Capture, DeclarationPattern, FUNCTION_DECLARATION, MODULE_DECLARATION, STRUCT_DECLARATION,
};
