//! # movesmith-intent
//!
//! **Intent Classifier** resolves a free-form instruction to exactly one
//! [`Intent`].
//!
//! The input is lowercased, then checked against an ordered rule table.
//! The first rule with any keyword contained in the text wins, even when a
//! later rule would also match:
//!
//! | Order | Keywords          | Intent      |
//! |-------|-------------------|-------------|
//! | 1     | `token`, `coin`   | Token       |
//! | 2     | `nft`             | Nft         |
//! | 3     | `marketplace`     | Marketplace |
//! | 4     | `module`          | Module      |
//! | -     | (none)            | Unrecognized|

#![deny(unsafe_code)]

pub mod classifier;

pub use classifier::{IntentClassifier, IntentRule, INTENT_RULES};
pub use movesmith_types::Intent;
