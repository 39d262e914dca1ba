//! # movesmith-review
//!
//! **Code Reviewer** runs a fixed, ordered list of substring rules over
//! Move source and reports one [`Finding`](movesmith_types::Finding) per
//! triggered rule.
//!
//! | Order | Fires when                                             | Severity   |
//! |-------|--------------------------------------------------------|------------|
//! | 1     | `borrow_global_mut` present, `acquires` absent         | Warning    |
//! | 2     | `move_to` and `struct` present, `has key` absent       | Warning    |
//! | 3     | no `const E_` declaration                              | Suggestion |
//!
//! No rule suppresses another. When none fires the result is a single
//! confirmation. Review never mutates anything.

#![deny(unsafe_code)]

pub mod reviewer;
pub mod rules;

pub use reviewer::CodeReviewer;
pub use rules::{ReviewRule, CONFIRMATION_MESSAGE, REVIEW_RULES};
