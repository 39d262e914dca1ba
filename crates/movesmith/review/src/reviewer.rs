//! Applies the review table to a source string.

use movesmith_types::Finding;
use tracing::debug;

use crate::rules::{ReviewRule, CONFIRMATION_MESSAGE, REVIEW_RULES};

/// Read-only reviewer over an ordered rule table.
#[derive(Clone, Copy, Debug)]
pub struct CodeReviewer {
    rules: &'static [ReviewRule],
}

impl CodeReviewer {
    /// Reviewer over the built-in [`REVIEW_RULES`].
    pub fn new() -> Self {
        Self::with_rules(REVIEW_RULES)
    }

    pub fn with_rules(rules: &'static [ReviewRule]) -> Self {
        Self { rules }
    }

    /// One finding per triggered rule, in rule order.
    ///
    /// Never empty: with nothing triggered the result is a single
    /// confirmation.
    pub fn review(&self, source: &str) -> Vec<Finding> {
        let mut findings: Vec<Finding> = self
            .rules
            .iter()
            .filter(|rule| (rule.triggered)(source))
            .inspect(|rule| debug!(rule = rule.name, "review rule triggered"))
            .map(ReviewRule::finding)
            .collect();

        if findings.is_empty() {
            findings.push(Finding::confirmation(CONFIRMATION_MESSAGE));
        }
        findings
    }

    /// Same as [`review`](Self::review), rendered as marker-prefixed lines.
    pub fn review_lines(&self, source: &str) -> Vec<String> {
        self.review(source).iter().map(Finding::to_string).collect()
    }
}

impl Default for CodeReviewer {
    fn default() -> Self {
        Self::new()
    }
}
