//! Ordered keyword-containment classifier.

use movesmith_types::Intent;
use tracing::debug;

/// One row of the decision table: any keyword contained in the lowercased
/// text selects `intent`.
#[derive(Clone, Copy, Debug)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// Whether `lowered` contains any of this rule's keywords.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in precedence order.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Token,
        keywords: &["token", "coin"],
    },
    IntentRule {
        intent: Intent::Nft,
        keywords: &["nft"],
    },
    IntentRule {
        intent: Intent::Marketplace,
        keywords: &["marketplace"],
    },
    IntentRule {
        intent: Intent::Module,
        keywords: &["module"],
    },
];

/// Evaluates a rule table top to bottom.
#[derive(Clone, Copy, Debug)]
pub struct IntentClassifier {
    rules: &'static [IntentRule],
}

impl IntentClassifier {
    /// Classifier over the built-in [`INTENT_RULES`].
    pub fn new() -> Self {
        Self::with_rules(INTENT_RULES)
    }

    /// Classifier over a custom rule table.
    pub fn with_rules(rules: &'static [IntentRule]) -> Self {
        Self { rules }
    }

    /// Resolve `text` to an intent. Total: every input yields a value.
    pub fn classify(&self, text: &str) -> Intent {
        let lowered = text.to_lowercase();
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Unrecognized);
        debug!(%intent, "classified instruction");
        intent
    }

    pub fn rules(&self) -> &'static [IntentRule] {
        self.rules
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Intent {
        IntentClassifier::new().classify(text)
    }

    #[test]
    fn classifier_single_keywords() {
        assert_eq!(classify("create a token"), Intent::Token);
        assert_eq!(classify("mint me a coin"), Intent::Token);
        assert_eq!(classify("an nft collection"), Intent::Nft);
        assert_eq!(classify("build a marketplace"), Intent::Marketplace);
        assert_eq!(classify("generic module please"), Intent::Module);
    }

    #[test]
    fn classifier_is_case_insensitive() {
        assert_eq!(classify("Create a TOKEN"), Intent::Token);
        assert_eq!(classify("My NFT"), Intent::Nft);
        assert_eq!(classify("MarketPlace"), Intent::Marketplace);
    }

    #[test]
    fn classifier_precedence_token_beats_nft() {
        assert_eq!(classify("create a token nft"), Intent::Token);
        assert_eq!(classify("nft token"), Intent::Token);
    }

    #[test]
    fn classifier_precedence_full_chain() {
        assert_eq!(classify("nft marketplace module"), Intent::Nft);
        assert_eq!(classify("marketplace module"), Intent::Marketplace);
        assert_eq!(classify("coin module"), Intent::Token);
    }

    #[test]
    fn classifier_substring_containment() {
        // Keywords are not word-bounded.
        assert_eq!(classify("tokenomics"), Intent::Token);
        assert_eq!(classify("coinbase"), Intent::Token);
        assert_eq!(classify("submodules"), Intent::Module);
    }

    #[test]
    fn classifier_unrecognized() {
        assert_eq!(classify(""), Intent::Unrecognized);
        assert_eq!(classify("hello world"), Intent::Unrecognized);
        assert_eq!(classify("create a dao"), Intent::Unrecognized);
    }

    #[test]
    fn classifier_custom_rules() {
        const RULES: &[IntentRule] = &[IntentRule {
            intent: Intent::Module,
            keywords: &["dao"],
        }];
        let classifier = IntentClassifier::with_rules(RULES);
        assert_eq!(classifier.classify("a DAO"), Intent::Module);
        assert_eq!(classifier.classify("a token"), Intent::Unrecognized);
    }

    #[test]
    fn classifier_rule_table_order() {
        let order: Vec<Intent> = INTENT_RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![Intent::Token, Intent::Nft, Intent::Marketplace, Intent::Module]
        );
    }
}
