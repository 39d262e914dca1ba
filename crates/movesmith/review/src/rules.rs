//! The fixed review rule table.
//!
//! Each rule is a literal substring test over the whole source. Rules do not
//! know about each other and do not link a construct to the declaration it
//! refers to, so multi-struct sources can trip or dodge rule 2.

use movesmith_types::{Finding, Severity};

/// Global-storage mutable borrow.
pub const MUTABLE_BORROW: &str = "borrow_global_mut";
/// Function-level acquisition declaration.
pub const ACQUIRES: &str = "acquires";
/// Move a value into global storage.
pub const MOVE_TO: &str = "move_to";
/// Structure declaration keyword.
pub const STRUCT: &str = "struct";
/// Storage-eligibility ability marker.
pub const KEY_ABILITY: &str = "has key";
/// Conventional error-constant declaration prefix.
pub const ERROR_CONSTANT: &str = "const E_";

/// Emitted alone when no rule triggers.
pub const CONFIRMATION_MESSAGE: &str = "Code looks good! No obvious issues found.";

/// One row of the review table.
#[derive(Clone, Copy, Debug)]
pub struct ReviewRule {
    /// Stable rule name, used in logs.
    pub name: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    /// Whether the rule fires for `source`.
    pub triggered: fn(&str) -> bool,
}

impl ReviewRule {
    pub fn finding(&self) -> Finding {
        Finding::new(self.severity, self.message)
    }
}

fn missing_acquires(source: &str) -> bool {
    source.contains(MUTABLE_BORROW) && !source.contains(ACQUIRES)
}

fn stored_without_key(source: &str) -> bool {
    source.contains(MOVE_TO) && source.contains(STRUCT) && !source.contains(KEY_ABILITY)
}

fn no_error_constants(source: &str) -> bool {
    !source.contains(ERROR_CONSTANT)
}

/// Rules in declaration order; findings come out in this order.
pub const REVIEW_RULES: &[ReviewRule] = &[
    ReviewRule {
        name: "missing-acquires",
        severity: Severity::Warning,
        message: "Functions using borrow_global_mut must declare 'acquires' for the resources they borrow.",
        triggered: missing_acquires,
    },
    ReviewRule {
        name: "stored-without-key",
        severity: Severity::Warning,
        message: "Resources stored with move_to need the 'key' ability (add `has key` to the struct).",
        triggered: stored_without_key,
    },
    ReviewRule {
        name: "no-error-constants",
        severity: Severity::Suggestion,
        message: "Define error constants (e.g. const E_NOT_AUTHORIZED: u64 = 1;) to give aborts meaningful codes.",
        triggered: no_error_constants,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_missing_acquires() {
        assert!(missing_acquires("borrow_global_mut<T>(a)"));
        assert!(!missing_acquires("fun f() acquires T { borrow_global_mut<T>(a); }"));
        assert!(!missing_acquires("borrow_global<T>(a)"));
    }

    #[test]
    fn rule_stored_without_key_needs_all_three_conditions() {
        assert!(stored_without_key("struct S has store {} move_to(a, S {})"));
        assert!(!stored_without_key("struct S has key {} move_to(a, S {})"));
        assert!(!stored_without_key("move_to(a, S {})"));
        assert!(!stored_without_key("struct S {}"));
    }

    #[test]
    fn rule_stored_without_key_is_unlinked() {
        // One keyed struct anywhere satisfies the check for every struct.
        let src = "struct A has key {} struct B has store {} move_to(a, B {})";
        assert!(!stored_without_key(src));
    }

    #[test]
    fn rule_no_error_constants() {
        assert!(no_error_constants("const MAX: u64 = 1;"));
        assert!(!no_error_constants("const E_FAIL: u64 = 1;"));
    }

    #[test]
    fn rule_table_order_and_severity() {
        let names: Vec<_> = REVIEW_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["missing-acquires", "stored-without-key", "no-error-constants"]
        );
        assert_eq!(REVIEW_RULES[2].severity, Severity::Suggestion);
    }
}
