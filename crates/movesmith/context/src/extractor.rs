//! Folds declarations found in raw source into a [`CodeContext`].

use movesmith_types::{CodeContext, ExtractionSummary};
use tracing::debug;

use crate::pattern::{
    DeclarationPattern, FUNCTION_DECLARATION, MODULE_DECLARATION, STRUCT_DECLARATION,
};

/// Runs the module, struct and function scans over a source string.
///
/// The three scans are independent and each sees the full text.
#[derive(Clone, Copy, Debug)]
pub struct ContextExtractor {
    modules: DeclarationPattern,
    structs: DeclarationPattern,
    functions: DeclarationPattern,
}

impl ContextExtractor {
    pub fn new() -> Self {
        Self {
            modules: MODULE_DECLARATION,
            structs: STRUCT_DECLARATION,
            functions: FUNCTION_DECLARATION,
        }
    }

    /// Insert every newly seen declaration into `context`.
    ///
    /// Existing entries are left in place; order of first appearance wins.
    pub fn extract(&self, context: &mut CodeContext, source: &str) -> ExtractionSummary {
        let mut summary = ExtractionSummary::default();

        for name in self.modules.scan(source) {
            if context.insert_module(name) {
                summary.modules_added += 1;
            }
        }
        for name in self.structs.scan(source) {
            if context.insert_struct(name) {
                summary.structs_added += 1;
            }
        }
        for name in self.functions.scan(source) {
            if context.insert_function(name) {
                summary.functions_added += 1;
            }
        }

        debug!(
            modules = summary.modules_added,
            structs = summary.structs_added,
            functions = summary.functions_added,
            "extracted declarations"
        );
        summary
    }
}

impl Default for ContextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COIN: &str = r#"
module 0x1::Coin {
    struct Balance has key { value: u64 }

    public fun mint(account: &signer) {}
    public entry fun transfer(from: &signer, to: address) acquires Balance {}
    fun helper() {}
}
"#;

    #[test]
    fn extractor_collects_all_kinds() {
        let mut ctx = CodeContext::new();
        let summary = ContextExtractor::new().extract(&mut ctx, COIN);

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.modules, vec!["0x1::Coin"]);
        assert_eq!(snapshot.structs, vec!["Balance"]);
        assert_eq!(snapshot.functions, vec!["mint", "transfer", "helper"]);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn extractor_twice_keeps_single_entry() {
        let mut ctx = CodeContext::new();
        let extractor = ContextExtractor::new();
        extractor.extract(&mut ctx, "module 0x1::Foo {}");
        let second = extractor.extract(&mut ctx, "module 0x1::Foo {}");

        assert_eq!(ctx.modules().as_slice(), &["0x1::Foo".to_string()]);
        assert!(second.is_empty());
    }

    #[test]
    fn extractor_preserves_first_seen_order_across_calls() {
        let mut ctx = CodeContext::new();
        let extractor = ContextExtractor::new();
        extractor.extract(&mut ctx, "struct B {} struct A {}");
        extractor.extract(&mut ctx, "struct C {} struct A {}");
        assert_eq!(ctx.snapshot().structs, vec!["B", "A", "C"]);
    }

    #[test]
    fn extractor_duplicates_within_one_source() {
        let mut ctx = CodeContext::new();
        let summary = ContextExtractor::new().extract(&mut ctx, "fun a() {} fun a() {}");
        assert_eq!(ctx.snapshot().functions, vec!["a"]);
        assert_eq!(summary.functions_added, 1);
    }

    #[test]
    fn extractor_empty_source_is_noop() {
        let mut ctx = CodeContext::new();
        let summary = ContextExtractor::new().extract(&mut ctx, "");
        assert!(summary.is_empty());
        assert!(ctx.is_empty());
    }

    #[test]
    fn extractor_counts_commented_declarations() {
        let mut ctx = CodeContext::new();
        ContextExtractor::new().extract(&mut ctx, "/* fun ghost() */ let s = \"struct Fake\";");
        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.functions, vec!["ghost"]);
        assert_eq!(snapshot.structs, vec!["Fake"]);
    }
}
