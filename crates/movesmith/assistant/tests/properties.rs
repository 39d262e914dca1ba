//! Property tests for the assistant facade.

use std::collections::HashSet;

use movesmith_assistant::{Assistant, GenerationParameters, Intent, Severity, FALLBACK_MESSAGE};
use proptest::prelude::*;

fn arb_identifier() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,12}"
}

// Upper-case only, so a name can never contain a declaration keyword.
fn arb_type_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,12}"
}

fn arb_filler() -> impl Strategy<Value = String> {
    "[ a-z]{0,16}"
}

fn arb_params() -> impl Strategy<Value = GenerationParameters> {
    (
        proptest::option::of(arb_identifier()),
        proptest::option::of("0x[0-9a-f]{1,8}"),
    )
        .prop_map(|(name, address)| {
            let mut params = GenerationParameters::new();
            if let Some(name) = name {
                params.insert("name", name);
            }
            if let Some(address) = address {
                params.insert("address", address);
            }
            params
        })
}

proptest! {
    #[test]
    fn classify_is_total(text in ".*") {
        let intent = Assistant::new().classify(&text);
        let lowered = text.to_lowercase();
        let any_keyword = ["token", "coin", "nft", "marketplace", "module"]
            .iter()
            .any(|k| lowered.contains(k));
        prop_assert_eq!(intent.is_recognized(), any_keyword);
    }

    #[test]
    fn token_outranks_everything(
        before in arb_filler(),
        between in arb_filler(),
        other in prop::sample::select(vec!["nft", "marketplace", "module"]),
        upper in any::<bool>(),
    ) {
        let keyword = if upper { "TOKEN" } else { "token" };
        let text = format!("{before}{other}{between}{keyword}");
        prop_assert_eq!(Assistant::new().classify(&text), Intent::Token);
    }

    #[test]
    fn unrecognized_generates_fallback(text in "[0-9 !?.]{0,24}") {
        let out = Assistant::new().generate_code(&text, &GenerationParameters::new());
        prop_assert_eq!(out, FALLBACK_MESSAGE);
    }

    #[test]
    fn generation_is_pure(
        archetype in prop::sample::select(Intent::ARCHETYPES.to_vec()),
        params in arb_params(),
    ) {
        let assistant = Assistant::new();
        let first = assistant.generate_code(archetype.label(), &params);
        let second = assistant.generate_code(archetype.label(), &params);
        prop_assert_eq!(&first, &second);

        let name = params.get("name").unwrap_or("");
        let header = format!("module {}::", params.address());
        prop_assert!(first.starts_with(&header));
        prop_assert!(first.contains(name));
    }

    #[test]
    fn generated_code_is_self_describing(
        archetype in prop::sample::select(Intent::ARCHETYPES.to_vec()),
        params in arb_params(),
    ) {
        let mut assistant = Assistant::new();
        let code = assistant.generate_code(archetype.label(), &params);
        let summary = assistant.analyze_code(&code);
        prop_assert_eq!(summary.modules_added, 1);
        prop_assert!(summary.structs_added >= 1);
        prop_assert!(summary.functions_added >= 1);

        let findings = assistant.review_findings(&code);
        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].severity, Severity::Confirmation);
    }

    #[test]
    fn context_entries_stay_unique(names in prop::collection::vec(arb_type_name(), 0..12)) {
        let source: String = names
            .iter()
            .map(|n| format!("struct {n} has key {{}}\nfun f_{n}() {{}}\n"))
            .collect();

        let mut assistant = Assistant::new();
        assistant.analyze_code(&source);
        let again = assistant.analyze_code(&source);
        prop_assert!(again.is_empty());

        let ctx = assistant.context();
        let distinct: HashSet<_> = names.iter().collect();
        prop_assert_eq!(ctx.structs.len(), distinct.len());
        prop_assert_eq!(ctx.functions.len(), distinct.len());
        let unique: HashSet<_> = ctx.structs.iter().collect();
        prop_assert_eq!(unique.len(), ctx.structs.len());
    }

    #[test]
    fn review_never_empty(code in ".{0,200}") {
        let assistant = Assistant::new();
        let findings = assistant.review_findings(&code);
        prop_assert!(!findings.is_empty());
        prop_assert!(findings.len() <= 3);
        prop_assert!(assistant.context().is_empty());
    }
}
