//! Move concept glossary.
//!
//! Same ordered first-match semantics as the intent rules: the first entry
//! whose name is contained in the lowercased query wins.

use tracing::debug;

/// Returned when no glossary entry matches.
pub const CONCEPT_NOT_FOUND: &str =
    "Concept not found. Try: abilities, resources, acquires, signer";

/// One glossary row.
#[derive(Clone, Copy, Debug)]
pub struct ConceptEntry {
    pub name: &'static str,
    pub explanation: &'static str,
}

/// Entries in lookup order.
pub const CONCEPTS: &[ConceptEntry] = &[
    ConceptEntry {
        name: "abilities",
        explanation: "Abilities control what a type may do. `copy` lets values be duplicated, \
`drop` lets them be discarded, `store` lets them live inside other structs in global storage, \
and `key` lets them be top-level resources in global storage. Declare them with `has`, \
e.g. `struct Coin has key, store { value: u64 }`.",
    },
    ConceptEntry {
        name: "resources",
        explanation: "Resources are structs with the `key` ability stored in global storage under \
an account address. They can never be copied or silently dropped. Publish one with `move_to`, \
read it with `borrow_global`, mutate it with `borrow_global_mut`, and take it back with `move_from`.",
    },
    ConceptEntry {
        name: "acquires",
        explanation: "A function that touches a resource in global storage through `borrow_global`, \
`borrow_global_mut` or `move_from` must list it after its signature: \
`public fun bump(addr: address) acquires Counter { ... }`.",
    },
    ConceptEntry {
        name: "signer",
        explanation: "`signer` carries the authority of the account that signed the transaction. \
Take it as `&signer`, get its address with `signer::address_of(account)`, and pass it to \
`move_to` to publish a resource under that address.",
    },
];

/// Lookup over an ordered concept table.
#[derive(Clone, Copy, Debug)]
pub struct ConceptGlossary {
    entries: &'static [ConceptEntry],
}

impl ConceptGlossary {
    pub fn new() -> Self {
        Self::with_entries(CONCEPTS)
    }

    pub fn with_entries(entries: &'static [ConceptEntry]) -> Self {
        Self { entries }
    }

    /// First entry whose name occurs in `query`, case-insensitively.
    pub fn lookup(&self, query: &str) -> Option<&'static ConceptEntry> {
        let lowered = query.to_lowercase();
        self.entries.iter().find(|entry| lowered.contains(entry.name))
    }

    /// Explanation for `query`, or [`CONCEPT_NOT_FOUND`].
    pub fn explain(&self, query: &str) -> &'static str {
        match self.lookup(query) {
            Some(entry) => {
                debug!(concept = entry.name, "concept matched");
                entry.explanation
            }
            None => CONCEPT_NOT_FOUND,
        }
    }

    /// Concept names in lookup order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }
}

impl Default for ConceptGlossary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_mixed_case() {
        let glossary = ConceptGlossary::new();
        assert_eq!(glossary.explain("Acquires"), CONCEPTS[2].explanation);
        assert_eq!(glossary.explain("SIGNER"), CONCEPTS[3].explanation);
    }

    #[test]
    fn glossary_not_found() {
        assert_eq!(ConceptGlossary::new().explain("banana"), CONCEPT_NOT_FOUND);
        assert_eq!(ConceptGlossary::new().explain(""), CONCEPT_NOT_FOUND);
    }

    #[test]
    fn glossary_substring_in_longer_query() {
        let glossary = ConceptGlossary::new();
        assert_eq!(
            glossary.lookup("what are abilities in move?").unwrap().name,
            "abilities"
        );
    }

    #[test]
    fn glossary_first_match_wins() {
        let entry = ConceptGlossary::new()
            .lookup("signer and resources")
            .unwrap();
        assert_eq!(entry.name, "resources");
    }

    #[test]
    fn glossary_singular_does_not_match_plural_entry() {
        assert!(ConceptGlossary::new().lookup("resource").is_none());
    }

    #[test]
    fn glossary_names_in_order() {
        assert_eq!(
            ConceptGlossary::new().names(),
            vec!["abilities", "resources", "acquires", "signer"]
        );
    }
}
