//! Marketplace: per-account listings with a next-id counter.

use movesmith_types::{GenerationParameters, Intent};

use crate::placeholder::substitute;
use crate::template::Template;

pub const DEFAULT_NAME: &str = "Marketplace";

const SOURCE: &str = r#"module {{address}}::{{name}} {
    use std::signer;
    use std::vector;

    /// Error codes
    const E_NOT_INITIALIZED: u64 = 1;
    const E_ALREADY_INITIALIZED: u64 = 2;
    const E_LISTING_NOT_FOUND: u64 = 3;

    /// One item offered for sale
    struct Listing has store, drop {
        id: u64,
        seller: address,
        price: u64,
        active: bool,
    }

    /// Listings published by an account plus the next id to assign
    struct Listings has key {
        listings: vector<Listing>,
        next_id: u64,
    }

    /// Create an empty listings resource for the caller
    public entry fun initialize(account: &signer) {
        let addr = signer::address_of(account);
        assert!(!exists<Listings>(addr), E_ALREADY_INITIALIZED);
        move_to(account, Listings {
            listings: vector::empty<Listing>(),
            next_id: 0,
        });
    }
}
"#;

/// Generator for [`Intent::Marketplace`].
pub struct MarketplaceTemplate;

impl Template for MarketplaceTemplate {
    fn pattern_id(&self) -> &str {
        "move.marketplace"
    }

    fn description(&self) -> &str {
        "Marketplace listings resource with initialize"
    }

    fn intent(&self) -> Intent {
        Intent::Marketplace
    }

    fn keys(&self) -> &[&'static str] {
        &["name", "address"]
    }

    fn generate(&self, params: &GenerationParameters) -> String {
        substitute(
            SOURCE,
            &[
                ("address", params.address()),
                ("name", params.get_or("name", DEFAULT_NAME)),
            ],
        )
    }
}
