//! NFT collection: per-account item list with a monotonic id counter.

use movesmith_types::{GenerationParameters, Intent};

use crate::placeholder::substitute;
use crate::template::Template;

pub const DEFAULT_NAME: &str = "MyNFT";

const SOURCE: &str = r#"module {{address}}::{{name}} {
    use std::signer;
    use std::vector;

    /// Error codes
    const E_NOT_INITIALIZED: u64 = 1;
    const E_ALREADY_INITIALIZED: u64 = 2;

    /// A minted item and its owner of record
    struct NFT has store, drop {
        id: u64,
        owner: address,
    }

    /// Items owned by an account plus the next id to mint
    struct Collection has key {
        items: vector<NFT>,
        next_id: u64,
    }

    /// Create an empty collection for the caller
    public entry fun initialize(account: &signer) {
        let addr = signer::address_of(account);
        assert!(!exists<Collection>(addr), E_ALREADY_INITIALIZED);
        move_to(account, Collection {
            items: vector::empty<NFT>(),
            next_id: 0,
        });
    }

    /// Append a new item tagged with the current counter, then advance it
    public entry fun mint(account: &signer) acquires Collection {
        let addr = signer::address_of(account);
        assert!(exists<Collection>(addr), E_NOT_INITIALIZED);

        let collection = borrow_global_mut<Collection>(addr);
        let id = collection.next_id;
        vector::push_back(&mut collection.items, NFT { id, owner: addr });
        collection.next_id = id + 1;
    }
}
"#;

/// Generator for [`Intent::Nft`].
pub struct NftTemplate;

impl Template for NftTemplate {
    fn pattern_id(&self) -> &str {
        "move.nft"
    }

    fn description(&self) -> &str {
        "NFT collection with initialize and counter-tagged mint"
    }

    fn intent(&self) -> Intent {
        Intent::Nft
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
