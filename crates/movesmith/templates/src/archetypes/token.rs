//! Fungible token: balances keyed by account, initialize and transfer.

use movesmith_types::{GenerationParameters, Intent};

use crate::placeholder::substitute;
use crate::template::Template;

pub const DEFAULT_NAME: &str = "MyToken";
pub const DEFAULT_INITIAL_BALANCE: &str = "1000000";

const SOURCE: &str = r#"module {{address}}::{{name}} {
    use std::signer;
    use aptos_framework::create_signer::create_signer;

    /// Error codes
    const E_NOT_INITIALIZED: u64 = 1;
    const E_INSUFFICIENT_BALANCE: u64 = 2;
    const E_ALREADY_INITIALIZED: u64 = 3;

    /// Token balance held under each account
    struct Balance has key {
        value: u64,
    }

    /// Give the caller its starting balance
    public entry fun initialize(account: &signer) {
        let addr = signer::address_of(account);
        assert!(!exists<Balance>(addr), E_ALREADY_INITIALIZED);
        move_to(account, Balance { value: {{initial_balance}} });
    }

    /// Move `amount` from the sender to `to`, opening a balance for `to` on first receipt
    public entry fun transfer(from: &signer, to: address, amount: u64) acquires Balance {
        let from_addr = signer::address_of(from);
        assert!(exists<Balance>(from_addr), E_NOT_INITIALIZED);

        let from_balance = borrow_global_mut<Balance>(from_addr);
        assert!(from_balance.value >= amount, E_INSUFFICIENT_BALANCE);
        from_balance.value = from_balance.value - amount;

        // create_signer is public(friend) in aptos_framework; outside the framework, have recipients register a Balance first
        if (!exists<Balance>(to)) {
            move_to(&create_signer(to), Balance { value: 0 });
        };
        let to_balance = borrow_global_mut<Balance>(to);
        to_balance.value = to_balance.value + amount;
    }

    #[view]
    public fun balance_of(owner: address): u64 acquires Balance {
        assert!(exists<Balance>(owner), E_NOT_INITIALIZED);
        borrow_global<Balance>(owner).value
    }
}
"#;

/// Generator for [`Intent::Token`].
pub struct TokenTemplate;

impl Template for TokenTemplate {
    fn pattern_id(&self) -> &str {
        "move.token"
    }

    fn description(&self) -> &str {
        "Fungible token with per-account balances, initialize and transfer"
    }

    fn intent(&self) -> Intent {
        Intent::Token
    }

    fn keys(&self) -> &[&'static str] {
        &["name", "address", "initial_balance"]
    }

    fn generate(&self, params: &GenerationParameters) -> String {
        substitute(
            SOURCE,
            &[
                ("address", params.address()),
                ("name", params.get_or("name", DEFAULT_NAME)),
                (
                    "initial_balance",
                    params.get_or("initial_balance", DEFAULT_INITIAL_BALANCE),
                ),
            ],
        )
    }
}
