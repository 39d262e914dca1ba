//! Generic module: one keyed resource with a numeric field.

use movesmith_types::{GenerationParameters, Intent};

use crate::placeholder::substitute;
use crate::template::Template;

pub const DEFAULT_NAME: &str = "MyModule";

const SOURCE: &str = r#"module {{address}}::{{name}} {
    use std::signer;

    /// Error codes
    const E_ALREADY_INITIALIZED: u64 = 1;

    struct Data has key {
        value: u64,
    }

    public entry fun initialize(account: &signer) {
        assert!(!exists<Data>(signer::address_of(account)), E_ALREADY_INITIALIZED);
        move_to(account, Data { value: 0 });
    }
}
"#;

/// Generator for [`Intent::Module`].
pub struct ModuleTemplate;

impl Template for ModuleTemplate {
    fn pattern_id(&self) -> &str {
        "move.module"
    }

    fn description(&self) -> &str {
        "Minimal module with a keyed data resource"
    }

    fn intent(&self) -> Intent {
        Intent::Module
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
