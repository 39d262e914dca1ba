//! Contract archetypes an instruction can resolve to.

use serde::{Deserialize, Serialize};

/// The classified purpose of a free-form instruction.
///
/// Never stored: it is recomputed from the instruction text on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Fungible token with balances and transfers.
    Token,
    /// Per-account NFT collection with minting.
    Nft,
    /// Listings marketplace.
    Marketplace,
    /// Generic keyed-data module.
    Module,
    /// Nothing in the instruction matched a known archetype.
    Unrecognized,
}

impl Intent {
    /// The four archetypes a template exists for, in menu order.
    pub const ARCHETYPES: [Intent; 4] = [
        Intent::Token,
        Intent::Nft,
        Intent::Marketplace,
        Intent::Module,
    ];

    /// Whether a generator exists for this intent.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }

    /// Short lowercase label, also usable as an instruction that classifies
    /// back to the same intent.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Nft => "nft",
            Self::Marketplace => "marketplace",
            Self::Module => "module",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
