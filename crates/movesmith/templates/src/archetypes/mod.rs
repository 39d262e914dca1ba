//! Built-in archetype generators.

pub mod marketplace;
pub mod module;
pub mod nft;
pub mod token;

pub use marketplace::MarketplaceTemplate;
pub use module::ModuleTemplate;
pub use nft::NftTemplate;
pub use token::TokenTemplate;
