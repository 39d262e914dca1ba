//! # movesmith-templates
//!
//! The **template library**: one pure generator per contract archetype.
//!
//! ```text
//! (Intent, GenerationParameters)
//!     │
//!     ▼
//! TemplateCatalog ── for_intent ──▶ Template::generate
//!     │                                 │
//!     │ (no template)                   └── substitute({{key}} → value)
//!     ▼
//! FALLBACK_MESSAGE
//! ```
//!
//! | Pattern            | Intent      | Default name  |
//! |--------------------|-------------|---------------|
//! | `move.token`       | Token       | `MyToken`     |
//! | `move.nft`         | Nft         | `MyNFT`       |
//! | `move.marketplace` | Marketplace | `Marketplace` |
//! | `move.module`      | Module      | `MyModule`    |
//!
//! Every archetype defaults its address to `0x1`.

#![deny(unsafe_code)]

pub mod archetypes;
pub mod catalog;
pub mod error;
pub mod placeholder;
pub mod template;

// ── Re-exports ─────────────────────────────────────────────────────────

pub use archetypes::{MarketplaceTemplate, ModuleTemplate, NftTemplate, TokenTemplate};
pub use catalog::{TemplateCatalog, FALLBACK_MESSAGE};
pub use error::{TemplateError, TemplateResult};
pub use placeholder::{placeholders, substitute};
pub use template::{Template, TemplateInfo};
