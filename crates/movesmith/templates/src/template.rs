//! The template abstraction and its catalog listing.

use movesmith_types::{GenerationParameters, Intent};
use serde::{Deserialize, Serialize};

/// A named generator for one archetype.
///
/// `generate` must be pure: the same parameters always produce
/// byte-identical source.
pub trait Template: Send + Sync {
    /// Stable identifier, unique within a catalog.
    fn pattern_id(&self) -> &str;

    /// One-line human description.
    fn description(&self) -> &str;

    /// The intent this template serves.
    fn intent(&self) -> Intent;

    /// Parameter keys the generator reads.
    fn keys(&self) -> &[&'static str];

    /// Render a complete module from `params`, applying defaults for
    /// absent or empty keys.
    fn generate(&self, params: &GenerationParameters) -> String;

    /// Catalog listing entry.
    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            pattern_id: self.pattern_id().to_string(),
            intent: self.intent(),
            description: self.description().to_string(),
            keys: self.keys().iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Serializable description of a registered template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    pub pattern_id: String,
    pub intent: Intent,
    pub description: String,
    pub keys: Vec<String>,
}
