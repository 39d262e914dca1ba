//! Template catalog: maps intents and pattern ids to generators.

use movesmith_types::{GenerationParameters, Intent};
use tracing::debug;

use crate::archetypes::{MarketplaceTemplate, ModuleTemplate, NftTemplate, TokenTemplate};
use crate::error::{TemplateError, TemplateResult};
use crate::template::{Template, TemplateInfo};

/// Returned instead of source when the intent is unrecognized.
pub const FALLBACK_MESSAGE: &str = "I can help you generate Move contracts for: token, NFT, \
marketplace, or a generic module. Please describe what you want to build, e.g. \"create a token\".";

/// Registered templates in registration order.
///
/// Lookup by intent returns the first template registered for it, so the
/// built-ins always serve the four archetypes. Additional templates are
/// reachable by pattern id.
pub struct TemplateCatalog {
    templates: Vec<Box<dyn Template>>,
}

impl TemplateCatalog {
    /// Catalog with no templates.
    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Catalog with the four built-in archetypes.
    pub fn with_builtins() -> Self {
        Self {
            templates: vec![
                Box::new(TokenTemplate),
                Box::new(NftTemplate),
                Box::new(MarketplaceTemplate),
                Box::new(ModuleTemplate),
            ],
        }
    }

    /// Add a template. Pattern ids must be unique.
    pub fn register(&mut self, template: Box<dyn Template>) -> TemplateResult<()> {
        if self.find(template.pattern_id()).is_some() {
            return Err(TemplateError::DuplicatePattern(
                template.pattern_id().to_string(),
            ));
        }
        debug!(pattern = template.pattern_id(), intent = %template.intent(), "template registered");
        self.templates.push(template);
        Ok(())
    }

    /// First template registered for `intent`.
    pub fn for_intent(&self, intent: Intent) -> Option<&dyn Template> {
        self.templates
            .iter()
            .find(|t| t.intent() == intent)
            .map(|t| t.as_ref())
    }

    /// Template registered under `pattern_id`.
    pub fn find(&self, pattern_id: &str) -> Option<&dyn Template> {
        self.templates
            .iter()
            .find(|t| t.pattern_id() == pattern_id)
            .map(|t| t.as_ref())
    }

    /// Generate source for `intent`.
    ///
    /// Never fails: an intent with no template yields [`FALLBACK_MESSAGE`].
    pub fn generate(&self, intent: Intent, params: &GenerationParameters) -> String {
        match self.for_intent(intent) {
            Some(template) => {
                debug!(pattern = template.pattern_id(), %intent, "generating");
                template.generate(params)
            }
            None => {
                debug!(%intent, "no template, returning fallback");
                FALLBACK_MESSAGE.to_string()
            }
        }
    }

    /// Generate source with the template registered under `pattern_id`.
    pub fn generate_pattern(
        &self,
        pattern_id: &str,
        params: &GenerationParameters,
    ) -> TemplateResult<String> {
        self.find(pattern_id)
            .map(|template| template.generate(params))
            .ok_or_else(|| TemplateError::UnknownPattern(pattern_id.to_string()))
    }

    /// Listing of every registered template.
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.templates.iter().map(|t| t.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::with_builtins()
    }
}
