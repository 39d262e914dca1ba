//! The assistant facade.

use movesmith_context::ContextExtractor;
use movesmith_intent::IntentClassifier;
use movesmith_review::CodeReviewer;
use movesmith_templates::TemplateCatalog;
use movesmith_types::{
    CodeContext, ContextSnapshot, ExtractionSummary, Finding, GenerationParameters, Intent,
};
use tracing::info;

use crate::concepts::ConceptGlossary;

/// Entry point for callers. Owns the only mutable state, the
/// [`CodeContext`], and changes it only through [`analyze_code`].
///
/// Everything except `analyze_code` takes `&self`.
///
/// [`analyze_code`]: Assistant::analyze_code
pub struct Assistant {
    classifier: IntentClassifier,
    catalog: TemplateCatalog,
    extractor: ContextExtractor,
    reviewer: CodeReviewer,
    glossary: ConceptGlossary,
    context: CodeContext,
}

impl Assistant {
    /// Assistant with the built-in rules, templates and an empty context.
    pub fn new() -> Self {
        Self::with_catalog(TemplateCatalog::with_builtins())
    }

    /// Assistant over a caller-built catalog.
    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            catalog,
            extractor: ContextExtractor::new(),
            reviewer: CodeReviewer::new(),
            glossary: ConceptGlossary::new(),
            context: CodeContext::new(),
        }
    }

    /// Resume from an existing context.
    pub fn with_context(mut self, context: CodeContext) -> Self {
        self.context = context;
        self
    }

    /// Classify a free-form instruction.
    pub fn classify(&self, instruction: &str) -> Intent {
        self.classifier.classify(instruction)
    }

    /// Classify `instruction` and run the matching generator.
    ///
    /// Unrecognized instructions yield the catalog's fallback message.
    pub fn generate_code(&self, instruction: &str, params: &GenerationParameters) -> String {
        let intent = self.classify(instruction);
        self.catalog.generate(intent, params)
    }

    /// Glossary explanation for `concept`, or the not-found message.
    pub fn explain_concept(&self, concept: &str) -> &'static str {
        self.glossary.explain(concept)
    }

    /// Findings for `code` as printable lines.
    pub fn review_code(&self, code: &str) -> Vec<String> {
        self.reviewer.review_lines(code)
    }

    /// Findings for `code` with explicit severities.
    pub fn review_findings(&self, code: &str) -> Vec<Finding> {
        self.reviewer.review(code)
    }

    /// Fold declarations in `code` into the context.
    pub fn analyze_code(&mut self, code: &str) -> ExtractionSummary {
        let summary = self.extractor.extract(&mut self.context, code);
        if !summary.is_empty() {
            info!(added = summary.total(), "context updated");
        }
        summary
    }

    /// Detached copy of the current context.
    pub fn context(&self) -> ContextSnapshot {
        self.context.snapshot()
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Mutable catalog access for runtime template registration.
    pub fn catalog_mut(&mut self) -> &mut TemplateCatalog {
        &mut self.catalog
    }

    pub fn glossary(&self) -> &ConceptGlossary {
        &self.glossary
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}
