//! Thread-safe handle for concurrent callers.

use std::sync::Arc;

use movesmith_types::{ContextSnapshot, ExtractionSummary, Finding, GenerationParameters};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::assistant::Assistant;

/// Cloneable handle over one [`Assistant`].
///
/// Generation, review and explanation share the read lock. Analysis takes
/// the write lock, so context updates are serialized and readers see either
/// the old or the new context, never a partial one.
#[derive(Clone)]
pub struct SharedAssistant {
    inner: Arc<RwLock<Assistant>>,
}

impl SharedAssistant {
    pub fn new(assistant: Assistant) -> Self {
        Self {
            inner: Arc::new(RwLock::new(assistant)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Assistant> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Assistant> {
        self.inner.write().await
    }

    pub async fn generate_code(&self, instruction: &str, params: &GenerationParameters) -> String {
        self.inner.read().await.generate_code(instruction, params)
    }

    pub async fn explain_concept(&self, concept: &str) -> &'static str {
        self.inner.read().await.explain_concept(concept)
    }

    pub async fn review_findings(&self, code: &str) -> Vec<Finding> {
        self.inner.read().await.review_findings(code)
    }

    pub async fn analyze_code(&self, code: &str) -> ExtractionSummary {
        self.inner.write().await.analyze_code(code)
    }

    pub async fn context(&self) -> ContextSnapshot {
        self.inner.read().await.context()
    }
}

impl Default for SharedAssistant {
    fn default() -> Self {
        Self::new(Assistant::new())
    }
}
