//! Request handlers

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use movesmith_templates::TemplateInfo;
use movesmith_types::{ContextSnapshot, ExtractionSummary, Finding, GenerationParameters, Intent};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::page::INDEX_HTML;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime: String,
}

/// Generation request. `intent` is the free-form instruction.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub intent: String,
    #[serde(default)]
    pub params: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    /// Classified intent
    pub intent: Intent,
    /// Generated source, or the fallback message
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub concept: String,
    pub explanation: String,
}

/// Body for review and analyze.
#[derive(Debug, Deserialize)]
pub struct CodeRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    /// Marker-prefixed lines
    pub findings: Vec<String>,
    pub details: Vec<Finding>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub added: ExtractionSummary,
    pub context: ContextSnapshot,
}

/// Static landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime: state.uptime(),
    })
}

pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let assistant = state.assistant.read().await;
    let intent = assistant.classify(&req.intent);
    let code = assistant.generate_code(&req.intent, &req.params);
    debug!(%intent, "generate request served");
    Json(GenerateResponse { intent, code })
}

pub async fn explain(
    State(state): State<AppState>,
    Path(concept): Path<String>,
) -> Json<ExplainResponse> {
    let explanation = state.assistant.explain_concept(&concept).await.to_string();
    Json(ExplainResponse {
        concept,
        explanation,
    })
}

pub async fn review(
    State(state): State<AppState>,
    Json(req): Json<CodeRequest>,
) -> Json<ReviewResponse> {
    let details = state.assistant.review_findings(&req.code).await;
    let findings = details.iter().map(Finding::to_string).collect();
    Json(ReviewResponse { findings, details })
}

/// Fold the submitted code into the shared context.
///
/// Extraction and the returned snapshot happen under one write guard so the
/// response reflects exactly this request's update.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<CodeRequest>,
) -> Json<AnalyzeResponse> {
    let mut assistant = state.assistant.write().await;
    let added = assistant.analyze_code(&req.code);
    let context = assistant.context();
    Json(AnalyzeResponse { added, context })
}

pub async fn context(State(state): State<AppState>) -> Json<ContextSnapshot> {
    Json(state.assistant.context().await)
}

pub async fn list_templates(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    Json(state.assistant.read().await.catalog().list())
}
