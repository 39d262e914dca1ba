//! # movesmith-server
//!
//! HTTP shell over a [`SharedAssistant`](movesmith_assistant::SharedAssistant).
//!
//! | Method | Path                         | Body / Result                                  |
//! |--------|------------------------------|------------------------------------------------|
//! | GET    | `/`                          | HTML generation form                           |
//! | GET    | `/api/v1/health`             | `{status, version, uptime}`                    |
//! | POST   | `/api/v1/generate`           | `{intent, params?}` → `{intent, code}`         |
//! | GET    | `/api/v1/explain/:concept`   | `{concept, explanation}`                       |
//! | POST   | `/api/v1/review`             | `{code}` → `{findings, details}`               |
//! | POST   | `/api/v1/analyze`            | `{code}` → `{added, context}`                  |
//! | GET    | `/api/v1/context`            | context snapshot                               |
//! | GET    | `/api/v1/templates`          | catalog listing                                |
//!
//! Only `analyze` takes the write lock; every other route reads.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod page;
pub mod router;
pub mod server;
pub mod state;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::create_router;
pub use server::Server;
pub use state::AppState;
