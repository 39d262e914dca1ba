//! Review findings and their severity markers.

use serde::{Deserialize, Serialize};

/// Implicit severity of a finding, rendered as its leading marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Suggestion,
    /// Nothing triggered.
    Confirmation,
}

impl Severity {
    const ALL: [Severity; 3] = [Self::Warning, Self::Suggestion, Self::Confirmation];

    /// Leading marker, without the separating space.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Warning => "⚠️ Warning:",
            Self::Suggestion => "💡 Suggestion:",
            Self::Confirmation => "✅",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Suggestion => write!(f, "suggestion"),
            Self::Confirmation => write!(f, "confirmation"),
        }
    }
}

/// One reviewer diagnostic.
///
/// `to_string()` yields the marker-prefixed line callers print verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self::new(Severity::Suggestion, message)
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self::new(Severity::Confirmation, message)
    }

    /// Recover a finding from its rendered line.
    ///
    /// Returns `None` when the line carries no known marker.
    pub fn parse(line: &str) -> Option<Self> {
        Severity::ALL.into_iter().find_map(|severity| {
            line.strip_prefix(severity.marker())
                .map(|rest| Self::new(severity, rest.trim_start()))
        })
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}
