//! Application state for API handlers

use movesmith_assistant::SharedAssistant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Assistant handle; context writes go through its lock
    pub assistant: SharedAssistant,

    /// Server version
    pub version: String,

    /// Server start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(assistant: SharedAssistant) -> Self {
        Self {
            assistant,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string
    pub fn uptime(&self) -> String {
        format_uptime((chrono::Utc::now() - self.started_at).num_seconds())
    }
}

fn format_uptime(secs: i64) -> String {
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_uptime_buckets() {
        assert_eq!(format_uptime(5), "5s");
        assert_eq!(format_uptime(125), "2m 5s");
        assert_eq!(format_uptime(7260), "2h 1m");
        assert_eq!(format_uptime(90000), "1d 1h");
    }

    #[test]
    fn state_carries_crate_version() {
        let state = AppState::new(SharedAssistant::default());
        assert_eq!(state.version, env!("CARGO_PKG_VERSION"));
        assert!(state.uptime().ends_with('s'));
    }
}
