use thiserror::Error;

use crate::content::ScenarioId;

/// Failures of the string-keyed entry points.
///
/// The typed API (`ScenarioId`, `Section`) cannot fail; these only surface
/// when a key arrives as free text, e.g. from the command line.
#[derive(Debug, Error)]
pub enum GuideError {
    #[error("unknown scenario `{0}` (expected one of: {known})", known = ScenarioId::key_list())]
    UnknownScenario(String),

    #[error("unknown section `{0}` (expected `principles` or `scenarios`)")]
    UnknownSection(String),

    #[cfg(feature = "serde")]
    #[error("failed to encode page as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scenario_message_lists_known_keys() {
        let msg = GuideError::UnknownScenario("lottery".into()).to_string();
        assert!(msg.contains("`lottery`"));
        assert!(msg.contains("college, internship, salary, teamwork, networking"));
    }
}
