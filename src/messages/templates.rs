//! Operator-configured message templates.

use serde::{Deserialize, Serialize};

/// Failure to parse the template configuration.
///
/// Never fatal: callers keep whichever templates were previously loaded.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("malformed template configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// The six capture message templates.
///
/// Recognized placeholders: `{capper}`, `{teamCapping}`, `{teamCapped}`,
/// `{points}`, `{pointsAbs}`. A missing key parses as the empty string,
/// and an empty template suppresses that message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    pub self_capture_public: String,
    pub self_capture_private: String,

    pub fair_capture_public: String,
    pub fair_capture_private: String,

    pub unfair_capture_public: String,
    pub unfair_capture_private: String,
}

impl MessageTemplates {
    /// Parse templates from key/value configuration text.
    pub fn from_toml(source: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(source)?)
    }
}
