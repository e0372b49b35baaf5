//! Rule-authoring error taxonomy.
//!
//! Every variant renders a message suitable for direct display to the rule
//! author. Validation failures leave the corpus untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringError {
    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("rule batch must be a JSON object mapping rule keys to rule bodies")]
    NotAnObject,

    #[error("rule '{key}': rule body must be a JSON object")]
    RuleNotAnObject { key: String },

    #[error("rule '{key}': missing required field 'severity'")]
    MissingSeverity { key: String },

    #[error("rule '{key}': severity must be one of 'error', 'warning', or 'info', got {value}")]
    InvalidSeverity { key: String, value: String },

    #[error("rule '{key}': 'message' is required and must be a non-empty string")]
    InvalidMessage { key: String },

    #[error("rule '{key}': 'flaggedPhrases' must be a list with at least one phrase")]
    InvalidPhrases { key: String },

    #[error("rule '{key}': malformed rule body: {detail}")]
    MalformedRule { key: String, detail: String },
}

impl From<serde_json::Error> for AuthoringError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
