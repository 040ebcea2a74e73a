use mailblocks_model::{Block, BlockKind};
use serde::{Deserialize, Serialize};

/// Severity level of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// An advisory finding about one block
///
/// Findings never block export or save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Id of the offending block
    pub component_id: String,

    pub component_type: BlockKind,

    /// Human-readable message
    pub message: String,

    pub severity: Severity,

    /// The rule that generated this finding
    pub rule: String,

    /// Optional suggestion for fixing the issue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn error(rule: impl Into<String>, block: &Block, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, rule, block, message)
    }

    pub fn warning(rule: impl Into<String>, block: &Block, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, rule, block, message)
    }

    fn new(severity: Severity, rule: impl Into<String>, block: &Block, message: impl Into<String>) -> Self {
        Self {
            component_id: block.id().to_string(),
            component_type: block.kind(),
            message: message.into(),
            severity,
            rule: rule.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
