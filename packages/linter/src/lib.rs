mod diagnostic;
mod linter;
mod rules;
mod summary;

pub use diagnostic::{Finding, Severity};
pub use linter::{has_errors, validate, validate_with, LintOptions};
pub use rules::{LintRule, RuleRegistry};
pub use summary::summary;
