mod button;
mod empty_layout;
mod heading_text;
mod image;
mod social_links;
mod text_content;

pub use button::ButtonRule;
pub use empty_layout::EmptyLayoutRule;
pub use heading_text::HeadingTextRule;
pub use image::ImageRule;
pub use social_links::SocialLinksRule;
pub use text_content::TextContentRule;

use crate::diagnostic::Finding;
use mailblocks_model::Block;

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a single block; nested blocks are visited separately
    fn check_block(&self, block: &Block) -> Vec<Finding>;
}

/// Empty or a bare `#` placeholder
pub(crate) fn is_placeholder_url(url: &str) -> bool {
    matches!(url.trim(), "" | "#")
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ImageRule),
                Box::new(ButtonRule),
                Box::new(TextContentRule),
                Box::new(HeadingTextRule),
                Box::new(SocialLinksRule),
                Box::new(EmptyLayoutRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
