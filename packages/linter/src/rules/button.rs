use crate::diagnostic::Finding;
use crate::rules::{is_placeholder_url, LintRule};
use mailblocks_model::Block;

/// Buttons need a label and a real destination
pub struct ButtonRule;

impl LintRule for ButtonRule {
    fn name(&self) -> &'static str {
        "button"
    }

    fn description(&self) -> &'static str {
        "Require button text and a non-placeholder link"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        let Block::Button(button) = block else {
            return Vec::new();
        };

        let mut findings = Vec::new();

        if is_placeholder_url(&button.href) {
            findings.push(
                Finding::warning(self.name(), block, "Button URL is missing or invalid")
                    .with_suggestion("Point the button at the page readers should visit"),
            );
        }

        if button.text.trim().is_empty() {
            findings.push(Finding::error(self.name(), block, "Button text is missing"));
        }

        findings
    }
}
