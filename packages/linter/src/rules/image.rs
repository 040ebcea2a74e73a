use crate::diagnostic::Finding;
use crate::rules::LintRule;
use mailblocks_model::Block;

/// Images need a source and alt text
pub struct ImageRule;

impl LintRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn description(&self) -> &'static str {
        "Require an image source and alt text"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        let Block::Image(image) = block else {
            return Vec::new();
        };

        let mut findings = Vec::new();

        if image.src.trim().is_empty() {
            findings.push(
                Finding::warning(self.name(), block, "Image source is missing")
                    .with_suggestion("Upload an image or paste its URL"),
            );
        }

        if image.alt.trim().is_empty() {
            findings.push(Finding::warning(
                self.name(),
                block,
                "Image alt text is missing (important for accessibility)",
            ));
        }

        findings
    }
}
