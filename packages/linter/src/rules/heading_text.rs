use crate::diagnostic::Finding;
use crate::rules::LintRule;
use mailblocks_model::Block;

pub struct HeadingTextRule;

impl LintRule for HeadingTextRule {
    fn name(&self) -> &'static str {
        "heading-text"
    }

    fn description(&self) -> &'static str {
        "Require heading text"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        match block {
            Block::Heading(heading) if heading.text.trim().is_empty() => {
                vec![Finding::warning(self.name(), block, "Heading text is missing")]
            }
            _ => Vec::new(),
        }
    }
}
