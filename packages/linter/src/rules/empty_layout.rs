use crate::diagnostic::Finding;
use crate::rules::LintRule;
use mailblocks_model::Block;

pub struct EmptyLayoutRule;

impl LintRule for EmptyLayoutRule {
    fn name(&self) -> &'static str {
        "empty-layout"
    }

    fn description(&self) -> &'static str {
        "Flag layouts whose columns are all empty"
    }

    fn check_block(&self, block: &Block) -> Vec<Finding> {
        match block {
            Block::Layout(layout) if layout.is_empty() => vec![
                Finding::warning(self.name(), block, "Layout is empty")
                    .with_suggestion("Drop blocks into a column or remove the layout"),
            ],
            _ => Vec::new(),
        }
    }
}
