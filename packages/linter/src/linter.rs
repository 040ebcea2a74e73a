use crate::diagnostic::Finding;
use crate::rules::RuleRegistry;
use mailblocks_model::visitor::{walk_block, walk_blocks, BlockVisitor};
use mailblocks_model::Block;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Validate a newsletter with the built-in rules
///
/// Findings come in document order, a layout's own findings before those
/// of the blocks in its columns.
pub fn validate(components: &[Block]) -> Vec<Finding> {
    validate_with(components, LintOptions::default())
}

/// Validate a newsletter with a custom rule set
pub fn validate_with(components: &[Block], options: LintOptions) -> Vec<Finding> {
    let registry = options.registry.unwrap_or_default();
    let mut visitor = LintVisitor {
        registry: &registry,
        findings: Vec::new(),
    };
    walk_blocks(&mut visitor, components);
    visitor.findings
}

/// Whether any finding is an error
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_error)
}

struct LintVisitor<'a> {
    registry: &'a RuleRegistry,
    findings: Vec<Finding>,
}

impl BlockVisitor for LintVisitor<'_> {
    fn visit_block(&mut self, block: &Block) {
        for rule in self.registry.rules() {
            self.findings.extend(rule.check_block(block));
        }
        walk_block(self, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LintRule;
    use crate::Severity;
    use mailblocks_model::{create_component, BlockKind, ButtonBlock, LayoutBlock, TextBlock};

    #[test]
    fn test_button_scenario() {
        let components = vec![Block::Button(ButtonBlock {
            id: "b".to_string(),
            text: String::new(),
            href: "#".to_string(),
            ..Default::default()
        })];

        let findings = validate(&components);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings.iter().filter(|f| f.severity == Severity::Error).count(), 1);
        assert_eq!(findings.iter().filter(|f| f.severity == Severity::Warning).count(), 1);
        assert!(has_errors(&findings));
    }

    #[test]
    fn test_registry_defaults_are_clean() {
        let components: Vec<Block> = [BlockKind::Text, BlockKind::Heading, BlockKind::Divider, BlockKind::Spacer]
            .into_iter()
            .map(create_component)
            .collect();
        assert!(validate(&components).is_empty());
    }

    #[test]
    fn test_recurses_into_layout_columns() {
        let empty_text = Block::Text(TextBlock {
            id: "nested".to_string(),
            content: "<p></p>".to_string(),
            ..Default::default()
        });
        let components = vec![Block::Layout(LayoutBlock {
            id: "l".to_string(),
            columns: vec![vec![], vec![empty_text]],
            ..Default::default()
        })];

        let findings = validate(&components);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].component_id, "nested");
        assert_eq!(findings[0].component_type, BlockKind::Text);
    }

    #[test]
    fn test_empty_layout_and_its_children() {
        let findings = validate(&[create_component(BlockKind::Layout)]);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Layout is empty");
        assert!(!has_errors(&findings));
    }

    struct NoSpacers;

    impl LintRule for NoSpacers {
        fn name(&self) -> &'static str {
            "no-spacers"
        }

        fn description(&self) -> &'static str {
            "Test rule"
        }

        fn check_block(&self, block: &Block) -> Vec<Finding> {
            match block {
                Block::Spacer(_) => vec![Finding::error(self.name(), block, "No spacers")],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = RuleRegistry::empty();
        registry.add_rule(Box::new(NoSpacers));

        let components = vec![create_component(BlockKind::Spacer), create_component(BlockKind::Image)];
        let findings = validate_with(
            &components,
            LintOptions {
                registry: Some(registry),
            },
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "no-spacers");
    }

    #[test]
    fn test_finding_json_shape() {
        let findings = validate(&[create_component(BlockKind::Image)]);
        let json = serde_json::to_value(&findings[0]).unwrap();
        assert_eq!(json["componentType"], "image");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["rule"], "image");
    }
}
