use crate::diagnostic::{Finding, Severity};

/// Human-readable validation report
pub fn summary(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "Newsletter validation passed! No issues found.".to_string();
    }

    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let warnings = findings.len() - errors;

    let mut out = String::from("Validation Results:\n\n");
    if errors > 0 {
        out.push_str(&format!("❌ {} {}\n", errors, plural(errors, "error")));
    }
    if warnings > 0 {
        out.push_str(&format!("⚠️ {} {}\n", warnings, plural(warnings, "warning")));
    }

    out.push('\n');
    for finding in findings {
        let icon = match finding.severity {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
        };
        out.push_str(&format!(
            "{} {}: {}\n",
            icon,
            finding.component_type.as_str(),
            finding.message
        ));
    }
    out
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use mailblocks_model::{create_component, Block, BlockKind, ButtonBlock};

    #[test]
    fn test_clean_summary() {
        assert_eq!(summary(&[]), "Newsletter validation passed! No issues found.");
    }

    #[test]
    fn test_counts_and_lines() {
        let components = vec![
            Block::Button(ButtonBlock {
                id: "b".to_string(),
                href: "#".to_string(),
                ..Default::default()
            }),
            create_component(BlockKind::Image),
        ];
        let report = summary(&validate(&components));

        assert!(report.starts_with("Validation Results:\n\n"));
        assert!(report.contains("❌ 1 error\n"));
        assert!(report.contains("⚠️ 2 warnings\n"));
        assert!(report.contains("❌ button: Button text is missing\n"));
        assert!(report.contains("⚠️ image: Image source is missing\n"));
    }
}
