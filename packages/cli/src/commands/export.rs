use super::{name_from_path, read_document, resolve, write_output};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_compiler_html::export_document_with;
use mailblocks_linter::{validate, Finding, Severity};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Document JSON (array of blocks)
    pub document: PathBuf,

    /// Newsletter name for the HTML title (defaults to the file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output file (overrides config outDir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print HTML to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Emit HTML without indentation
    #[arg(long)]
    pub compact: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document_path = resolve(cwd, &args.document);
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| name_from_path(&document_path));

    let document = read_document(&document_path, &name, config.history_limit)?;

    // Findings are advisory; export always proceeds.
    let findings = validate(document.components());
    print_findings(&findings);

    let mut options = config.export_options();
    if args.compact {
        options.pretty = false;
    }
    let html = export_document_with(document.name(), document.components(), &options);

    if args.stdout {
        return write_output(None, &html);
    }

    let output = output_path(&args, &config, cwd, &document_path);
    write_output(Some(&output), &html)?;
    println!("{} {} → {}", "✓".green(), document.name(), output.display());

    Ok(())
}

fn output_path(args: &ExportArgs, config: &Config, cwd: &str, document_path: &Path) -> PathBuf {
    match &args.output {
        Some(output) => resolve(cwd, output),
        None => config
            .get_out_dir(cwd)
            .join(format!("{}.html", name_from_path(document_path))),
    }
}

fn print_findings(findings: &[Finding]) {
    for finding in findings {
        let label = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        eprintln!(
            "  {} {} ({}): {}",
            label,
            finding.component_type.as_str(),
            finding.component_id.dimmed(),
            finding.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(document: &str) -> ExportArgs {
        ExportArgs {
            document: PathBuf::from(document),
            name: None,
            output: None,
            stdout: false,
            compact: false,
        }
    }

    #[test]
    fn test_export_to_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        std::fs::write(
            dir.path().join("welcome.json"),
            r#"[{ "id": "h", "type": "heading", "text": "Hello & welcome" }]"#,
        )
        .unwrap();

        export(args("welcome.json"), &cwd).unwrap();

        let html = std::fs::read_to_string(dir.path().join("dist/welcome.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>welcome</title>"));
        assert!(html.contains("Hello &amp; welcome"));
    }

    #[test]
    fn test_errors_do_not_block_export() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        std::fs::write(
            dir.path().join("doc.json"),
            r##"[{ "id": "b", "type": "button", "text": "", "href": "#" }]"##,
        )
        .unwrap();

        let mut export_args = args("doc.json");
        export_args.output = Some(PathBuf::from("out/doc.html"));
        export_args.name = Some("Promo".to_string());
        export_args.compact = true;
        export(export_args, &cwd).unwrap();

        let html = std::fs::read_to_string(dir.path().join("out/doc.html")).unwrap();
        assert!(html.contains("<title>Promo</title>"));
        assert!(!html.contains("\n  "));
    }

    #[test]
    fn test_missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        assert!(export(args("nope.json"), &cwd).is_err());
    }
}
