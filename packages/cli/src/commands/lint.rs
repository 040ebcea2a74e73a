use super::resolve;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_linter::{validate, Finding, Severity};
use mailblocks_model::parse_blocks;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Document JSON file or directory of documents
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Default, PartialEq)]
struct Totals {
    files: usize,
    errors: usize,
    warnings: usize,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let input = resolve(cwd, &args.input);
    let json = args.format == "json";

    if !json {
        println!("🔍 {} Mailblocks Linter", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let totals = lint_path(&input, json)?;

    if !json {
        println!();
        println!(
            "✨ {} Linting complete!",
            if totals.errors > 0 {
                "Done".red().bold()
            } else {
                "Done".green().bold()
            }
        );
        println!("   Files checked: {}", totals.files);

        if totals.errors > 0 {
            println!("   {} {}", "Errors:".red(), totals.errors);
        }
        if totals.warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), totals.warnings);
        }
        if totals.errors == 0 && totals.warnings == 0 {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if totals.errors > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn lint_path(input: &Path, json: bool) -> Result<Totals> {
    let files = if input.is_file() {
        vec![input.to_path_buf()]
    } else if input.is_dir() {
        find_json_files(input)
    } else {
        return Err(anyhow::anyhow!(
            "Input path does not exist: {}",
            input.display()
        ));
    };

    let mut totals = Totals::default();
    for file in files {
        let (errors, warnings) = lint_file(&file, json)?;
        totals.files += 1;
        totals.errors += errors;
        totals.warnings += warnings;
    }
    Ok(totals)
}

fn lint_file(file_path: &Path, json: bool) -> Result<(usize, usize)> {
    let source = fs::read_to_string(file_path)?;

    let blocks = match parse_blocks(&source) {
        Ok(blocks) => blocks,
        Err(err) => {
            eprintln!("{} Failed to parse {}: {}", "✗".red(), file_path.display(), err);
            return Ok((1, 0));
        }
    };

    let findings = validate(&blocks);
    let errors = findings.iter().filter(|f| f.is_error()).count();
    let warnings = findings.len() - errors;

    if json {
        println!("{}", serde_json::to_string_pretty(&findings)?);
    } else if !findings.is_empty() {
        print_findings(file_path, &findings);
    }

    Ok((errors, warnings))
}

fn print_findings(file_path: &Path, findings: &[Finding]) {
    println!("{}", file_path.display());

    for finding in findings {
        let level = match finding.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!(
            "  {} [{}] {} {}: {}",
            level,
            finding.rule,
            finding.component_type.as_str(),
            finding.component_id.dimmed(),
            finding.message
        );

        if let Some(suggestion) = &finding.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
}

fn find_json_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|e| e == "json"))
        .filter(|path| !path.ends_with(crate::config::DEFAULT_CONFIG_NAME))
        .collect()
}
