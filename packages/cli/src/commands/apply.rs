use super::{name_from_path, read_document, resolve, write_output};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailblocks_editor::{Document, Mutation};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Document JSON (array of blocks)
    pub document: PathBuf,

    /// Mutation script (JSON array of mutations)
    pub mutations: PathBuf,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Undo this many steps after replaying the script
    #[arg(long, default_value_t = 0)]
    pub undo: usize,
}

pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document_path = resolve(cwd, &args.document);
    let script_path = resolve(cwd, &args.mutations);

    let document = read_document(&document_path, &name_from_path(&document_path), config.history_limit)?;
    let script = fs::read_to_string(&script_path)
        .with_context(|| format!("Cannot read {}", script_path.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid mutation script {}", script_path.display()))?;

    let count = mutations.len();
    let document = replay(document, mutations, args.undo)?;
    let json = document.export_to_json()?;

    match &args.output {
        Some(output) => {
            let path = resolve(cwd, output);
            write_output(Some(&path), &json)?;
            eprintln!(
                "{} Applied {} mutations ({} undone) → {}",
                "✓".green(),
                count,
                args.undo,
                path.display()
            );
        }
        None => write_output(None, &json)?,
    }

    Ok(())
}

/// Run each mutation in order, then step back `undo` times
pub(crate) fn replay(mut document: Document, mutations: Vec<Mutation>, undo: usize) -> Result<Document> {
    for (step, mutation) in mutations.into_iter().enumerate() {
        let name = mutation.name();
        document = document
            .apply(mutation)
            .with_context(|| format!("Mutation {} ({}) failed", step + 1, name))?;
    }

    for _ in 0..undo {
        if !document.can_undo() {
            break;
        }
        document = document.undo();
    }

    Ok(document)
}
