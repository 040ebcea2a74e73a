use super::{name_from_path, read_document, resolve, write_output};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use mailblocks_compiler_html::export_document_with;
use mailblocks_editor::{FileStore, NewsletterDraft, NewsletterRecord, NewsletterStore};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,
}

#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Save a document (with its exported HTML) as a newsletter
    Put {
        /// Document JSON (array of blocks)
        document: PathBuf,

        /// Newsletter title (defaults to the file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Update this stored newsletter instead of creating a new one
        #[arg(long)]
        id: Option<String>,
    },

    /// Write a stored newsletter's blocks as a document
    Get {
        id: String,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List stored newsletters, newest first
    List,

    /// Delete a stored newsletter
    Delete { id: String },

    /// Mark a stored newsletter as sent
    MarkSent { id: String },
}

pub fn store(args: StoreArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = FileStore::open(config.get_store_dir(cwd))?;

    match args.command {
        StoreCommand::Put { document, title, id } => {
            let path = resolve(cwd, &document);
            let title = title.unwrap_or_else(|| name_from_path(&path));
            let document = read_document(&path, &title, config.history_limit)?;
            let html = export_document_with(document.name(), document.components(), &config.export_options());
            let draft = NewsletterDraft::from_document(&document, html)?;

            let record = match id {
                Some(id) => store.update(&id, draft)?,
                None => store.create(draft)?,
            };
            println!("{} Saved {} as {}", "✓".green(), record.title.bright_white(), record.id);
        }
        StoreCommand::Get { id, output } => {
            let record = store.fetch(&id)?;
            let json = record.to_document()?.export_to_json()?;
            write_output(output.map(|o| resolve(cwd, &o)).as_deref(), &json)?;
        }
        StoreCommand::List => {
            let records = store.list()?;
            if records.is_empty() {
                println!("{}", "No newsletters stored".dimmed());
            }
            for record in &records {
                println!("{}", format_record(record));
            }
        }
        StoreCommand::Delete { id } => {
            store.delete(&id)?;
            println!("{} Deleted {}", "✓".green(), id);
        }
        StoreCommand::MarkSent { id } => {
            let record = store.mark_sent(&id)?;
            println!("{} Marked {} as sent", "✓".green(), record.title.bright_white());
        }
    }

    Ok(())
}

fn format_record(record: &NewsletterRecord) -> String {
    let status = if record.sent { "sent" } else { "draft" };
    format!(
        "{}  {}  {}  {}",
        record.id,
        record.updated_at.format("%Y-%m-%d %H:%M"),
        status,
        record.title
    )
}
