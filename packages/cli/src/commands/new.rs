use super::{resolve, write_output};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mailblocks_model::{blocks_to_json, create_component_named, Block};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Newsletter name
    pub name: String,

    /// Block types to start with, in order (text, heading, image, ...)
    #[arg(short, long, value_delimiter = ',')]
    pub blocks: Vec<String>,

    /// Output file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let blocks = build_blocks(&args.blocks)?;
    let json = blocks_to_json(&blocks)?;

    match &args.output {
        Some(output) => {
            let path = resolve(cwd, output);
            write_output(Some(&path), &json)?;
            println!(
                "{} Created {} with {} blocks → {}",
                "✓".green(),
                args.name.bright_white(),
                blocks.len(),
                path.display()
            );
        }
        None => write_output(None, &json)?,
    }

    Ok(())
}

fn build_blocks(types: &[String]) -> Result<Vec<Block>> {
    types
        .iter()
        .map(|name| create_component_named(name.trim()).map_err(anyhow::Error::from))
        .collect()
}
