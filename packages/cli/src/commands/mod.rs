pub mod apply;
pub mod export;
pub mod lint;
pub mod new;
pub mod store;

pub use apply::{apply, ApplyArgs};
pub use export::{export, ExportArgs};
pub use lint::{lint, LintArgs};
pub use new::{new, NewArgs};
pub use store::{store, StoreArgs};

use anyhow::{Context, Result};
use mailblocks_editor::Document;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve a user-supplied path against the working directory
pub(crate) fn resolve(cwd: &str, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        PathBuf::from(cwd).join(path)
    }
}

/// Document name derived from a file stem (`spring-sale.json` -> `spring-sale`)
pub(crate) fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Load a block array from disk into a fresh document
pub(crate) fn read_document(path: &Path, name: &str, history_limit: usize) -> Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let document = Document::new(name)
        .with_history_limit(history_limit)
        .import_from_json(&json, Some(name))
        .with_context(|| format!("Invalid document {}", path.display()))?;
    debug!(
        path = %path.display(),
        components = document.components().len(),
        "Loaded document"
    );
    Ok(document)
}

/// Write to a file (creating parent directories) or print to stdout
pub(crate) fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, contents)
                .with_context(|| format!("Cannot write {}", path.display()))?;
            debug!(path = %path.display(), bytes = contents.len(), "Wrote output");
        }
        None => println!("{}", contents),
    }
    Ok(())
}
