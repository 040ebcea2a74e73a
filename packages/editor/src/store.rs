//! # Newsletter Store
//!
//! Boundary to the newsletter persistence collaborator.
//!
//! Records carry the block JSON exchange format as an opaque `sections`
//! string alongside the exported HTML. [`MemoryStore`] backs tests and the
//! browser session; [`FileStore`] keeps one JSON file per newsletter.

use crate::{Document, EditorError};
use chrono::{DateTime, Utc};
use mailblocks_model::{new_id, parse_blocks};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Newsletter not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Content submitted for create/update
#[derive(Debug, Clone, PartialEq)]
pub struct NewsletterDraft {
    pub title: String,
    pub sections: String,
    pub html_content: String,
}

impl NewsletterDraft {
    /// Snapshot a document together with its exported HTML
    pub fn from_document(doc: &Document, html_content: impl Into<String>) -> Result<Self, EditorError> {
        Ok(Self {
            title: doc.name().to_string(),
            sections: doc.export_to_json()?,
            html_content: html_content.into(),
        })
    }
}

/// A stored newsletter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterRecord {
    pub id: String,
    pub title: String,
    /// Block JSON exchange format
    pub sections: String,
    pub html_content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub sent: bool,
}

impl NewsletterRecord {
    fn new(draft: NewsletterDraft) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: draft.title,
            sections: draft.sections,
            html_content: draft.html_content,
            created_at: now,
            updated_at: now,
            sent: false,
        }
    }

    fn revise(&mut self, draft: NewsletterDraft) {
        self.title = draft.title;
        self.sections = draft.sections;
        self.html_content = draft.html_content;
        self.updated_at = Utc::now();
    }

    /// Reopen the stored sections for editing
    pub fn to_document(&self) -> Result<Document, EditorError> {
        Document::from_components(self.title.as_str(), parse_blocks(&self.sections)?)
    }
}

/// Newsletter persistence (CRUD by id)
pub trait NewsletterStore {
    fn create(&mut self, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError>;

    fn update(&mut self, id: &str, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError>;

    fn fetch(&self, id: &str) -> Result<NewsletterRecord, StoreError>;

    /// All records, newest first
    fn list(&self) -> Result<Vec<NewsletterRecord>, StoreError>;

    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    fn mark_sent(&mut self, id: &str) -> Result<NewsletterRecord, StoreError>;
}

/// Most recently updated first, ties broken by id
fn newest_first(records: &mut [NewsletterRecord]) {
    records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<String, NewsletterRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut NewsletterRecord, StoreError> {
        self.records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl NewsletterStore for MemoryStore {
    fn create(&mut self, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError> {
        let record = NewsletterRecord::new(draft);
        self.records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&mut self, id: &str, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError> {
        let record = self.get_mut(id)?;
        record.revise(draft);
        Ok(record.clone())
    }

    fn fetch(&self, id: &str) -> Result<NewsletterRecord, StoreError> {
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn list(&self) -> Result<Vec<NewsletterRecord>, StoreError> {
        let mut records: Vec<_> = self.records.values().cloned().collect();
        newest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn mark_sent(&mut self, id: &str) -> Result<NewsletterRecord, StoreError> {
        let record = self.get_mut(id)?;
        record.sent = true;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }
}

/// One `<id>.json` file per newsletter under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store directory
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "Opened newsletter store");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record file for `id`; ids that could escape the directory match nothing
    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        let escapes = id.is_empty() || id.contains("..") || id.contains(['/', '\\']);
        if escapes {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    fn write(&self, record: &NewsletterRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)?;
        fs::write(self.path_for(&record.id)?, json)?;
        Ok(())
    }

    fn read(path: &Path) -> Result<NewsletterRecord, StoreError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl NewsletterStore for FileStore {
    fn create(&mut self, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError> {
        let record = NewsletterRecord::new(draft);
        self.write(&record)?;
        info!(id = %record.id, title = %record.title, "Stored newsletter");
        Ok(record)
    }

    fn update(&mut self, id: &str, draft: NewsletterDraft) -> Result<NewsletterRecord, StoreError> {
        let mut record = self.fetch(id)?;
        record.revise(draft);
        self.write(&record)?;
        info!(id = %record.id, "Updated newsletter");
        Ok(record)
    }

    fn fetch(&self, id: &str) -> Result<NewsletterRecord, StoreError> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Self::read(&path)
    }

    fn list(&self) -> Result<Vec<NewsletterRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                records.push(Self::read(&path)?);
            }
        }
        newest_first(&mut records);
        Ok(records)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fs::remove_file(path)?;
        info!(id = %id, "Deleted newsletter");
        Ok(())
    }

    fn mark_sent(&mut self, id: &str) -> Result<NewsletterRecord, StoreError> {
        let mut record = self.fetch(id)?;
        record.sent = true;
        record.updated_at = Utc::now();
        self.write(&record)?;
        Ok(record)
    }
}
