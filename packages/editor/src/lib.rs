//! # Mailblocks Editor
//!
//! Document model and history engine for the newsletter editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks, style defaults, registry     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Apply mutations, one snapshot each       │
//! │  - Bounded undo/redo                        │
//! │  - Top-level and nested selection           │
//! │  - Layout column helpers                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: blocks → email HTML          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Blocks are the source of truth**: HTML and JSON are derived views
//! 2. **Values, not places**: every operation returns a new Document
//! 3. **Selection is not content**: selecting never touches history
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mailblocks_editor::{ComponentPatch, Document};
//! use mailblocks_model::{create_component, BlockKind};
//!
//! let doc = Document::new("Weekly digest");
//! let heading = create_component(BlockKind::Heading);
//! let id = heading.id().to_string();
//!
//! let doc = doc.add_component(heading, None)?;
//! let doc = doc.update_component(&id, ComponentPatch::new().set("text", "Hello")?)?;
//!
//! let doc = doc.undo();
//! assert!(doc.can_redo());
//! ```

mod document;
mod errors;
mod history;
pub mod layout;
mod mutations;
pub mod reorder;
mod session;
pub mod store;

pub use document::{Document, NestedSelection, MAX_NAME_LEN};
pub use errors::EditorError;
pub use history::{History, MAX_HISTORY};
pub use mutations::{ComponentPatch, Mutation, MutationError};
pub use session::{Account, AppState, PersistedState, Subscriber};
pub use store::{FileStore, MemoryStore, NewsletterDraft, NewsletterRecord, NewsletterStore, StoreError};
