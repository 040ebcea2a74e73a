//! # Document Model
//!
//! The single source of truth for a newsletter being edited.
//!
//! A Document holds the ordered top-level blocks, the current selection
//! (optionally pointing one level down into a layout column) and the
//! snapshot history. Every operation takes `&self` and returns a new
//! Document; the previous value stays valid and unchanged.
//!
//! ## Lifecycle
//!
//! ```text
//! Registry → add_component → update/reorder/... → export
//!              ↓                 ↓
//!           snapshot          snapshot   ← undo / redo move between these
//! ```

use crate::history::{History, MAX_HISTORY};
use crate::mutations::{resolve_nested, ComponentPatch, HistoryEffect, Mutation, MutationError};
use crate::EditorError;
use mailblocks_model::{blocks_to_json, parse_blocks, Block, LayoutBlock};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Longest document name kept
pub const MAX_NAME_LEN: usize = 50;

/// Selection of a block living inside a layout column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedSelection {
    pub layout_id: String,
    pub column_index: usize,
    pub component_id: String,
}

/// Editable newsletter document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) name: String,
    pub(crate) components: Vec<Block>,
    pub(crate) selected_component_id: Option<String>,
    pub(crate) selected_nested_component: Option<NestedSelection>,
    pub(crate) history: History,
}

impl Document {
    /// Empty document
    pub fn new(name: impl Into<String>) -> Self {
        let mut doc = Self {
            name: String::new(),
            components: Vec::new(),
            selected_component_id: None,
            selected_nested_component: None,
            history: History::new(Vec::new()),
        };
        doc.set_name(&name.into());
        doc
    }

    /// Document seeded with existing blocks (the history baseline)
    pub fn from_components(name: impl Into<String>, components: Vec<Block>) -> Result<Self, EditorError> {
        if let Some(id) = mailblocks_model::visitor::find_duplicate_id(&components) {
            return Err(MutationError::DuplicateId(id.to_string()).into());
        }

        let mut doc = Self::new(name);
        doc.history = History::new(components.clone());
        doc.components = components;
        Ok(doc)
    }

    /// Change how many snapshots are kept; history restarts from the current content
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = History::with_max_levels(self.components.clone(), limit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn components(&self) -> &[Block] {
        &self.components
    }

    pub fn selected_component_id(&self) -> Option<&str> {
        self.selected_component_id.as_deref()
    }

    pub fn selected_nested_component(&self) -> Option<&NestedSelection> {
        self.selected_nested_component.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The block the property panel should edit: the nested one if any
    pub fn selected_block(&self) -> Option<&Block> {
        if let Some(nested) = &self.selected_nested_component {
            if let Some(block) = resolve_nested(&self.components, nested) {
                return Some(block);
            }
        }
        let id = self.selected_component_id.as_deref()?;
        self.find_component(id)
    }

    /// Top-level block by id
    pub fn find_component(&self, id: &str) -> Option<&Block> {
        self.components.iter().find(|block| block.id() == id)
    }

    /// Top-level layout by id
    pub fn find_layout(&self, id: &str) -> Result<&LayoutBlock, MutationError> {
        let block = self
            .find_component(id)
            .ok_or_else(|| MutationError::ComponentNotFound(id.to_string()))?;
        block
            .as_layout()
            .ok_or_else(|| MutationError::NotALayout(id.to_string()))
    }

    /// Whether `id` is used anywhere in the tree
    pub fn contains_id(&self, id: &str) -> bool {
        self.components.iter().any(|block| block.contains_id(id))
    }

    /// Apply a content mutation, recording history
    pub fn apply(&self, mutation: Mutation) -> Result<Document, EditorError> {
        let mut next = self.clone();
        let effect = mutation.apply(&mut next)?;

        match effect {
            HistoryEffect::Record => next.history.record(next.components.clone()),
            HistoryEffect::Reset => next.history.reset(next.components.clone()),
            HistoryEffect::Skip => {
                debug!(mutation = mutation.name(), "Mutation matched nothing");
                return Ok(next);
            }
        }

        debug!(
            mutation = mutation.name(),
            components = next.components.len(),
            history = next.history.len(),
            history_index = next.history.index(),
            "Applied mutation"
        );
        Ok(next)
    }

    pub fn add_component(&self, block: Block, index: Option<usize>) -> Result<Document, EditorError> {
        self.apply(Mutation::AddComponent { block, index })
    }

    pub fn remove_component(&self, id: &str) -> Result<Document, EditorError> {
        self.apply(Mutation::RemoveComponent { id: id.to_string() })
    }

    pub fn update_component(&self, id: &str, patch: ComponentPatch) -> Result<Document, EditorError> {
        self.apply(Mutation::UpdateComponent {
            id: id.to_string(),
            patch,
        })
    }

    pub fn reorder_components(&self, components: Vec<Block>) -> Result<Document, EditorError> {
        self.apply(Mutation::ReorderComponents { components })
    }

    pub fn duplicate_component(&self, id: &str) -> Result<Document, EditorError> {
        self.apply(Mutation::DuplicateComponent { id: id.to_string() })
    }

    /// Remove every block. Callers confirm with the user first.
    pub fn clear_all(&self) -> Result<Document, EditorError> {
        info!(components = self.components.len(), "Clearing document");
        self.apply(Mutation::ClearAll)
    }

    /// Replace content from the JSON exchange format
    ///
    /// On failure the current document is left as it was. On success
    /// history restarts with the imported blocks as its only snapshot.
    pub fn import_from_json(&self, json: &str, name: Option<&str>) -> Result<Document, EditorError> {
        let components = parse_blocks(json)?;
        info!(components = components.len(), "Importing document");
        self.apply(Mutation::Import {
            components,
            name: name.map(str::to_string),
        })
    }

    /// Current blocks in the JSON exchange format
    pub fn export_to_json(&self) -> Result<String, EditorError> {
        Ok(blocks_to_json(&self.components)?)
    }

    /// Select a top-level block (or nothing); clears nested selection
    pub fn select_component(&self, id: Option<&str>) -> Document {
        let mut next = self.clone();
        next.selected_component_id = id.map(str::to_string);
        next.selected_nested_component = None;
        next
    }

    /// Select a block inside a layout column
    pub fn select_nested_component(&self, layout_id: &str, column_index: usize, component_id: &str) -> Document {
        let mut next = self.clone();
        next.selected_component_id = Some(layout_id.to_string());
        next.selected_nested_component = Some(NestedSelection {
            layout_id: layout_id.to_string(),
            column_index,
            component_id: component_id.to_string(),
        });
        next
    }

    pub fn clear_nested_selection(&self) -> Document {
        let mut next = self.clone();
        next.selected_nested_component = None;
        next
    }

    /// Rename; names longer than [`MAX_NAME_LEN`] characters are cut
    pub fn update_name(&self, name: &str) -> Document {
        let mut next = self.clone();
        next.set_name(name);
        next
    }

    /// Step back one snapshot; no-op at the oldest
    pub fn undo(&self) -> Document {
        let mut next = self.clone();
        if let Some(snapshot) = next.history.undo() {
            next.components = snapshot.to_vec();
            next.selected_component_id = None;
            next.selected_nested_component = None;
            debug!(history_index = next.history.index(), "Undo");
        }
        next
    }

    /// Step forward one snapshot; no-op at the newest
    pub fn redo(&self) -> Document {
        let mut next = self.clone();
        if let Some(snapshot) = next.history.redo() {
            next.components = snapshot.to_vec();
            next.selected_component_id = None;
            next.selected_nested_component = None;
            debug!(history_index = next.history.index(), "Redo");
        }
        next
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.chars().take(MAX_NAME_LEN).collect();
    }

    /// Drop selections whose target no longer exists
    pub(crate) fn prune_selection(&mut self) {
        if let Some(id) = self.selected_component_id.as_deref() {
            if self.find_component(id).is_none() {
                self.selected_component_id = None;
            }
        }
        if let Some(nested) = &self.selected_nested_component {
            if resolve_nested(&self.components, nested).is_none() {
                debug!(component_id = %nested.component_id, "Clearing dangling nested selection");
                self.selected_nested_component = None;
            }
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
