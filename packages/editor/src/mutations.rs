//! # Document Mutations
//!
//! The content-altering operations of the document model.
//!
//! ## Design Principles
//!
//! 1. **Whole-value**: a mutation produces a new block list; nothing outside
//!    the model observes a half-applied change
//! 2. **Validated**: id uniqueness holds after every mutation
//! 3. **Recorded**: each successful mutation leaves exactly one snapshot
//!    in history (import starts a fresh history instead)
//!
//! ## Mutation Semantics
//!
//! ### UpdateComponent
//! - Shallow merge of the patch over the block's fields
//! - `id` and `type` cannot change
//! - Nested blocks are edited by patching the owning layout's `columns`
//!
//! ### RemoveComponent / DuplicateComponent
//! - Address top-level blocks only
//! - Unknown ids are a no-op and record nothing
//!
//! ### ReorderComponents
//! - Replaces the whole top-level list; it need not be a permutation of
//!   the previous one, but ids must stay unique

use crate::document::{Document, NestedSelection};
use mailblocks_model::visitor::find_duplicate_id;
use mailblocks_model::Block;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Content-altering operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a block at `index`, or append when absent
    AddComponent {
        block: Block,
        #[serde(default)]
        index: Option<usize>,
    },

    /// Remove a top-level block
    RemoveComponent { id: String },

    /// Shallow-merge fields into a top-level block
    UpdateComponent { id: String, patch: ComponentPatch },

    /// Replace the top-level sequence (after a drag-and-drop)
    ReorderComponents { components: Vec<Block> },

    /// Deep-copy a block with fresh ids and insert it after the original
    DuplicateComponent { id: String },

    /// Remove every block
    ClearAll,

    /// Replace the content and restart history from it
    Import {
        components: Vec<Block>,
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Duplicate component id: {0}")]
    DuplicateId(String),

    #[error("Field cannot be changed: {0}")]
    ImmutableField(String),

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    #[error("Component is not a layout: {0}")]
    NotALayout(String),

    #[error("Column {index} out of range (layout has {columns} columns)")]
    ColumnOutOfRange { index: usize, columns: usize },

    #[error("Layouts can only be nested one level deep")]
    NestingTooDeep,
}

/// What a successful mutation does to history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryEffect {
    /// Content changed; push a snapshot
    Record,
    /// History restarted from the new content
    Reset,
    /// Nothing changed
    Skip,
}

impl Mutation {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "add_component",
            Mutation::RemoveComponent { .. } => "remove_component",
            Mutation::UpdateComponent { .. } => "update_component",
            Mutation::ReorderComponents { .. } => "reorder_components",
            Mutation::DuplicateComponent { .. } => "duplicate_component",
            Mutation::ClearAll => "clear_all",
            Mutation::Import { .. } => "import",
        }
    }

    /// Apply to a document being built, reporting the history effect
    pub(crate) fn apply(&self, doc: &mut Document) -> Result<HistoryEffect, MutationError> {
        match self {
            Mutation::AddComponent { block, index } => Self::apply_add(doc, block, *index),
            Mutation::RemoveComponent { id } => Ok(Self::apply_remove(doc, id)),
            Mutation::UpdateComponent { id, patch } => Self::apply_update(doc, id, patch),
            Mutation::ReorderComponents { components } => Self::apply_reorder(doc, components),
            Mutation::DuplicateComponent { id } => Ok(Self::apply_duplicate(doc, id)),
            Mutation::ClearAll => {
                doc.components.clear();
                doc.selected_component_id = None;
                doc.selected_nested_component = None;
                Ok(HistoryEffect::Record)
            }
            Mutation::Import { components, name } => Self::apply_import(doc, components, name),
        }
    }

    fn apply_add(
        doc: &mut Document,
        block: &Block,
        index: Option<usize>,
    ) -> Result<HistoryEffect, MutationError> {
        let incoming = std::slice::from_ref(block);
        if let Some(id) = find_duplicate_id(incoming) {
            return Err(MutationError::DuplicateId(id.to_string()));
        }
        if let Some(clash) = mailblocks_model::visitor::collect_ids(incoming)
            .into_iter()
            .find(|id| doc.contains_id(id))
        {
            return Err(MutationError::DuplicateId(clash.to_string()));
        }

        let at = index.unwrap_or(doc.components.len()).min(doc.components.len());
        doc.components.insert(at, block.clone());
        doc.selected_component_id = Some(block.id().to_string());
        doc.selected_nested_component = None;
        Ok(HistoryEffect::Record)
    }

    fn apply_remove(doc: &mut Document, id: &str) -> HistoryEffect {
        let before = doc.components.len();
        doc.components.retain(|block| block.id() != id);
        if doc.components.len() == before {
            return HistoryEffect::Skip;
        }

        if doc.selected_component_id.as_deref() == Some(id) {
            doc.selected_component_id = None;
        }
        doc.prune_selection();
        HistoryEffect::Record
    }

    fn apply_update(
        doc: &mut Document,
        id: &str,
        patch: &ComponentPatch,
    ) -> Result<HistoryEffect, MutationError> {
        let Some(position) = doc.components.iter().position(|block| block.id() == id) else {
            return Ok(HistoryEffect::Skip);
        };

        let updated = patch.apply_to(&doc.components[position])?;
        let previous = std::mem::replace(&mut doc.components[position], updated);

        if let Some(duplicate) = find_duplicate_id(&doc.components) {
            let duplicate = duplicate.to_string();
            doc.components[position] = previous;
            return Err(MutationError::DuplicateId(duplicate));
        }

        doc.prune_selection();
        Ok(HistoryEffect::Record)
    }

    fn apply_reorder(doc: &mut Document, components: &[Block]) -> Result<HistoryEffect, MutationError> {
        if let Some(id) = find_duplicate_id(components) {
            return Err(MutationError::DuplicateId(id.to_string()));
        }

        if !is_permutation(&doc.components, components) {
            tracing::warn!(
                before = doc.components.len(),
                after = components.len(),
                "Reorder changed the set of top-level blocks"
            );
        }

        doc.components = components.to_vec();
        doc.prune_selection();
        Ok(HistoryEffect::Record)
    }

    fn apply_duplicate(doc: &mut Document, id: &str) -> HistoryEffect {
        let Some(position) = doc.components.iter().position(|block| block.id() == id) else {
            return HistoryEffect::Skip;
        };

        let copy = doc.components[position].with_fresh_ids();
        doc.selected_component_id = Some(copy.id().to_string());
        doc.selected_nested_component = None;
        doc.components.insert(position + 1, copy);
        HistoryEffect::Record
    }

    fn apply_import(
        doc: &mut Document,
        components: &[Block],
        name: &Option<String>,
    ) -> Result<HistoryEffect, MutationError> {
        if let Some(id) = find_duplicate_id(components) {
            return Err(MutationError::DuplicateId(id.to_string()));
        }

        doc.components = components.to_vec();
        if let Some(name) = name {
            doc.set_name(name);
        }
        doc.selected_component_id = None;
        doc.selected_nested_component = None;
        Ok(HistoryEffect::Reset)
    }
}

fn is_permutation(before: &[Block], after: &[Block]) -> bool {
    let mut old: Vec<&str> = before.iter().map(Block::id).collect();
    let mut new: Vec<&str> = after.iter().map(Block::id).collect();
    old.sort_unstable();
    new.sort_unstable();
    old == new
}

/// Partial field update for a block
///
/// A map from camelCase field name to new value, merged shallowly over the
/// block's JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentPatch(Map<String, Value>);

impl ComponentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field
    pub fn set(mut self, field: &str, value: impl Serialize) -> Result<Self, MutationError> {
        let value = serde_json::to_value(value)
            .map_err(|e| MutationError::InvalidPatch(format!("{}: {}", field, e)))?;
        self.0.insert(field.to_string(), value);
        Ok(self)
    }

    /// Patch replacing a layout's columns
    pub fn columns(columns: &[Vec<Block>]) -> Result<Self, MutationError> {
        Self::new().set("columns", columns)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge this patch over `block`, producing the updated block
    pub fn apply_to(&self, block: &Block) -> Result<Block, MutationError> {
        let mut value = serde_json::to_value(block)
            .map_err(|e| MutationError::InvalidPatch(e.to_string()))?;
        let Value::Object(fields) = &mut value else {
            return Err(MutationError::InvalidPatch("block is not an object".to_string()));
        };

        for (key, new_value) in &self.0 {
            if key == "id" || key == "type" {
                if fields.get(key) != Some(new_value) {
                    return Err(MutationError::ImmutableField(key.clone()));
                }
                continue;
            }
            fields.insert(key.clone(), new_value.clone());
        }

        serde_json::from_value(value).map_err(|e| MutationError::InvalidPatch(e.to_string()))
    }
}

impl From<Map<String, Value>> for ComponentPatch {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Where a nested selection currently points, if it still resolves
pub(crate) fn resolve_nested<'a>(
    components: &'a [Block],
    selection: &NestedSelection,
) -> Option<&'a Block> {
    components
        .iter()
        .find(|block| block.id() == selection.layout_id)
        .and_then(Block::as_layout)
        .and_then(|layout| layout.columns.get(selection.column_index))
        .and_then(|column| column.iter().find(|child| child.id() == selection.component_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailblocks_model::{create_component, BlockKind, TextAlign};

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateComponent {
            id: "text-123".to_string(),
            patch: ComponentPatch::new().set("content", "<p>Hello</p>").unwrap(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_patch_merges_fields() {
        let block = create_component(BlockKind::Text);
        let patch = ComponentPatch::new()
            .set("alignment", "center")
            .unwrap()
            .set("fontSize", 18)
            .unwrap();

        let Block::Text(text) = patch.apply_to(&block).unwrap() else {
            panic!("Expected text");
        };
        assert_eq!(text.alignment, TextAlign::Center);
        assert_eq!(text.font_size, 18);
        assert_eq!(text.id, block.id());
    }

    #[test]
    fn test_patch_cannot_change_identity() {
        let block = create_component(BlockKind::Spacer);

        let retype = ComponentPatch::new().set("type", "divider").unwrap();
        assert_eq!(
            retype.apply_to(&block),
            Err(MutationError::ImmutableField("type".to_string()))
        );

        let same_id = ComponentPatch::new().set("id", block.id()).unwrap();
        assert!(same_id.apply_to(&block).is_ok());
    }

    #[test]
    fn test_patch_with_wrong_shape_is_rejected() {
        let block = create_component(BlockKind::Spacer);
        let patch = ComponentPatch::new().set("height", "tall").unwrap();
        assert!(matches!(
            patch.apply_to(&block),
            Err(MutationError::InvalidPatch(_))
        ));
    }

    #[test]
    fn test_mutation_names() {
        assert_eq!(Mutation::ClearAll.name(), "clear_all");
        assert_eq!(
            Mutation::RemoveComponent { id: "x".to_string() }.name(),
            "remove_component"
        );
    }
}
