//! Nested editing inside layout columns.
//!
//! The document has no primitive for nested blocks. Each helper reads the
//! owning top-level layout, builds its new `columns` and returns the patch
//! to hand to [`Document::update_component`] for that layout:
//!
//! ```rust,ignore
//! let patch = layout::add_to_column(&doc, &layout_id, 1, block, None)?;
//! let doc = doc.update_component(&layout_id, patch)?;
//! ```

use crate::document::Document;
use crate::mutations::{ComponentPatch, MutationError};
use mailblocks_model::visitor::{collect_ids, max_layout_depth};
use mailblocks_model::Block;

/// Deepest allowed layout nesting: a layout inside a top-level layout column
pub const MAX_LAYOUT_DEPTH: usize = 2;

/// Column count bounds for [`set_column_count`]
pub const MIN_COLUMNS: usize = 1;
pub const MAX_COLUMNS: usize = 12;

/// Insert `block` into a column at `index`, or append when absent
pub fn add_to_column(
    doc: &Document,
    layout_id: &str,
    column_index: usize,
    block: Block,
    index: Option<usize>,
) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;
    check_nesting(&block)?;
    if let Some(clash) = collect_ids(std::slice::from_ref(&block))
        .into_iter()
        .find(|id| doc.contains_id(id))
    {
        return Err(MutationError::DuplicateId(clash.to_string()));
    }

    let mut columns = layout.columns.clone();
    let column = column_mut(&mut columns, column_index)?;
    let at = index.unwrap_or(column.len()).min(column.len());
    column.insert(at, block);

    ComponentPatch::columns(&columns)
}

/// Remove a block from a column; unknown ids leave the columns as they are
pub fn remove_from_column(
    doc: &Document,
    layout_id: &str,
    column_index: usize,
    component_id: &str,
) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;

    let mut columns = layout.columns.clone();
    column_mut(&mut columns, column_index)?.retain(|child| child.id() != component_id);

    ComponentPatch::columns(&columns)
}

/// Shallow-merge `patch` into one block of a column
pub fn update_in_column(
    doc: &Document,
    layout_id: &str,
    column_index: usize,
    component_id: &str,
    patch: &ComponentPatch,
) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;

    let mut columns = layout.columns.clone();
    let column = column_mut(&mut columns, column_index)?;
    let child = column
        .iter_mut()
        .find(|child| child.id() == component_id)
        .ok_or_else(|| MutationError::ComponentNotFound(component_id.to_string()))?;

    let updated = patch.apply_to(child)?;
    check_nesting(&updated)?;
    *child = updated;

    ComponentPatch::columns(&columns)
}

/// Deep-copy a nested block with fresh ids, placing the copy right after it
pub fn duplicate_in_column(
    doc: &Document,
    layout_id: &str,
    column_index: usize,
    component_id: &str,
) -> Result<(ComponentPatch, String), MutationError> {
    let layout = doc.find_layout(layout_id)?;

    let mut columns = layout.columns.clone();
    let column = column_mut(&mut columns, column_index)?;
    let position = column
        .iter()
        .position(|child| child.id() == component_id)
        .ok_or_else(|| MutationError::ComponentNotFound(component_id.to_string()))?;

    let copy = column[position].with_fresh_ids();
    let copy_id = copy.id().to_string();
    column.insert(position + 1, copy);

    Ok((ComponentPatch::columns(&columns)?, copy_id))
}

/// Drag a block between or within the columns of one layout
///
/// `to` is the (column, index) slot in the columns as they look after the
/// block has been taken out; the index is clamped to the column length.
pub fn move_within_layout(
    doc: &Document,
    layout_id: &str,
    from: (usize, usize),
    to: (usize, usize),
) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;
    let column_count = layout.columns.len();

    let mut columns = layout.columns.clone();
    if to.0 >= column_count {
        return Err(MutationError::ColumnOutOfRange {
            index: to.0,
            columns: column_count,
        });
    }

    let source = column_mut(&mut columns, from.0)?;
    if from.1 >= source.len() {
        return Err(MutationError::ComponentNotFound(format!(
            "{}[{}][{}]",
            layout_id, from.0, from.1
        )));
    }
    let block = source.remove(from.1);

    let target = &mut columns[to.0];
    let at = to.1.min(target.len());
    target.insert(at, block);

    ComponentPatch::columns(&columns)
}

/// Resize to `count` columns (clamped to 1..=12) with equal widths
///
/// Extra columns start empty; dropping columns discards their blocks.
pub fn set_column_count(doc: &Document, layout_id: &str, count: usize) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;
    let count = count.clamp(MIN_COLUMNS, MAX_COLUMNS);

    let mut columns = layout.columns.clone();
    columns.resize_with(count, Vec::new);

    ComponentPatch::columns(&columns)?.set("columnWidths", equal_widths(count))
}

/// Apply a width preset such as `"60-40"` or `"25-50-25"`
pub fn set_width_preset(doc: &Document, layout_id: &str, preset: &str) -> Result<ComponentPatch, MutationError> {
    let layout = doc.find_layout(layout_id)?;
    let widths = parse_width_preset(preset)?;
    if widths.len() != layout.columns.len() {
        return Err(MutationError::InvalidPatch(format!(
            "preset {} has {} widths for {} columns",
            preset,
            widths.len(),
            layout.columns.len()
        )));
    }

    ComponentPatch::new().set("columnWidths", widths)
}

/// `"60-40"` → `["60%", "40%"]`
pub fn parse_width_preset(preset: &str) -> Result<Vec<String>, MutationError> {
    preset
        .split('-')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map(|_| format!("{}%", part.trim()))
                .map_err(|_| MutationError::InvalidPatch(format!("bad width preset: {}", preset)))
        })
        .collect()
}

/// Equal percentage shares, two decimals each
pub fn equal_widths(count: usize) -> Vec<String> {
    let share = format!("{:.2}%", 100.0 / count.max(1) as f64);
    vec![share; count]
}

/// Width presets offered for a given column count
pub fn width_presets(count: usize) -> &'static [&'static str] {
    match count {
        1 => &["100"],
        2 => &["50-50", "60-40", "40-60", "70-30", "30-70", "75-25", "25-75"],
        3 => &["33-33-33", "50-25-25", "25-50-25", "25-25-50", "20-60-20"],
        4 => &["25-25-25-25", "40-20-20-20", "20-20-20-40", "30-20-20-30"],
        5 => &["20-20-20-20-20"],
        6 => &["16.66-16.66-16.66-16.66-16.66-16.66"],
        _ => &[],
    }
}

fn column_mut(columns: &mut [Vec<Block>], index: usize) -> Result<&mut Vec<Block>, MutationError> {
    let count = columns.len();
    columns
        .get_mut(index)
        .ok_or(MutationError::ColumnOutOfRange { index, columns: count })
}

/// A block placed in a top-level layout column adds one level of nesting
fn check_nesting(block: &Block) -> Result<(), MutationError> {
    if max_layout_depth(std::slice::from_ref(block)) + 1 > MAX_LAYOUT_DEPTH {
        return Err(MutationError::NestingTooDeep);
    }
    Ok(())
}
