//! Drag-end helper for the top-level sequence.

use mailblocks_model::Block;

/// Move the block at `from` so it ends up at `to`
///
/// Returns a permutation of `components` suitable for
/// [`Document::reorder_components`](crate::Document::reorder_components).
/// An out-of-range `from` returns the sequence unchanged; `to` is clamped.
pub fn move_component(components: &[Block], from: usize, to: usize) -> Vec<Block> {
    let mut reordered = components.to_vec();
    if from >= reordered.len() {
        return reordered;
    }

    let block = reordered.remove(from);
    let to = to.min(reordered.len());
    reordered.insert(to, block);
    reordered
}

/// Position of a top-level block by id
pub fn index_of(components: &[Block], id: &str) -> Option<usize> {
    components.iter().position(|block| block.id() == id)
}
