//! # Snapshot History
//!
//! Bounded list of document snapshots with a cursor, backing undo/redo.
//!
//! ## Design
//!
//! - Every content change records a full copy of the block list
//! - Undo/redo move the cursor; the snapshot under it is the current content
//! - Recording after an undo discards the abandoned future
//! - Once the cap is exceeded the oldest snapshot is evicted and the cursor
//!   re-based so it still points at the newest snapshot

use mailblocks_model::Block;

/// Default number of snapshots kept
pub const MAX_HISTORY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    snapshots: Vec<Vec<Block>>,
    index: usize,
    max_levels: usize,
}

impl History {
    /// History holding a single baseline snapshot
    pub fn new(baseline: Vec<Block>) -> Self {
        Self::with_max_levels(baseline, MAX_HISTORY)
    }

    /// History with a custom cap (at least one snapshot is always kept)
    pub fn with_max_levels(baseline: Vec<Block>, max_levels: usize) -> Self {
        Self {
            snapshots: vec![baseline],
            index: 0,
            max_levels: max_levels.max(1),
        }
    }

    /// Record a new snapshot after the cursor, dropping any redo branch
    pub fn record(&mut self, snapshot: Vec<Block>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);

        if self.snapshots.len() > self.max_levels {
            let overflow = self.snapshots.len() - self.max_levels;
            self.snapshots.drain(..overflow);
        }

        self.index = self.snapshots.len() - 1;
    }

    /// Throw everything away and start over from `baseline`
    pub fn reset(&mut self, baseline: Vec<Block>) {
        self.snapshots = vec![baseline];
        self.index = 0;
    }

    /// Step back, returning the snapshot now under the cursor
    pub fn undo(&mut self) -> Option<&[Block]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward, returning the snapshot now under the cursor
    pub fn redo(&mut self) -> Option<&[Block]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn current(&self) -> &[Block] {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    pub fn snapshots(&self) -> &[Vec<Block>] {
        &self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
