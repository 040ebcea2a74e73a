use crate::block::{Block, LayoutBlock};
use crate::id::new_id;

/// Visitor pattern for traversing block trees immutably
///
/// The default implementations walk the whole tree, descending into
/// every layout column. Override specific visit_* methods to act on nodes.
pub trait BlockVisitor: Sized {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_column(&mut self, _layout: &LayoutBlock, _index: usize, column: &[Block]) {
        for block in column {
            self.visit_block(block);
        }
    }
}

/// Mutable visitor for rewriting blocks in place
pub trait BlockVisitorMut: Sized {
    fn visit_block_mut(&mut self, block: &mut Block) {
        walk_block_mut(self, block);
    }
}

pub fn walk_blocks<V: BlockVisitor>(visitor: &mut V, blocks: &[Block]) {
    for block in blocks {
        visitor.visit_block(block);
    }
}

pub fn walk_block<V: BlockVisitor>(visitor: &mut V, block: &Block) {
    if let Block::Layout(layout) = block {
        for (index, column) in layout.columns.iter().enumerate() {
            visitor.visit_column(layout, index, column);
        }
    }
}

pub fn walk_block_mut<V: BlockVisitorMut>(visitor: &mut V, block: &mut Block) {
    if let Block::Layout(layout) = block {
        for block in layout.columns.iter_mut().flatten() {
            visitor.visit_block_mut(block);
        }
    }
}

struct IdCollector<'a> {
    ids: Vec<&'a str>,
}

impl<'a> IdCollector<'a> {
    fn collect(&mut self, blocks: &'a [Block]) {
        for block in blocks {
            self.ids.push(block.id());
            if let Block::Layout(layout) = block {
                for column in &layout.columns {
                    self.collect(column);
                }
            }
        }
    }
}

/// Every id in the tree, in document order (parents before children)
pub fn collect_ids(blocks: &[Block]) -> Vec<&str> {
    let mut collector = IdCollector { ids: Vec::new() };
    collector.collect(blocks);
    collector.ids
}

/// First id that appears more than once anywhere in the tree
pub fn find_duplicate_id(blocks: &[Block]) -> Option<&str> {
    let mut seen = std::collections::HashSet::new();
    collect_ids(blocks).into_iter().find(|id| !seen.insert(*id))
}

/// Find a block by id at any depth
pub fn find_block<'a>(blocks: &'a [Block], id: &str) -> Option<&'a Block> {
    for block in blocks {
        if block.id() == id {
            return Some(block);
        }
        if let Block::Layout(layout) = block {
            for column in &layout.columns {
                if let Some(found) = find_block(column, id) {
                    return Some(found);
                }
            }
        }
    }
    None
}

struct DepthVisitor {
    depth: usize,
    max: usize,
}

impl BlockVisitor for DepthVisitor {
    fn visit_block(&mut self, block: &Block) {
        if block.as_layout().is_some() {
            self.depth += 1;
            self.max = self.max.max(self.depth);
            walk_block(self, block);
            self.depth -= 1;
        }
    }
}

/// How many layouts deep the tree goes (0 when it holds no layout)
pub fn max_layout_depth(blocks: &[Block]) -> usize {
    let mut visitor = DepthVisitor { depth: 0, max: 0 };
    walk_blocks(&mut visitor, blocks);
    visitor.max
}

struct FreshIds;

impl BlockVisitorMut for FreshIds {
    fn visit_block_mut(&mut self, block: &mut Block) {
        block.set_id(new_id());
        walk_block_mut(self, block);
    }
}

/// Give `block` and all of its descendants new ids
pub fn reassign_ids(block: &mut Block) {
    FreshIds.visit_block_mut(block);
}
