//! Undo/redo behaviour over longer mutation sequences
//!
//! This tests:
//! - Undo n / redo n returning to the exact endpoints
//! - Redo branch discarded by a new action
//! - The snapshot cap
//! - Selection reset on undo/redo

use mailblocks_editor::{ComponentPatch, Document, MAX_HISTORY};
use mailblocks_model::{create_component, Block, BlockKind};

fn mixed_sequence(doc: Document) -> Document {
    let text = create_component(BlockKind::Text);
    let text_id = text.id().to_string();
    let image = create_component(BlockKind::Image);
    let image_id = image.id().to_string();

    doc.add_component(text, None)
        .unwrap()
        .add_component(image, Some(0))
        .unwrap()
        .update_component(&text_id, ComponentPatch::new().set("fontSize", 20).unwrap())
        .unwrap()
        .duplicate_component(&image_id)
        .unwrap()
        .remove_component(&text_id)
        .unwrap()
        .add_component(create_component(BlockKind::Layout), None)
        .unwrap()
}

#[test]
fn test_undo_redo_inverse_law() {
    let start = Document::new("Law")
        .add_component(create_component(BlockKind::Heading), None)
        .unwrap();
    let d0 = start.components().to_vec();

    let end = mixed_sequence(start);
    let dn = end.components().to_vec();
    let steps = 6;

    let mut doc = end;
    for _ in 0..steps {
        doc = doc.undo();
    }
    assert_eq!(doc.components(), d0.as_slice());

    for _ in 0..steps {
        doc = doc.redo();
    }
    assert_eq!(doc.components(), dn.as_slice());
    assert!(!doc.can_redo());
}

#[test]
fn test_new_action_discards_redo_branch() {
    let a1 = create_component(BlockKind::Text);
    let a2 = create_component(BlockKind::Image);
    let d2 = Document::default()
        .add_component(a1, None)
        .unwrap()
        .add_component(a2, None)
        .unwrap();

    let d1 = d2.undo();
    assert!(d1.can_redo());

    let d3 = d1.add_component(create_component(BlockKind::Button), None).unwrap();
    assert!(!d3.can_redo());

    let after_redo = d3.redo();
    assert_eq!(after_redo.components(), d3.components());
    assert_eq!(after_redo.history_index(), d3.history_index());
}

#[test]
fn test_history_cap() {
    let block = create_component(BlockKind::Spacer);
    let id = block.id().to_string();
    let mut doc = Document::default().add_component(block, None).unwrap();

    for height in 0..59 {
        doc = doc
            .update_component(&id, ComponentPatch::new().set("height", height).unwrap())
            .unwrap();
        assert!(doc.history().len() <= MAX_HISTORY);
    }
    assert_eq!(doc.history().len(), MAX_HISTORY);
    assert_eq!(doc.history_index(), MAX_HISTORY - 1);

    for _ in 0..MAX_HISTORY {
        doc = doc.undo();
    }
    assert_eq!(doc.history_index(), 0);
    assert!(!doc.can_undo());

    // oldest retained snapshot: 60 actions, 50 kept, so height 9
    match &doc.components()[0] {
        Block::Spacer(spacer) => assert_eq!(spacer.height, 9),
        other => panic!("Expected spacer, got {:?}", other),
    }
}

#[test]
fn test_custom_history_limit() {
    let mut doc = Document::new("Short").with_history_limit(3);
    for _ in 0..10 {
        doc = doc.add_component(create_component(BlockKind::Divider), None).unwrap();
    }
    assert_eq!(doc.history().len(), 3);
    assert_eq!(doc.history().max_levels(), 3);
}

#[test]
fn test_undo_redo_clear_selection() {
    let block = create_component(BlockKind::Button);
    let id = block.id().to_string();
    let doc = Document::default().add_component(block, None).unwrap();
    assert_eq!(doc.selected_component_id(), Some(id.as_str()));

    let undone = doc.undo();
    assert_eq!(undone.selected_component_id(), None);

    let redone = undone.select_component(None).redo();
    assert_eq!(redone.selected_component_id(), None);
    assert_eq!(redone.components().len(), 1);
}

#[test]
fn test_undo_at_bounds_is_noop() {
    let doc = Document::new("Bounds");
    assert_eq!(doc.undo(), doc);
    assert_eq!(doc.redo(), doc);
}

#[test]
fn test_snapshots_are_independent() {
    let block = create_component(BlockKind::Text);
    let id = block.id().to_string();
    let doc = Document::default().add_component(block, None).unwrap();
    let first = doc.history().current().to_vec();

    let doc = doc
        .update_component(&id, ComponentPatch::new().set("content", "<p>changed</p>").unwrap())
        .unwrap();

    assert_eq!(doc.history().snapshots()[1], first);
    assert_ne!(doc.history().current(), first.as_slice());
}
