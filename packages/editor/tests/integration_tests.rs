//! Integration tests for editor crate

use mailblocks_editor::{
    layout, reorder, ComponentPatch, Document, EditorError, MemoryStore, Mutation, NewsletterDraft,
    NewsletterStore,
};
use mailblocks_model::{create_component, Block, BlockKind};

#[test]
fn test_document_lifecycle() {
    let heading = create_component(BlockKind::Heading);
    let heading_id = heading.id().to_string();

    let doc = Document::new("Weekly")
        .add_component(heading, None)
        .unwrap()
        .add_component(create_component(BlockKind::Text), None)
        .unwrap()
        .update_component(&heading_id, ComponentPatch::new().set("text", "Hello").unwrap())
        .unwrap();

    assert_eq!(doc.components().len(), 2);
    assert_eq!(doc.history().len(), 4);
    assert_eq!(doc.history().current(), doc.components());

    match doc.find_component(&heading_id) {
        Some(Block::Heading(h)) => assert_eq!(h.text, "Hello"),
        other => panic!("Expected heading, got {:?}", other),
    }
}

#[test]
fn test_add_remove_round_trip() {
    let doc = Document::default()
        .add_component(create_component(BlockKind::Divider), None)
        .unwrap();
    let before = doc.components().to_vec();

    let block = create_component(BlockKind::Image);
    let id = block.id().to_string();
    let doc = doc.add_component(block, None).unwrap().remove_component(&id).unwrap();

    assert_eq!(doc.components(), before.as_slice());
}

#[test]
fn test_duplicate_gets_unique_ids_and_follows_source() {
    let layout_block = create_component(BlockKind::Layout);
    let layout_id = layout_block.id().to_string();
    let doc = Document::default()
        .add_component(layout_block, None)
        .unwrap()
        .add_component(create_component(BlockKind::Spacer), None)
        .unwrap();
    let patch = layout::add_to_column(&doc, &layout_id, 0, create_component(BlockKind::Button), None).unwrap();
    let doc = doc.update_component(&layout_id, patch).unwrap();

    let existing: Vec<String> = mailblocks_model::visitor::collect_ids(doc.components())
        .into_iter()
        .map(str::to_string)
        .collect();

    let doc = doc.duplicate_component(&layout_id).unwrap();
    let copy = &doc.components()[1];
    assert_eq!(copy.kind(), BlockKind::Layout);

    for id in mailblocks_model::visitor::collect_ids(std::slice::from_ref(copy)) {
        assert!(!existing.iter().any(|e| e == id), "id {} reused", id);
    }
    assert!(mailblocks_model::visitor::find_duplicate_id(doc.components()).is_none());
}

#[test]
fn test_three_column_layout_integrity() {
    let layout_block = create_component(BlockKind::Layout);
    let layout_id = layout_block.id().to_string();
    let doc = Document::default().add_component(layout_block, None).unwrap();
    let doc = doc
        .update_component(&layout_id, layout::set_column_count(&doc, &layout_id, 3).unwrap())
        .unwrap();
    let doc = doc
        .update_component(
            &layout_id,
            layout::add_to_column(&doc, &layout_id, 0, create_component(BlockKind::Text), None).unwrap(),
        )
        .unwrap();
    let before = doc.find_layout(&layout_id).unwrap().columns.clone();

    let patch = layout::add_to_column(&doc, &layout_id, 1, create_component(BlockKind::Image), None).unwrap();
    let doc = doc.update_component(&layout_id, patch).unwrap();
    let after = &doc.find_layout(&layout_id).unwrap().columns;

    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].len(), before[1].len() + 1);
}

#[test]
fn test_nested_selection_cleared_when_child_removed() {
    let layout_block = create_component(BlockKind::Layout);
    let layout_id = layout_block.id().to_string();
    let child = create_component(BlockKind::Text);
    let child_id = child.id().to_string();

    let doc = Document::default().add_component(layout_block, None).unwrap();
    let doc = doc
        .update_component(&layout_id, layout::add_to_column(&doc, &layout_id, 1, child, None).unwrap())
        .unwrap()
        .select_nested_component(&layout_id, 1, &child_id);
    assert_eq!(doc.selected_block().map(Block::id), Some(child_id.as_str()));

    let patch = layout::remove_from_column(&doc, &layout_id, 1, &child_id).unwrap();
    let doc = doc.update_component(&layout_id, patch).unwrap();

    assert_eq!(doc.selected_nested_component(), None);
    assert_eq!(doc.selected_component_id(), Some(layout_id.as_str()));
}

#[test]
fn test_removing_layout_clears_both_selections() {
    let layout_block = create_component(BlockKind::Layout);
    let layout_id = layout_block.id().to_string();
    let doc = Document::default()
        .add_component(layout_block, None)
        .unwrap()
        .select_nested_component(&layout_id, 0, "anything")
        .remove_component(&layout_id)
        .unwrap();

    assert_eq!(doc.selected_component_id(), None);
    assert_eq!(doc.selected_nested_component(), None);
}

#[test]
fn test_import_rejects_malformed_input() {
    let doc = Document::new("Keep me")
        .add_component(create_component(BlockKind::Spacer), None)
        .unwrap();
    let snapshot = doc.clone();

    let err = doc.import_from_json(r#"{"not":"an array"}"#, None).unwrap_err();
    assert!(matches!(err, EditorError::InvalidFormat(_)));
    assert_eq!(doc, snapshot);

    let err = doc.import_from_json("[1, 2, 3]", None).unwrap_err();
    assert!(matches!(err, EditorError::InvalidFormat(_)));
}

#[test]
fn test_export_import_round_trip_resets_history() {
    let doc = Document::new("Source")
        .add_component(create_component(BlockKind::Heading), None)
        .unwrap()
        .add_component(create_component(BlockKind::Button), None)
        .unwrap();
    let json = doc.export_to_json().unwrap();

    let imported = Document::new("Target")
        .add_component(create_component(BlockKind::Divider), None)
        .unwrap()
        .import_from_json(&json, Some("Imported"))
        .unwrap();

    assert_eq!(imported.components(), doc.components());
    assert_eq!(imported.name(), "Imported");
    assert_eq!(imported.history().len(), 1);
    assert!(!imported.can_undo());

    let unnamed = Document::new("Target").import_from_json(&json, None).unwrap();
    assert_eq!(unnamed.name(), "Target");
}

#[test]
fn test_reorder_accepts_any_sequence() {
    let blocks: Vec<Block> = [BlockKind::Text, BlockKind::Image, BlockKind::Button]
        .into_iter()
        .map(create_component)
        .collect();
    let doc = Document::from_components("Reorder", blocks).unwrap();

    let moved = reorder::move_component(doc.components(), 2, 0);
    let doc = doc.reorder_components(moved.clone()).unwrap();
    assert_eq!(doc.components(), moved.as_slice());

    // not a permutation of the previous set: accepted as given
    let doc = doc.reorder_components(vec![create_component(BlockKind::Spacer)]).unwrap();
    assert_eq!(doc.components().len(), 1);

    let dup = create_component(BlockKind::Spacer);
    assert!(doc.reorder_components(vec![dup.clone(), dup]).is_err());
}

#[test]
fn test_mutation_script_from_json() {
    let script = r##"[
        {"AddComponent": {"block": {"id": "h1", "type": "heading", "text": "Hi", "level": 1}}},
        {"AddComponent": {"block": {"id": "s1", "type": "spacer", "height": 30}, "index": 0}},
        {"UpdateComponent": {"id": "h1", "patch": {"color": "#ff0000"}}},
        {"DuplicateComponent": {"id": "s1"}},
        {"RemoveComponent": {"id": "h1"}}
    ]"##;
    let mutations: Vec<Mutation> = serde_json::from_str(script).unwrap();

    let doc = mutations
        .into_iter()
        .try_fold(Document::default(), |doc, m| doc.apply(m))
        .unwrap();

    assert_eq!(doc.components().len(), 2);
    assert!(doc.components().iter().all(|b| b.kind() == BlockKind::Spacer));
    assert_eq!(doc.history().len(), 6);
}

#[test]
fn test_store_round_trip() {
    let doc = Document::new("Stored")
        .add_component(create_component(BlockKind::SocialLinks), None)
        .unwrap();
    let mut store = MemoryStore::new();
    let record = store
        .create(NewsletterDraft::from_document(&doc, "<html></html>").unwrap())
        .unwrap();

    let reopened = store.fetch(&record.id).unwrap().to_document().unwrap();
    assert_eq!(reopened.components(), doc.components());
    assert_eq!(reopened.name(), "Stored");
}
