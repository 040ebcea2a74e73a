use mailblocks_compiler_html::{export_document_with, ExportOptions};
use mailblocks_editor::{Document, Mutation};
use mailblocks_linter::{summary, validate};
use mailblocks_model::create_component_named;
use mailblocks_model::defaults::{COLORS, FONT_FAMILIES};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Build a default block of the given type and return it as JSON
#[wasm_bindgen(js_name = createComponent)]
pub fn create_component_js(component_type: &str) -> Result<String, JsValue> {
    let block = create_component_named(component_type).map_err(|e| js_error("Unknown component", e))?;
    serde_json::to_string(&block).map_err(|e| js_error("Serialization error", e))
}

/// Font stacks for the property panel, as a JSON array
#[wasm_bindgen(js_name = fontFamilies)]
pub fn font_families() -> String {
    serde_json::Value::from(FONT_FAMILIES.to_vec()).to_string()
}

/// Palette swatches as a JSON array of `{name, value}`
#[wasm_bindgen]
pub fn colors() -> String {
    let swatches: Vec<_> = COLORS
        .iter()
        .map(|(name, value)| serde_json::json!({ "name": name, "value": value }))
        .collect();
    serde_json::Value::from(swatches).to_string()
}

/// The editing session the browser surface drives
///
/// Every call replaces the held document with the next immutable value.
#[wasm_bindgen]
pub struct EditorHandle {
    document: Document,
}

#[wasm_bindgen]
impl EditorHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> EditorHandle {
        EditorHandle {
            document: Document::new(name),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.document.name().to_string()
    }

    #[wasm_bindgen(js_name = setName)]
    pub fn set_name(&mut self, name: &str) {
        self.document = self.document.update_name(name);
    }

    /// Apply one JSON-encoded mutation, e.g. `{"RemoveComponent":{"id":"..."}}`
    pub fn dispatch(&mut self, mutation_json: &str) -> Result<(), JsValue> {
        let mutation: Mutation =
            serde_json::from_str(mutation_json).map_err(|e| js_error("Invalid mutation", e))?;
        self.document = self
            .document
            .apply(mutation)
            .map_err(|e| js_error("Mutation failed", e))?;
        Ok(())
    }

    pub fn select(&mut self, id: Option<String>) {
        self.document = self.document.select_component(id.as_deref());
    }

    #[wasm_bindgen(js_name = selectNested)]
    pub fn select_nested(&mut self, layout_id: &str, column_index: usize, component_id: &str) {
        self.document = self
            .document
            .select_nested_component(layout_id, column_index, component_id);
    }

    #[wasm_bindgen(js_name = clearNestedSelection)]
    pub fn clear_nested_selection(&mut self) {
        self.document = self.document.clear_nested_selection();
    }

    #[wasm_bindgen(getter, js_name = selectedComponentId)]
    pub fn selected_component_id(&self) -> Option<String> {
        self.document.selected_component_id().map(str::to_string)
    }

    /// Nested selection as JSON, or `null`
    #[wasm_bindgen(js_name = selectedNested)]
    pub fn selected_nested(&self) -> Option<String> {
        self.document
            .selected_nested_component()
            .and_then(|selection| serde_json::to_string(selection).ok())
    }

    pub fn undo(&mut self) {
        self.document = self.document.undo();
    }

    pub fn redo(&mut self) {
        self.document = self.document.redo();
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.document.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.document.can_redo()
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.document
            .export_to_json()
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Replace the content; the document is untouched when the JSON is rejected
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&mut self, json: &str, name: Option<String>) -> Result<(), JsValue> {
        self.document = self
            .document
            .import_from_json(json, name.as_deref())
            .map_err(|e| js_error("Import failed", e))?;
        Ok(())
    }

    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self, pretty: bool) -> String {
        let options = if pretty {
            ExportOptions::default()
        } else {
            ExportOptions::compact()
        };
        export_document_with(self.document.name(), self.document.components(), &options)
    }

    /// Validation findings as a JSON array
    pub fn validate(&self) -> Result<String, JsValue> {
        serde_json::to_string(&validate(self.document.components()))
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = validationSummary)]
    pub fn validation_summary(&self) -> String {
        summary(&validate(self.document.components()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(handle: &mut EditorHandle, block_json: &str) {
        let mutation = format!(r#"{{"AddComponent":{{"block":{}}}}}"#, block_json);
        handle.dispatch(&mutation).unwrap();
    }

    #[test]
    fn test_create_component() {
        let json = create_component_js("heading").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "heading");
        assert!(value["id"].as_str().is_some_and(|id| !id.is_empty()));
    }

    #[test]
    fn test_property_panel_tables() {
        let fonts: Vec<String> = serde_json::from_str(&font_families()).unwrap();
        assert_eq!(fonts[0], "Arial, sans-serif");

        let swatches: serde_json::Value = serde_json::from_str(&colors()).unwrap();
        assert_eq!(swatches[0]["name"], "primary");
        assert_eq!(swatches[0]["value"], "#007bff");
        assert_eq!(swatches.as_array().map(Vec::len), Some(COLORS.len()));
    }

    #[test]
    fn test_dispatch_and_undo() {
        let mut handle = EditorHandle::new("Weekly");
        add(&mut handle, &create_component_js("text").unwrap());
        add(&mut handle, &create_component_js("divider").unwrap());
        assert!(handle.can_undo());

        handle.undo();
        let blocks = mailblocks_model::parse_blocks(&handle.export_json().unwrap()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(handle.can_redo());

        handle.redo();
        assert!(!handle.can_redo());
    }

    #[test]
    fn test_selection() {
        let mut handle = EditorHandle::new("Weekly");
        add(&mut handle, r#"{"id":"h1","type":"heading","text":"Hi"}"#);

        handle.select(Some("h1".to_string()));
        assert_eq!(handle.selected_component_id().as_deref(), Some("h1"));
        assert!(handle.selected_nested().is_none());

        handle.select(None);
        assert_eq!(handle.selected_component_id(), None);
    }

    #[test]
    fn test_import_export_html_and_validate() {
        let mut handle = EditorHandle::new("Untitled");
        handle
            .import_json(
                r##"[{"id":"b","type":"button","text":"","href":"#"}]"##,
                Some("Promo".to_string()),
            )
            .unwrap();

        assert_eq!(handle.name(), "Promo");
        assert!(!handle.can_undo());
        assert!(handle.export_html(true).contains("<title>Promo</title>"));
        assert!(!handle.export_html(false).contains('\n'));

        let findings: serde_json::Value = serde_json::from_str(&handle.validate().unwrap()).unwrap();
        assert_eq!(findings.as_array().map(Vec::len), Some(2));
        assert!(handle.validation_summary().contains("❌ 1 error"));
    }
}
