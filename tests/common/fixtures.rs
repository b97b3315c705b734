use serde_json::{Value, json};

/// A `layouts.json` manifest over the given descriptor paths.
pub fn manifest(paths: &[&str]) -> String {
    Value::Array(paths.iter().map(|path| json!({ "path": path })).collect()).to_string()
}

/// A `page.json` descriptor.
pub fn page(name: &str, kind: &str, private: bool) -> String {
    json!({ "name": name, "type": kind, "private": private }).to_string()
}

/// A content page definition with no elements and no settings.
pub fn empty_page_definition() -> String {
    "{}".to_string()
}

/// A page definition whose root holds one serialized fragment per key.
pub fn page_definition_with_fragments(fragment_keys: &[&str]) -> String {
    let children: Vec<Value> = fragment_keys
        .iter()
        .map(|key| {
            Value::String(json!({ "type": "Fragment", "fragmentKey": key }).to_string())
        })
        .collect();
    json!({ "pageElement": { "type": "Root", "pageElements": children } }).to_string()
}

/// A page definition whose root element carries an arbitrary type.
pub fn page_definition_with_root_type(root_type: &str) -> String {
    let child = Value::String(json!({ "type": "Fragment" }).to_string());
    json!({ "pageElement": { "type": root_type, "pageElements": [child] } }).to_string()
}

/// A page definition carrying only a settings sub-document.
pub fn page_definition_with_settings(settings: Value) -> String {
    json!({ "settings": settings }).to_string()
}
