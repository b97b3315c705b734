//! The page definition (`page-definition.json`): the page-element tree and
//! the optional settings sub-document.
//!
//! Page elements nest by carrying their children as *serialized* JSON
//! strings, so the tree is unfolded one level at a time during import.

use crate::error::DescriptorError;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The type string marking an importable root element.
pub const ROOT_ELEMENT_TYPE: &str = "Root";

/// A parsed `page-definition.json` document. Both keys are optional; an
/// empty document is a valid no-op definition.
#[derive(Debug, Clone, Default)]
pub struct PageDefinition {
    pub page_element: Option<PageElementNode>,
    pub settings: Option<SettingsDocument>,
}

impl PageDefinition {
    pub fn parse(source_path: &str, text: &str) -> Result<Self, DescriptorError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DescriptorError::malformed(source_path, e))?;

        let page_element = value
            .get("pageElement")
            .filter(|v| !v.is_null())
            .map(PageElementNode::from_value);

        let settings = value
            .get("settings")
            .filter(|v| !v.is_null())
            .map(|v| {
                serde_json::from_value::<SettingsDocument>(v.clone())
                    .map_err(|e| DescriptorError::malformed(source_path, e))
            })
            .transpose()?;

        Ok(Self {
            page_element,
            settings,
        })
    }
}

/// One node of the page-element tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElementNode {
    /// Element type, e.g. `Root` or `Fragment`. Empty when undeclared.
    pub kind: String,
    /// Child elements in placement order, each still in serialized form.
    pub page_elements: Vec<String>,
    /// The node's full JSON value, carried as the opaque element payload.
    pub definition: Value,
}

impl PageElementNode {
    /// Parses a serialized page element, as found in a parent's
    /// `pageElements` array.
    pub fn parse(serialized: &str) -> Result<Self, DescriptorError> {
        let value: Value = serde_json::from_str(serialized)
            .map_err(|e| DescriptorError::malformed("pageElement", e))?;
        Ok(Self::from_value(&value))
    }

    /// Projects `type` and `pageElements` out of an element value. Absent
    /// fields default to empty; nothing here is an error.
    pub fn from_value(value: &Value) -> Self {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let page_elements = value
            .get("pageElements")
            .and_then(Value::as_array)
            .map(|children| children.iter().map(coerce_string).collect())
            .unwrap_or_default();
        Self {
            kind,
            page_elements,
            definition: value.clone(),
        }
    }

    /// Whether this node is an importable root.
    pub fn is_root(&self) -> bool {
        self.kind == ROOT_ELEMENT_TYPE
    }
}

/// The settings sub-document of a page definition. Every field is optional;
/// absent fields fall back to the layout's current values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsDocument {
    #[serde(deserialize_with = "de_string_map")]
    pub theme_settings: Option<IndexMap<String, String>>,
    pub theme_name: Option<String>,
    pub color_scheme_name: Option<String>,
    pub css: Option<String>,
    pub master_page: Option<MasterPageRef>,
}

/// Reference to a master-page template entry by key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MasterPageRef {
    #[serde(default)]
    pub key: String,
}

/// Deserializes a JSON object as a string map, coercing scalar values the
/// way the platform's JSON accessors do.
fn de_string_map<'de, D>(deserializer: D) -> Result<Option<IndexMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<IndexMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|map| {
        map.into_iter()
            .map(|(key, value)| {
                let coerced = coerce_string(&value);
                (key, coerced)
            })
            .collect()
    }))
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_definition() {
        let definition = PageDefinition::parse("home/page-definition.json", "{}").unwrap();
        assert!(definition.page_element.is_none());
        assert!(definition.settings.is_none());
    }

    #[test]
    fn test_parse_root_element_with_children() {
        let text = json!({
            "pageElement": {
                "type": "Root",
                "pageElements": [
                    r#"{"type": "Fragment", "fragmentKey": "banner"}"#,
                    r#"{"type": "Fragment", "fragmentKey": "footer"}"#
                ]
            }
        })
        .to_string();

        let definition = PageDefinition::parse("home/page-definition.json", &text).unwrap();
        let root = definition.page_element.unwrap();

        assert!(root.is_root());
        assert_eq!(root.page_elements.len(), 2);
        assert!(root.page_elements[0].contains("banner"));
    }

    #[test]
    fn test_parse_non_root_element() {
        let text = r#"{"pageElement": {"type": "Fragment"}}"#;
        let definition = PageDefinition::parse("home/page-definition.json", text).unwrap();
        let root = definition.page_element.unwrap();

        assert!(!root.is_root());
        assert!(root.page_elements.is_empty());
    }

    #[test]
    fn test_parse_settings_document() {
        let text = json!({
            "settings": {
                "themeSettings": {"lfr-theme:regular:show-footer": "true"},
                "themeName": "Classic",
                "colorSchemeName": "01",
                "css": ".body { color: red; }",
                "masterPage": {"key": "landing-master"}
            }
        })
        .to_string();

        let definition = PageDefinition::parse("home/page-definition.json", &text).unwrap();
        let settings = definition.settings.unwrap();

        assert_eq!(settings.theme_name.as_deref(), Some("Classic"));
        assert_eq!(settings.color_scheme_name.as_deref(), Some("01"));
        assert_eq!(settings.master_page.unwrap().key, "landing-master");
        let map = settings.theme_settings.unwrap();
        assert_eq!(
            map.get("lfr-theme:regular:show-footer").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_parse_settings_coerces_scalar_values() {
        let text = json!({
            "settings": {
                "themeSettings": {"lfr-theme:footer-links": 3, "lfr-theme:show-header": true}
            }
        })
        .to_string();

        let definition = PageDefinition::parse("home/page-definition.json", &text).unwrap();
        let map = definition.settings.unwrap().theme_settings.unwrap();

        assert_eq!(map.get("lfr-theme:footer-links").map(String::as_str), Some("3"));
        assert_eq!(map.get("lfr-theme:show-header").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_parse_settings_with_empty_theme_settings() {
        let text = r#"{"settings": {"themeSettings": {}}}"#;
        let definition = PageDefinition::parse("home/page-definition.json", text).unwrap();
        let settings = definition.settings.unwrap();

        // Present but empty: the reconciler still clears the namespace
        assert!(settings.theme_settings.is_some());
        assert!(settings.theme_settings.unwrap().is_empty());
    }

    #[test]
    fn test_parse_null_settings_is_absent() {
        let text = r#"{"settings": null}"#;
        let definition = PageDefinition::parse("home/page-definition.json", text).unwrap();
        assert!(definition.settings.is_none());
    }

    #[test]
    fn test_element_node_round_trips_payload() {
        let node =
            PageElementNode::parse(r#"{"type": "Fragment", "fragmentKey": "banner"}"#).unwrap();

        assert_eq!(node.kind, "Fragment");
        assert_eq!(node.definition["fragmentKey"], "banner");
    }

    #[test]
    fn test_element_node_with_nested_children() {
        let node = PageElementNode::parse(
            r#"{"type": "Section", "pageElements": ["{\"type\": \"Fragment\"}"]}"#,
        )
        .unwrap();

        assert_eq!(node.page_elements.len(), 1);
        let child = PageElementNode::parse(&node.page_elements[0]).unwrap();
        assert_eq!(child.kind, "Fragment");
    }

    #[test]
    fn test_element_node_rejects_garbage() {
        let result = PageElementNode::parse("not json");
        assert!(matches!(result, Err(DescriptorError::Malformed { .. })));
    }

    #[test]
    fn test_element_node_missing_type_is_not_root() {
        let node = PageElementNode::parse(r#"{"pageElements": []}"#).unwrap();
        assert_eq!(node.kind, "");
        assert!(!node.is_root());
    }
}
