//! The per-entry page descriptor (`page.json`).

use crate::error::DescriptorError;
use serde::Deserialize;
use siteinit_types::LayoutKind;

#[derive(Deserialize)]
struct RawPageDescriptor {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    private: bool,
}

/// The descriptor of one page: display name, declared type, visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    pub name: String,
    /// The declared type string, verbatim from the descriptor.
    pub kind: String,
    pub private: bool,
}

impl PageDescriptor {
    /// Parses a `page.json` document. `name` and `type` are required and
    /// must be non-blank.
    pub fn parse(source_path: &str, text: &str) -> Result<Self, DescriptorError> {
        let raw: RawPageDescriptor = serde_json::from_str(text)
            .map_err(|e| DescriptorError::malformed(source_path, e))?;

        let name = raw
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| DescriptorError::missing_field(source_path, "name"))?;
        let kind = raw
            .kind
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| DescriptorError::missing_field(source_path, "type"))?;

        Ok(Self {
            name,
            kind,
            private: raw.private,
        })
    }

    /// The kind of layout this descriptor declares, case-insensitively.
    pub fn declared_kind(&self) -> LayoutKind {
        LayoutKind::from_declared(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_page() {
        let page =
            PageDescriptor::parse("home/page.json", r#"{"name": "Home", "type": "content"}"#)
                .unwrap();

        assert_eq!(page.name, "Home");
        assert_eq!(page.declared_kind(), LayoutKind::Content);
        assert!(!page.private);
    }

    #[test]
    fn test_parse_private_widget_page() {
        let page = PageDescriptor::parse(
            "admin/page.json",
            r#"{"name": "Admin", "type": "widget", "private": true}"#,
        )
        .unwrap();

        assert_eq!(page.declared_kind(), LayoutKind::Portlet);
        assert!(page.private);
    }

    #[test]
    fn test_parse_type_is_case_insensitive() {
        let page =
            PageDescriptor::parse("home/page.json", r#"{"name": "Home", "type": "Content"}"#)
                .unwrap();
        assert_eq!(page.declared_kind(), LayoutKind::Content);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let page = PageDescriptor::parse(
            "home/page.json",
            r#"{"name": "Home", "type": "content", "friendlyURL": "/home"}"#,
        )
        .unwrap();
        assert_eq!(page.name, "Home");
    }

    #[test]
    fn test_parse_rejects_missing_name() {
        let result = PageDescriptor::parse("home/page.json", r#"{"type": "content"}"#);
        assert!(matches!(
            result,
            Err(DescriptorError::MissingField { field: "name", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_blank_type() {
        let result =
            PageDescriptor::parse("home/page.json", r#"{"name": "Home", "type": ""}"#);
        assert!(matches!(
            result,
            Err(DescriptorError::MissingField { field: "type", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = PageDescriptor::parse("home/page.json", "not json");
        assert!(matches!(result, Err(DescriptorError::Malformed { .. })));
    }
}
