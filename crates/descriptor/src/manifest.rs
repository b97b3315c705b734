//! The layout manifest: an ordered array of descriptor paths.

use crate::error::DescriptorError;
use serde::Deserialize;

/// One manifest entry, pointing at a descriptor directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
}

#[derive(Deserialize)]
struct RawManifestEntry {
    path: Option<String>,
}

/// The parsed layout manifest.
///
/// Entry order is significant: it determines creation order and thus the
/// default navigation ordering of the site. No entry is ever dropped — a
/// malformed or incomplete manifest fails parsing outright.
pub struct Manifest;

impl Manifest {
    /// Parses the manifest resource text into its entries, order preserved.
    pub fn parse(source_path: &str, text: &str) -> Result<Vec<ManifestEntry>, DescriptorError> {
        let raw: Vec<RawManifestEntry> = serde_json::from_str(text)
            .map_err(|e| DescriptorError::malformed(source_path, e))?;

        raw.into_iter()
            .map(|entry| {
                let path = entry
                    .path
                    .filter(|p| !p.trim().is_empty())
                    .ok_or_else(|| DescriptorError::missing_field(source_path, "path"))?;
                Ok(ManifestEntry { path })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let text = r#"[{"path": "home"}, {"path": "search"}, {"path": "contact"}]"#;
        let entries = Manifest::parse("layouts.json", text).unwrap();

        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["home", "search", "contact"]);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let entries = Manifest::parse("layouts.json", "[]").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = Manifest::parse("layouts.json", "{not json");
        assert!(matches!(result, Err(DescriptorError::Malformed { .. })));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = Manifest::parse("layouts.json", r#"{"path": "home"}"#);
        assert!(matches!(result, Err(DescriptorError::Malformed { .. })));
    }

    #[test]
    fn test_parse_rejects_missing_path() {
        let result = Manifest::parse("layouts.json", r#"[{"path": "home"}, {}]"#);
        assert!(matches!(
            result,
            Err(DescriptorError::MissingField { field: "path", .. })
        ));
    }

    #[test]
    fn test_parse_rejects_blank_path() {
        let result = Manifest::parse("layouts.json", r#"[{"path": "  "}]"#);
        assert!(matches!(
            result,
            Err(DescriptorError::MissingField { field: "path", .. })
        ));
    }
}
