//! Initializer identity and bundle layout configuration.

/// Where the bundled descriptors live and how the initializer presents
/// itself to the host platform.
#[derive(Debug, Clone)]
pub struct InitializerConfig {
    /// Stable key the host platform registers the initializer under.
    pub key: String,
    /// Display name shown in the host's site-creation UI.
    pub name: String,
    /// Bundle path of the thumbnail image.
    pub thumbnail_path: String,
    /// Bundle path of the layout manifest.
    pub manifest_path: String,
    /// Bundle directory containing one descriptor directory per entry.
    pub layouts_root: String,
    /// Bundle path of the fragment archive.
    pub fragments_path: String,
    /// Whether fragment import overwrites existing fragment entries.
    pub overwrite_fragments: bool,
    pub add_group_permissions: bool,
    pub add_guest_permissions: bool,
}

impl Default for InitializerConfig {
    fn default() -> Self {
        Self {
            key: "site-initializer".to_string(),
            name: "Site".to_string(),
            thumbnail_path: "images/thumbnail.jpeg".to_string(),
            manifest_path: "layouts/layouts.json".to_string(),
            layouts_root: "layouts".to_string(),
            fragments_path: "fragments.zip".to_string(),
            overwrite_fragments: false,
            add_group_permissions: true,
            add_guest_permissions: true,
        }
    }
}

impl InitializerConfig {
    /// Bundle path of an entry's page descriptor.
    pub fn page_path(&self, entry_path: &str) -> String {
        format!("{}/{}/page.json", self.layouts_root, entry_path)
    }

    /// Bundle path of an entry's page definition.
    pub fn page_definition_path(&self, entry_path: &str) -> String {
        format!("{}/{}/page-definition.json", self.layouts_root, entry_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = InitializerConfig::default();
        assert_eq!(config.manifest_path, "layouts/layouts.json");
        assert_eq!(config.page_path("home"), "layouts/home/page.json");
        assert_eq!(
            config.page_definition_path("home"),
            "layouts/home/page-definition.json"
        );
    }
}
