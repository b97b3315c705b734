//! The settings reconciler.
//!
//! Applies a page definition's settings sub-document onto a layout record:
//! theme-settings merge, look-and-feel resolution, master-page linkage.
//! Step order is load-bearing — look-and-feel reads fields the merge step
//! may have just persisted.

use crate::error::InitializationError;
use siteinit_descriptor::SettingsDocument;
use siteinit_traits::{LayoutService, MasterPageRegistry, ThemeRegistry};
use siteinit_types::{ColorSchemeId, GroupId, Layout, ThemeId};

pub struct SettingsReconciler<'a> {
    layouts: &'a dyn LayoutService,
    themes: &'a dyn ThemeRegistry,
    master_pages: &'a dyn MasterPageRegistry,
}

impl<'a> SettingsReconciler<'a> {
    pub fn new(
        layouts: &'a dyn LayoutService,
        themes: &'a dyn ThemeRegistry,
        master_pages: &'a dyn MasterPageRegistry,
    ) -> Self {
        Self {
            layouts,
            themes,
            master_pages,
        }
    }

    /// Reconciles a settings document onto a layout.
    ///
    /// Returns the final record; persistence calls return fresh records, so
    /// callers must use the returned layout, not the one they passed in.
    pub fn update_layout_type_settings(
        &self,
        mut layout: Layout,
        document: &SettingsDocument,
    ) -> Result<Layout, InitializationError> {
        // The theme namespace is cleared on every pass; the cleared bag is
        // only persisted together with newly supplied theme settings.
        let mut settings = layout.type_settings.clone();
        settings.clear_theme_settings();

        if let Some(theme_settings) = &document.theme_settings {
            for (key, value) in theme_settings {
                settings.set(key.clone(), value.clone());
            }
            layout = self.layouts.update_type_settings(&layout, &settings)?;
        } else {
            layout.type_settings = settings;
        }

        let mut theme_id = layout.theme_id.clone();
        if let Some(theme_name) = document
            .theme_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        {
            // An unmatched name resolves to None, which is applied and
            // clears the layout's theme.
            theme_id = self.resolve_theme_id(layout.group_id, theme_name)?;
        }

        let color_scheme_id = document
            .color_scheme_name
            .clone()
            .map(ColorSchemeId::from)
            .or_else(|| layout.color_scheme_id.clone());
        let css = document.css.clone().unwrap_or_else(|| layout.css.clone());

        layout = self
            .layouts
            .update_look_and_feel(&layout, theme_id, color_scheme_id, &css)?;

        if let Some(master_page) = &document.master_page {
            match self
                .master_pages
                .fetch_entry(layout.group_id, &master_page.key)?
            {
                Some(entry) => {
                    layout = self.layouts.update_master_layout(&layout, entry.layout_id)?;
                }
                None => {
                    log::debug!(
                        "master page '{}' not found in group {}, skipping linkage",
                        master_page.key,
                        layout.group_id
                    );
                }
            }
        }

        Ok(layout)
    }

    /// First exact, case-sensitive name match wins; no match is `None`.
    fn resolve_theme_id(
        &self,
        group_id: GroupId,
        theme_name: &str,
    ) -> Result<Option<ThemeId>, InitializationError> {
        let themes = self.themes.themes(group_id)?;
        Ok(themes
            .into_iter()
            .find(|theme| theme.name == theme_name)
            .map(|theme| theme.id))
    }
}
