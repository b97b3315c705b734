//! The layout pipeline orchestrator.
//!
//! One `initialize` call per site: build the service context, import the
//! fragment archive, then replay the manifest in order — create each
//! layout, fill its draft, reconcile settings, promote draft to live.
//! The first error aborts the run; layouts created earlier in the same run
//! are left in place.

use crate::config::InitializerConfig;
use crate::context;
use crate::error::InitializationError;
use crate::importer::PageStructureImporter;
use crate::reconciler::SettingsReconciler;
use siteinit_descriptor::{Manifest, PageDefinition, PageDescriptor};
use siteinit_traits::{
    FragmentImporter, LayoutService, LayoutStructureService, MasterPageRegistry, ResourceProvider,
    ThemeRegistry, UserDirectory,
};
use siteinit_types::{
    CreateLayout, GroupId, Layout, LayoutKind, Locale, LocalizedText, ServiceContext, localized,
};
use std::sync::Arc;

/// The top-level driver of one site initialization.
pub struct SiteInitializer {
    config: InitializerConfig,
    resources: Arc<dyn ResourceProvider>,
    layouts: Arc<dyn LayoutService>,
    structures: Arc<dyn LayoutStructureService>,
    themes: Arc<dyn ThemeRegistry>,
    master_pages: Arc<dyn MasterPageRegistry>,
    fragments: Arc<dyn FragmentImporter>,
    users: Arc<dyn UserDirectory>,
}

impl SiteInitializer {
    pub fn builder() -> SiteInitializerBuilder {
        SiteInitializerBuilder::new()
    }

    /// Stable key the host platform registers the initializer under.
    pub fn key(&self) -> &str {
        &self.config.key
    }

    pub fn name(&self, _locale: &Locale) -> &str {
        &self.config.name
    }

    pub fn description(&self, _locale: &Locale) -> &str {
        ""
    }

    pub fn thumbnail_src(&self) -> &str {
        &self.config.thumbnail_path
    }

    pub fn is_active(&self, _group_id: GroupId) -> bool {
        true
    }

    /// Runs the whole import pipeline for one site.
    ///
    /// Synchronous, single-shot: the run either finishes or fails with one
    /// [`InitializationError`]. Nothing is retried and nothing created
    /// before the failure point is rolled back.
    pub fn initialize(&self, group_id: GroupId) -> Result<(), InitializationError> {
        match self.run(group_id) {
            Ok(()) => Ok(()),
            Err(error) => {
                log::error!("site initialization failed for group {group_id}: {error}");
                Err(error)
            }
        }
    }

    fn run(&self, group_id: GroupId) -> Result<(), InitializationError> {
        let ctx = context::service_context_for(group_id, self.users.as_ref(), &self.config)?;

        self.add_fragment_entries(&ctx)?;
        self.add_layouts(&ctx)?;
        Ok(())
    }

    /// Imports the bundled fragment archive as a unit.
    fn add_fragment_entries(&self, ctx: &ServiceContext) -> Result<(), InitializationError> {
        let archive = self.resources.load(&self.config.fragments_path)?;
        self.fragments
            .import_archive(ctx, archive, self.config.overwrite_fragments)?;
        Ok(())
    }

    /// Replays the manifest, creating layouts in manifest order.
    fn add_layouts(&self, ctx: &ServiceContext) -> Result<(), InitializationError> {
        let manifest_text = self.resources.load_text(&self.config.manifest_path)?;
        let entries = Manifest::parse(&self.config.manifest_path, &manifest_text)?;

        for entry in &entries {
            let page_path = self.config.page_path(&entry.path);
            let page_text = self.resources.load_text(&page_path)?;
            let page = PageDescriptor::parse(&page_path, &page_text)?;

            log::debug!("creating layout '{}' from '{}'", page.name, entry.path);

            match page.declared_kind() {
                LayoutKind::Content => {
                    let definition_path = self.config.page_definition_path(&entry.path);
                    let definition_text = self.resources.load_text(&definition_path)?;
                    let definition = PageDefinition::parse(&definition_path, &definition_text)?;
                    self.add_content_layout(ctx, &page, &definition)?;
                }
                LayoutKind::Portlet => {
                    self.add_widget_layout(ctx, &page)?;
                }
            }
        }
        Ok(())
    }

    /// An empty portlet page carrying only its localized name.
    fn add_widget_layout(
        &self,
        ctx: &ServiceContext,
        page: &PageDescriptor,
    ) -> Result<Layout, InitializationError> {
        let layout = self.layouts.add_layout(
            ctx,
            CreateLayout {
                group_id: ctx.scope_group_id,
                private: false,
                parent_id: None,
                name: localized(ctx.locale.clone(), page.name.as_str()),
                title: LocalizedText::new(),
                description: LocalizedText::new(),
                kind: LayoutKind::Portlet,
                hidden: false,
            },
        )?;
        Ok(layout)
    }

    /// Create, fill the draft, reconcile settings, promote. Each step must
    /// complete before the next.
    fn add_content_layout(
        &self,
        ctx: &ServiceContext,
        page: &PageDescriptor,
        definition: &PageDefinition,
    ) -> Result<Layout, InitializationError> {
        let layout = self.layouts.add_layout(
            ctx,
            CreateLayout {
                group_id: ctx.scope_group_id,
                private: page.private,
                parent_id: None,
                name: localized(ctx.locale.clone(), page.name.as_str()),
                title: LocalizedText::new(),
                description: LocalizedText::new(),
                kind: LayoutKind::Content,
                hidden: false,
            },
        )?;

        let mut draft = self.layouts.fetch_draft_layout(&layout)?;

        let importer = PageStructureImporter::new(self.structures.as_ref());
        importer.import_page_definition(&draft, definition)?;

        if let Some(settings) = &definition.settings {
            let reconciler = SettingsReconciler::new(
                self.layouts.as_ref(),
                self.themes.as_ref(),
                self.master_pages.as_ref(),
            );
            draft = reconciler.update_layout_type_settings(draft, settings)?;
        }

        let layout = self.layouts.promote(ctx, &draft)?;
        Ok(layout)
    }
}

/// Assembles a [`SiteInitializer`] from its collaborators.
///
/// Every service seam is required; `build` fails with a configuration error
/// naming the first missing one.
#[derive(Default)]
pub struct SiteInitializerBuilder {
    config: Option<InitializerConfig>,
    resources: Option<Arc<dyn ResourceProvider>>,
    layouts: Option<Arc<dyn LayoutService>>,
    structures: Option<Arc<dyn LayoutStructureService>>,
    themes: Option<Arc<dyn ThemeRegistry>>,
    master_pages: Option<Arc<dyn MasterPageRegistry>>,
    fragments: Option<Arc<dyn FragmentImporter>>,
    users: Option<Arc<dyn UserDirectory>>,
}

impl SiteInitializerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: InitializerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_resources(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_layouts(mut self, layouts: Arc<dyn LayoutService>) -> Self {
        self.layouts = Some(layouts);
        self
    }

    pub fn with_structures(mut self, structures: Arc<dyn LayoutStructureService>) -> Self {
        self.structures = Some(structures);
        self
    }

    pub fn with_themes(mut self, themes: Arc<dyn ThemeRegistry>) -> Self {
        self.themes = Some(themes);
        self
    }

    pub fn with_master_pages(mut self, master_pages: Arc<dyn MasterPageRegistry>) -> Self {
        self.master_pages = Some(master_pages);
        self
    }

    pub fn with_fragments(mut self, fragments: Arc<dyn FragmentImporter>) -> Self {
        self.fragments = Some(fragments);
        self
    }

    pub fn with_users(mut self, users: Arc<dyn UserDirectory>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn build(self) -> Result<SiteInitializer, InitializationError> {
        Ok(SiteInitializer {
            config: self.config.unwrap_or_default(),
            resources: self.resources.ok_or_else(|| missing("resource provider"))?,
            layouts: self.layouts.ok_or_else(|| missing("layout service"))?,
            structures: self
                .structures
                .ok_or_else(|| missing("layout structure service"))?,
            themes: self.themes.ok_or_else(|| missing("theme registry"))?,
            master_pages: self
                .master_pages
                .ok_or_else(|| missing("master page registry"))?,
            fragments: self.fragments.ok_or_else(|| missing("fragment importer"))?,
            users: self.users.ok_or_else(|| missing("user directory"))?,
        })
    }
}

fn missing(what: &str) -> InitializationError {
    InitializationError::Config(format!("no {what} configured"))
}
