//! An in-memory host platform.
//!
//! Reference implementation of every service seam over interior-mutable
//! state. Records are held in insertion order so creation order is
//! observable, draft/published pairs are linked the way the host platform
//! links them, and promotion is applied under one write lock — the
//! transactional boundary the `promote` contract requires.

use indexmap::IndexMap;
use siteinit_structure::LayoutStructure;
use siteinit_traits::{
    FragmentImporter, LayoutService, LayoutStructureService, MasterPageRegistry, ServiceError,
    SharedResourceData, ThemeRegistry, UserDirectory,
};
use siteinit_types::{
    ColorSchemeId, CreateLayout, GroupId, Layout, LayoutId, LayoutKind, LayoutState, Locale,
    MasterPageEntry, ServiceContext, Theme, ThemeId, TimeZone, TypeSettings, User, UserId,
    WorkflowStatus,
};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct PlatformState {
    next_layout_id: u64,
    /// All layout records, draft and published, in creation order.
    layouts: IndexMap<LayoutId, Layout>,
    /// Persisted structure blobs, keyed by layout id.
    structures: HashMap<LayoutId, String>,
    themes: Vec<Theme>,
    master_pages: Vec<MasterPageEntry>,
    imported_archives: Vec<(GroupId, usize)>,
    current_user: User,
    default_locale: Locale,
}

impl PlatformState {
    fn allocate_id(&mut self) -> LayoutId {
        let id = LayoutId::new(self.next_layout_id);
        self.next_layout_id += 1;
        id
    }
}

/// The in-memory platform. One instance plays every collaborator role.
#[derive(Debug)]
pub struct InMemoryPlatform {
    state: RwLock<PlatformState>,
}

impl Default for InMemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(PlatformState {
                next_layout_id: 1,
                layouts: IndexMap::new(),
                structures: HashMap::new(),
                themes: Vec::new(),
                master_pages: Vec::new(),
                imported_archives: Vec::new(),
                current_user: User {
                    id: UserId::new(1),
                    time_zone: TimeZone::default(),
                },
                default_locale: Locale::default(),
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PlatformState>, ServiceError> {
        self.state.read().map_err(|_| lock_poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PlatformState>, ServiceError> {
        self.state.write().map_err(|_| lock_poisoned())
    }

    /// Registers a theme the reconciler can resolve by name.
    pub fn register_theme(&self, theme: Theme) {
        if let Ok(mut state) = self.state.write() {
            state.themes.push(theme);
        }
    }

    /// Registers a master-page template entry.
    pub fn register_master_page(&self, entry: MasterPageEntry) {
        if let Ok(mut state) = self.state.write() {
            state.master_pages.push(entry);
        }
    }

    pub fn set_current_user(&self, user: User) {
        if let Ok(mut state) = self.state.write() {
            state.current_user = user;
        }
    }

    pub fn set_default_locale(&self, locale: Locale) {
        if let Ok(mut state) = self.state.write() {
            state.default_locale = locale;
        }
    }

    // Inspection helpers for tests and dry-runs

    /// Published layouts of a group, in creation order.
    pub fn layouts_in_creation_order(&self, group_id: GroupId) -> Vec<Layout> {
        self.state
            .read()
            .map(|state| {
                state
                    .layouts
                    .values()
                    .filter(|layout| layout.group_id == group_id && !layout.is_draft())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn layout(&self, id: LayoutId) -> Option<Layout> {
        self.state.read().ok()?.layouts.get(&id).cloned()
    }

    /// The draft counterpart of a published layout, if one exists.
    pub fn draft_of(&self, published_id: LayoutId) -> Option<Layout> {
        self.state
            .read()
            .ok()?
            .layouts
            .values()
            .find(|layout| layout.published_id() == Some(published_id))
            .cloned()
    }

    /// Deserializes the persisted structure of a layout.
    pub fn structure_of(&self, layout_id: LayoutId) -> Option<LayoutStructure> {
        let blob = self.state.read().ok()?.structures.get(&layout_id).cloned()?;
        LayoutStructure::of(&blob).ok()
    }

    pub fn imported_archive_count(&self) -> usize {
        self.state
            .read()
            .map(|state| state.imported_archives.len())
            .unwrap_or(0)
    }
}

fn lock_poisoned() -> ServiceError {
    ServiceError::Collaborator {
        service: "in-memory platform",
        message: "state lock poisoned".to_string(),
    }
}

fn structure_failure(error: siteinit_structure::StructureError) -> ServiceError {
    ServiceError::Collaborator {
        service: "layout-structure",
        message: error.to_string(),
    }
}

impl LayoutService for InMemoryPlatform {
    fn add_layout(
        &self,
        _ctx: &ServiceContext,
        request: CreateLayout,
    ) -> Result<Layout, ServiceError> {
        let mut state = self.write()?;

        let id = state.allocate_id();
        let published = Layout {
            id,
            group_id: request.group_id,
            name: request.name,
            private: request.private,
            kind: request.kind,
            parent_id: request.parent_id,
            state: LayoutState::Published,
            // Widget pages go live as created; content pages are approved
            // through promotion of their draft.
            status: match request.kind {
                LayoutKind::Portlet => WorkflowStatus::Approved,
                LayoutKind::Content => WorkflowStatus::Draft,
            },
            theme_id: None,
            color_scheme_id: None,
            css: String::new(),
            type_settings: TypeSettings::new(),
            master_layout_id: None,
        };
        state.layouts.insert(id, published.clone());

        if request.kind == LayoutKind::Content {
            let draft_id = state.allocate_id();
            let draft = Layout {
                id: draft_id,
                state: LayoutState::Draft { published_id: id },
                status: WorkflowStatus::Draft,
                ..published.clone()
            };
            let blob = LayoutStructure::empty()
                .to_data()
                .map_err(structure_failure)?;
            state.structures.insert(draft_id, blob);
            state.layouts.insert(draft_id, draft);
        }

        Ok(published)
    }

    fn fetch_draft_layout(&self, layout: &Layout) -> Result<Layout, ServiceError> {
        self.read()?
            .layouts
            .values()
            .find(|candidate| candidate.published_id() == Some(layout.id))
            .cloned()
            .ok_or(ServiceError::DraftNotFound(layout.id))
    }

    fn update_type_settings(
        &self,
        layout: &Layout,
        settings: &TypeSettings,
    ) -> Result<Layout, ServiceError> {
        let mut state = self.write()?;
        let record = state
            .layouts
            .get_mut(&layout.id)
            .ok_or(ServiceError::LayoutNotFound(layout.id))?;
        record.type_settings = settings.clone();
        Ok(record.clone())
    }

    fn update_look_and_feel(
        &self,
        layout: &Layout,
        theme_id: Option<ThemeId>,
        color_scheme_id: Option<ColorSchemeId>,
        css: &str,
    ) -> Result<Layout, ServiceError> {
        let mut state = self.write()?;
        let record = state
            .layouts
            .get_mut(&layout.id)
            .ok_or(ServiceError::LayoutNotFound(layout.id))?;
        record.theme_id = theme_id;
        record.color_scheme_id = color_scheme_id;
        record.css = css.to_string();
        Ok(record.clone())
    }

    fn update_master_layout(
        &self,
        layout: &Layout,
        master_layout_id: LayoutId,
    ) -> Result<Layout, ServiceError> {
        let mut state = self.write()?;
        let record = state
            .layouts
            .get_mut(&layout.id)
            .ok_or(ServiceError::LayoutNotFound(layout.id))?;
        record.master_layout_id = Some(master_layout_id);
        Ok(record.clone())
    }

    fn promote(&self, _ctx: &ServiceContext, draft: &Layout) -> Result<Layout, ServiceError> {
        // Everything below happens under one write lock: configuration copy,
        // structure copy, and both approvals land together or not at all.
        let mut state = self.write()?;

        let published_id = draft
            .published_id()
            .ok_or(ServiceError::DraftNotFound(draft.id))?;
        let draft_record = state
            .layouts
            .get(&draft.id)
            .cloned()
            .ok_or(ServiceError::LayoutNotFound(draft.id))?;

        let published = state
            .layouts
            .get_mut(&published_id)
            .ok_or(ServiceError::LayoutNotFound(published_id))?;
        published.name = draft_record.name.clone();
        published.theme_id = draft_record.theme_id.clone();
        published.color_scheme_id = draft_record.color_scheme_id.clone();
        published.css = draft_record.css.clone();
        published.type_settings = draft_record.type_settings.clone();
        published.master_layout_id = draft_record.master_layout_id;
        published.status = WorkflowStatus::Approved;
        let promoted = published.clone();

        if let Some(blob) = state.structures.get(&draft.id).cloned() {
            state.structures.insert(published_id, blob);
        }

        let draft_record = state
            .layouts
            .get_mut(&draft.id)
            .ok_or(ServiceError::LayoutNotFound(draft.id))?;
        draft_record.status = WorkflowStatus::Approved;

        Ok(promoted)
    }
}

impl LayoutStructureService for InMemoryPlatform {
    fn fetch_structure_data(&self, layout: &Layout) -> Result<String, ServiceError> {
        self.read()?
            .structures
            .get(&layout.id)
            .cloned()
            .ok_or(ServiceError::StructureNotFound(layout.id))
    }

    fn save_structure(
        &self,
        layout: &Layout,
        structure: &LayoutStructure,
    ) -> Result<(), ServiceError> {
        let blob = structure.to_data().map_err(structure_failure)?;
        self.write()?.structures.insert(layout.id, blob);
        Ok(())
    }
}

impl ThemeRegistry for InMemoryPlatform {
    fn themes(&self, _group_id: GroupId) -> Result<Vec<Theme>, ServiceError> {
        Ok(self.read()?.themes.clone())
    }
}

impl MasterPageRegistry for InMemoryPlatform {
    fn fetch_entry(
        &self,
        group_id: GroupId,
        key: &str,
    ) -> Result<Option<MasterPageEntry>, ServiceError> {
        Ok(self
            .read()?
            .master_pages
            .iter()
            .find(|entry| entry.group_id == group_id && entry.key == key)
            .cloned())
    }
}

impl FragmentImporter for InMemoryPlatform {
    fn import_archive(
        &self,
        ctx: &ServiceContext,
        archive: SharedResourceData,
        _overwrite: bool,
    ) -> Result<(), ServiceError> {
        self.write()?
            .imported_archives
            .push((ctx.scope_group_id, archive.len()));
        Ok(())
    }
}

impl UserDirectory for InMemoryPlatform {
    fn current_user(&self) -> Result<User, ServiceError> {
        Ok(self.read()?.current_user.clone())
    }

    fn default_locale(&self) -> Locale {
        self.state
            .read()
            .map(|state| state.default_locale.clone())
            .unwrap_or_default()
    }
}
