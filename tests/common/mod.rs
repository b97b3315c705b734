pub mod fixtures;

use siteinit::memory::InMemoryPlatform;
use siteinit::{
    GroupId, InMemoryResourceProvider, InitializerConfig, Locale, ServiceContext, SiteInitializer,
    TimeZone, UserId,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The group id every scenario provisions into.
pub const GROUP: u64 = 1001;

pub fn group() -> GroupId {
    GroupId::new(GROUP)
}

/// A service context matching the platform's default user and locale.
pub fn service_context() -> ServiceContext {
    ServiceContext {
        user_id: UserId::new(1),
        scope_group_id: group(),
        locale: Locale::default(),
        time_zone: TimeZone::default(),
        add_group_permissions: true,
        add_guest_permissions: true,
    }
}

/// One wired-up test site: an in-memory platform playing every collaborator
/// role and an in-memory bundle seeded with a fragment archive.
pub struct TestSite {
    pub platform: Arc<InMemoryPlatform>,
    pub resources: Arc<InMemoryResourceProvider>,
}

impl TestSite {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let platform = Arc::new(InMemoryPlatform::new());
        let resources = Arc::new(InMemoryResourceProvider::new());
        // Every bundle ships a fragment archive
        resources
            .add("fragments.zip", b"PK\x03\x04".to_vec())
            .expect("seed fragment archive");

        Self {
            platform,
            resources,
        }
    }

    /// Adds a text descriptor to the bundle.
    pub fn add_resource(&self, path: &str, text: impl Into<String>) {
        self.resources
            .add_text(path, text)
            .expect("seed descriptor");
    }

    pub fn initializer(&self) -> SiteInitializer {
        SiteInitializer::builder()
            .with_config(InitializerConfig::default())
            .with_resources(self.resources.clone())
            .with_layouts(self.platform.clone())
            .with_structures(self.platform.clone())
            .with_themes(self.platform.clone())
            .with_master_pages(self.platform.clone())
            .with_fragments(self.platform.clone())
            .with_users(self.platform.clone())
            .build()
            .expect("initializer wiring")
    }
}
