//! Filesystem-based resource provider.
//!
//! Loads an exploded initializer bundle from a directory, with security
//! measures to prevent path traversal out of the bundle root.

use siteinit_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A resource provider that loads bundle entries from the local filesystem.
///
/// Resource paths are resolved relative to a base path, typically the
/// directory holding the unpacked initializer bundle.
///
/// # Security
///
/// Paths are canonicalized and verified to remain within the base directory.
/// Attempts to reach outside the bundle return a `NotFound` error.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for security checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a new filesystem resource provider with the given base path.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        // Canonicalization may fail if the path doesn't exist yet
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Returns the base path for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a resource path relative to the base path.
    ///
    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            if canonical.starts_with(base) {
                return Some(canonical);
            }
            return None;
        }

        // If canonicalization fails (file doesn't exist), reject any ".."
        // component rather than guessing where it would land
        for component in Path::new(path).components() {
            if let std::path::Component::ParentDir = component {
                return None;
            }
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve_path_safe(path).ok_or_else(|| {
            ResourceError::NotFound(format!("{} (path traversal blocked)", path))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path)
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filesystem_provider_load_descriptor() {
        let dir = tempdir().unwrap();
        let layouts = dir.path().join("layouts");
        fs::create_dir(&layouts).unwrap();
        fs::write(layouts.join("layouts.json"), br#"[{"path": "home"}]"#).unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let text = provider.load_text("layouts/layouts.json").unwrap();
        assert_eq!(text, r#"[{"path": "home"}]"#);
    }

    #[test]
    fn test_filesystem_provider_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("layouts/missing/page.json");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_filesystem_provider_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fragments.zip"), b"PK").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("fragments.zip"));
        assert!(!provider.exists("other.zip"));
    }

    // Security tests for path traversal prevention

    #[test]
    fn test_filesystem_provider_blocks_path_traversal() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("../../../etc/passwd");
        assert!(result.is_err());
        assert!(!provider.exists("../../../etc/passwd"));
    }

    #[test]
    fn test_filesystem_provider_blocks_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let result = provider.load("/etc/passwd");
        assert!(result.is_err());
        assert!(!provider.exists("/etc/passwd"));
    }

    #[test]
    fn test_filesystem_provider_allows_nested_paths() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("layouts").join("home");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("page.json"), b"{}").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("layouts/home/page.json"));
        let data = provider.load("layouts/home/page.json").unwrap();
        assert_eq!(&*data, b"{}");
    }
}
