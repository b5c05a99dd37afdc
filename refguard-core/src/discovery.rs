use crate::config::ValidatorConfig;
use crate::error::{Result, ValidatorError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document found on disk, addressed both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDocument {
    pub absolute_path: PathBuf,
    /// Forward-slash path relative to the reference root
    pub relative_path: String,
}

/// Walks a reference tree depth-first and lists candidate documents.
pub struct FileDiscoverer<'a> {
    config: &'a ValidatorConfig,
}

impl<'a> FileDiscoverer<'a> {
    pub fn new(config: &'a ValidatorConfig) -> Self {
        Self { config }
    }

    /// List every non-excluded document under `scope`, with paths made
    /// relative to `root`. Entries are sorted by name at each level so the
    /// order is the same on every platform.
    pub fn discover(&self, root: &Path, scope: &Path) -> Result<Vec<DiscoveredDocument>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(scope).follow_links(false).sort_by_file_name() {
            let entry = entry.map_err(|source| ValidatorError::Walk {
                root: scope.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if !self.has_document_extension(&file_name) {
                continue;
            }
            if self.config.is_excluded(&file_name) {
                tracing::debug!(file = %entry.path().display(), "skipping excluded document");
                continue;
            }

            let absolute_path = entry.path().to_path_buf();
            let relative_path = to_relative_string(root, &absolute_path);
            documents.push(DiscoveredDocument {
                absolute_path,
                relative_path,
            });
        }

        Ok(documents)
    }

    fn has_document_extension(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext == self.config.document_extension)
    }
}

/// Join path components under `root` with '/', whatever the host separator
pub fn to_relative_string(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
