// src/project.rs
use std::path::{Path, PathBuf};

/// One discovered Unity project. Created during discovery, consumed by
/// extraction and scanning, discarded after its report row is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectHandle {
    pub root: PathBuf,
    /// Display name: first component of the project root relative to the
    /// scan root, or the root's own directory name when they coincide.
    pub name: String,
}

impl ProjectHandle {
    #[must_use]
    pub fn new(root: &Path, scan_root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            name: display_name(root, scan_root),
        }
    }

    /// The asset tree both the extractor and the scanner operate on.
    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join(crate::discovery::ASSETS_DIR)
    }
}

fn display_name(root: &Path, scan_root: &Path) -> String {
    root.strip_prefix(scan_root)
        .ok()
        .and_then(|rel| rel.components().next())
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .or_else(|| root.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| root.to_string_lossy().into_owned())
}
