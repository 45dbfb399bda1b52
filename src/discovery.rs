// src/discovery.rs
use crate::project::ProjectHandle;
use std::path::Path;
use walkdir::WalkDir;

/// Structural markers: a directory is a Unity project root iff it directly
/// contains both of these subdirectories.
pub const ASSETS_DIR: &str = "Assets";
pub const SETTINGS_DIR: &str = "ProjectSettings";

/// Walks `scan_root` depth-first and returns every Unity project root in
/// traversal order. Once a directory qualifies, its subtree is skipped, so
/// a sub-folder of a valid project is never reported as a second project.
/// Unreadable directories are logged and skipped, never fatal.
#[must_use]
pub fn discover(scan_root: &Path) -> Vec<ProjectHandle> {
    let mut handles = Vec::new();
    let mut errors = 0usize;

    let mut walker = WalkDir::new(scan_root).follow_links(false).into_iter();
    while let Some(item) = walker.next() {
        let entry = match item {
            Ok(entry) => entry,
            Err(_) => {
                errors += 1;
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if is_project_root(entry.path()) {
            handles.push(ProjectHandle::new(entry.path(), scan_root));
            walker.skip_current_dir();
        }
    }

    if errors > 0 {
        eprintln!("WARN: skipped {errors} unreadable entries during discovery");
    }
    handles
}

#[must_use]
pub fn is_project_root(dir: &Path) -> bool {
    dir.join(ASSETS_DIR).is_dir() && dir.join(SETTINGS_DIR).is_dir()
}
