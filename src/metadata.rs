// src/metadata.rs
use crate::corpus::{ProjectCorpus, META_EXT, PREFAB_EXT, SCENE_EXT, SCRIPT_EXT};
use crate::discovery::SETTINGS_DIR;
use crate::project::ProjectHandle;
use std::fs;
use std::path::Path;

/// Sentinel for a missing or malformed version marker.
pub const UNKNOWN_VERSION: &str = "Unknown";

/// File holding the engine version, relative to `ProjectSettings/`.
pub const VERSION_MARKER: &str = "ProjectVersion.txt";

/// Token counted in scene text as a cheap proxy for embedded objects.
pub const GAMEOBJECT_MARKER: &str = "m_GameObject";

/// Per-project counts reported alongside the interaction hits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub engine_version: String,
    pub script_count: usize,
    pub script_lines: usize,
    pub non_meta_files: usize,
    pub prefab_count: usize,
    pub scene_count: usize,
    pub game_object_count: usize,
}

/// Extracts all metadata for one project. Per-file failures degrade to
/// zero contributions; this never fails.
#[must_use]
pub fn extract(handle: &ProjectHandle, include_meta: bool) -> ProjectMetadata {
    let corpus = ProjectCorpus::new(handle);
    let (script_count, script_lines) = count_scripts(&corpus);
    let (scene_count, game_object_count) = count_scenes(&corpus);
    ProjectMetadata {
        engine_version: engine_version(&handle.root),
        script_count,
        script_lines,
        non_meta_files: count_files(&corpus, include_meta),
        prefab_count: corpus.files_with_extension(PREFAB_EXT).len(),
        scene_count,
        game_object_count,
    }
}

/// Reads the engine version: first line of the marker file, second
/// whitespace token (`m_EditorVersion: 2021.3.5f1` -> `2021.3.5f1`).
#[must_use]
pub fn engine_version(project_root: &Path) -> String {
    let marker = project_root.join(SETTINGS_DIR).join(VERSION_MARKER);
    let Ok(content) = fs::read_to_string(&marker) else {
        return UNKNOWN_VERSION.to_string();
    };
    content
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map_or_else(|| UNKNOWN_VERSION.to_string(), str::to_string)
}

/// Counts `.cs` files and their non-blank lines. An undecodable script
/// still counts toward the script count but contributes zero lines.
#[must_use]
pub fn count_scripts(corpus: &ProjectCorpus) -> (usize, usize) {
    let scripts = corpus.files_with_extension(SCRIPT_EXT);
    let mut lines = 0usize;
    for path in &scripts {
        if let Some(record) = corpus.read(path) {
            lines += record
                .text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .count();
        }
    }
    (scripts.len(), lines)
}

/// Counts files in the asset tree, excluding `.meta` sidecars unless asked.
#[must_use]
pub fn count_files(corpus: &ProjectCorpus, include_meta: bool) -> usize {
    corpus
        .all_files()
        .iter()
        .filter(|p| include_meta || !crate::corpus::has_extension(p, META_EXT))
        .count()
}

/// Counts scenes and `m_GameObject` marker occurrences in their raw text.
#[must_use]
pub fn count_scenes(corpus: &ProjectCorpus) -> (usize, usize) {
    let scenes = corpus.files_with_extension(SCENE_EXT);
    let mut markers = 0usize;
    for path in &scenes {
        if let Some(record) = corpus.read(path) {
            markers += record.text.matches(GAMEOBJECT_MARKER).count();
        }
    }
    (scenes.len(), markers)
}
