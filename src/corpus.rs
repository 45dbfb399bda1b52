// src/corpus.rs
//! Text corpus for one project's asset tree.
//!
//! Scene and prefab files are deliberately treated as plain text rather
//! than parsed: the counting contract only needs keyword presence, and
//! this module is the single place a real format parser would slot in.

use crate::project::ProjectHandle;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const SCRIPT_EXT: &str = "cs";
pub const SCENE_EXT: &str = "unity";
pub const PREFAB_EXT: &str = "prefab";
pub const GENERIC_ASSET_EXT: &str = "asset";
pub const META_EXT: &str = "meta";

/// Extensions the interaction scanner reads.
pub const SCAN_EXTENSIONS: &[&str] = &[SCENE_EXT, PREFAB_EXT, GENERIC_ASSET_EXT, SCRIPT_EXT];

/// A single scanned file: read, matched, discarded.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub text: String,
}

pub struct ProjectCorpus {
    assets: PathBuf,
}

impl ProjectCorpus {
    #[must_use]
    pub fn new(handle: &ProjectHandle) -> Self {
        Self {
            assets: handle.assets_dir(),
        }
    }

    /// Every file under the asset tree, in traversal order.
    #[must_use]
    pub fn all_files(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let mut errors = 0usize;
        for item in WalkDir::new(&self.assets).follow_links(false) {
            match item {
                Ok(entry) if entry.file_type().is_file() => paths.push(entry.into_path()),
                Ok(_) => {}
                Err(_) => errors += 1,
            }
        }
        if errors > 0 {
            eprintln!(
                "WARN: skipped {errors} unreadable entries under {}",
                self.assets.display()
            );
        }
        paths
    }

    /// Files with the given extension, case-insensitive.
    #[must_use]
    pub fn files_with_extension(&self, ext: &str) -> Vec<PathBuf> {
        self.all_files()
            .into_iter()
            .filter(|p| has_extension(p, ext))
            .collect()
    }

    /// Files the interaction scanner looks at.
    #[must_use]
    pub fn scan_files(&self) -> Vec<PathBuf> {
        self.all_files()
            .into_iter()
            .filter(|p| SCAN_EXTENSIONS.iter().any(|ext| has_extension(p, ext)))
            .collect()
    }

    /// Reads and decodes one corpus file. `None` means unreadable or
    /// undecodable; a diagnostic is printed and the caller degrades to a
    /// zero contribution for that file.
    #[must_use]
    pub fn read(&self, path: &Path) -> Option<FileRecord> {
        let text = read_text(path)?;
        Some(FileRecord {
            path: path.to_path_buf(),
            text,
        })
    }
}

#[must_use]
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Reads a file and decodes it with the candidate decoder list.
#[must_use]
pub fn read_text(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("WARN: cannot read {}: {e}", path.display());
            return None;
        }
    };
    let decoded = decode_text(&bytes);
    if decoded.is_none() {
        eprintln!("WARN: cannot decode {} with any known encoding", path.display());
    }
    decoded
}

type Decoder = fn(&[u8]) -> Option<String>;

/// Ordered candidate decoders; first success wins.
const DECODERS: &[Decoder] = &[decode_utf8, decode_gbk, decode_latin1];

#[must_use]
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    DECODERS.iter().find_map(|decode| decode(bytes))
}

fn decode_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}

fn decode_gbk(bytes: &[u8]) -> Option<String> {
    let (text, _, had_errors) = encoding_rs::GBK.decode(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

// Latin-1 maps every byte to a scalar, so the fallback chain is total in
// practice; the Option contract stays for the decoder list shape.
fn decode_latin1(bytes: &[u8]) -> Option<String> {
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}
