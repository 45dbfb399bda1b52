// src/rules.rs
use crate::error::{Result, ScanError};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw rule shape as it appears in `rules.json`:
/// `{"button": {"gameObjects": ["Button"], "scripts": ["ButtonEntity"]}}`.
/// Both lists are optional; an empty rule matches nothing and is valid.
#[derive(Debug, Clone, Default, Deserialize)]
struct RawRule {
    #[serde(default, rename = "gameObjects")]
    game_objects: Vec<String>,
    #[serde(default)]
    scripts: Vec<String>,
}

/// One gameObject name pattern compiled against the structural
/// `m_Name:` field. The pattern matches as a name prefix: `Button`
/// hits `m_Name: ButtonPrimary`.
#[derive(Debug, Clone)]
pub struct GameObjectPattern {
    pub raw: String,
    regex: Regex,
}

impl GameObjectPattern {
    fn compile(rule: &str, raw: &str) -> Result<Self> {
        let source = format!(r"m_Name:\s*{}", regex::escape(raw));
        let regex = Regex::new(&source).map_err(|source| ScanError::Pattern {
            source,
            rule: rule.to_string(),
            pattern: raw.to_string(),
        })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// Presence check: true if the name field matches anywhere in the text.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Patterns for one interaction category.
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub game_objects: Vec<GameObjectPattern>,
    pub scripts: Vec<String>,
}

/// The full rule set, loaded once per run and shared read-only by all
/// scans. Rules iterate sorted by name so the report column order is
/// stable across runs.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
}

impl RuleSet {
    /// Loads and compiles a rule set from a JSON file.
    ///
    /// # Errors
    /// Returns `RulesIo` if the file is unreadable, `RulesParse` if it is
    /// not a well-formed rule mapping, `Pattern` if a gameObject pattern
    /// does not compile. All are fatal before any project is processed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::RulesIo {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(&content, path)
    }

    /// Parses rule JSON. `origin` only tags error messages.
    ///
    /// # Errors
    /// See [`RuleSet::load`].
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, RawRule> =
            serde_json::from_str(content).map_err(|source| ScanError::RulesParse {
                source,
                path: PathBuf::from(origin),
            })?;

        let mut rules = BTreeMap::new();
        for (name, r) in raw {
            let game_objects = r
                .game_objects
                .iter()
                .map(|p| GameObjectPattern::compile(&name, p))
                .collect::<Result<Vec<_>>>()?;
            rules.insert(
                name,
                Rule {
                    game_objects,
                    scripts: r.scripts,
                },
            );
        }
        Ok(Self { rules })
    }

    /// Rule names in report column order (sorted).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
