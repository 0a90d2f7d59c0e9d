//! KConfig-style INI parsing and the read side of the configuration store.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, warn};

use crate::color::Color;
use crate::kde::colorset::{ColorRole, ColorSet, PaletteState};

/// Name KConfig gives to entries that appear before any group header.
pub const DEFAULT_GROUP: &str = "<default>";

/// Read access to one snapshot of the desktop configuration.
///
/// Implementors only need `read` and `has_group`; color sets are derived from
/// those by default.
pub trait ConfigStore {
    /// Raw string value of `key` in `group`, if present.
    fn read(&self, group: &str, key: &str) -> Option<&str>;

    fn has_group(&self, group: &str) -> bool;

    /// Parse an entry as a color. Unparseable values read as absent.
    fn read_color(&self, group: &str, key: &str) -> Option<Color> {
        let value = self.read(group, key)?;
        match Color::from_kconfig(value) {
            Ok(color) => Some(color),
            Err(e) => {
                debug!(group, key, error = %e, "ignoring unparseable color entry");
                None
            }
        }
    }

    /// Whether the scheme defines its own color set for `role`.
    fn supports_color_set(&self, role: ColorRole) -> bool {
        self.has_group(role.group_name())
    }

    fn color_set(&self, state: PaletteState, role: ColorRole) -> ColorSet {
        ColorSet::load(self, state, role)
    }
}

/// A parsed kdeglobals snapshot: group -> key -> raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KdeConfig {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

/// One committed change: the group that changed and the keys touched in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChange {
    pub group: String,
    pub keys: BTreeSet<String>,
}

impl ConfigChange {
    pub fn new<I, K>(group: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            group: group.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl KdeConfig {
    /// Parse KConfig INI text.
    ///
    /// Nested headers like `[Colors:Header][Inactive]` become the group
    /// `Colors:Header][Inactive`. `[$i]`-style markers on groups and keys are
    /// dropped.
    pub fn parse(text: &str) -> Self {
        let mut groups: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        let mut current = DEFAULT_GROUP.to_string();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current = parse_group_header(line);
                groups.entry(current.clone()).or_default();
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!(line, "skipping line without '='");
                continue;
            };
            let key = strip_key_markers(key.trim());
            if key.is_empty() {
                continue;
            }
            groups
                .entry(current.clone())
                .or_default()
                .insert(key.to_string(), unescape(value.trim()));
        }

        Self { groups }
    }

    /// Read and parse a single file.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Load files in cascade order; later files override earlier ones.
    ///
    /// Missing files are skipped silently, unreadable ones with a warning.
    pub fn load_cascade<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut merged = Self::default();
        for path in paths {
            let path = path.as_ref();
            match Self::load(path) {
                Ok(config) => merged.merge(config),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "config file not present");
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read config file");
                }
            }
        }
        merged
    }

    /// Overlay `other` on top of `self`.
    pub fn merge(&mut self, other: KdeConfig) {
        for (group, entries) in other.groups {
            self.groups.entry(group).or_default().extend(entries);
        }
    }

    /// Per-group key differences between `previous` and `self`, in group
    /// order. Added, removed and modified keys all count as changed.
    pub fn changes_since(&self, previous: &KdeConfig) -> Vec<ConfigChange> {
        let empty = BTreeMap::new();
        let names: BTreeSet<&String> = self.groups.keys().chain(previous.groups.keys()).collect();

        names
            .into_iter()
            .filter_map(|name| {
                let now = self.groups.get(name).unwrap_or(&empty);
                let before = previous.groups.get(name).unwrap_or(&empty);
                let keys: BTreeSet<String> = now
                    .keys()
                    .chain(before.keys())
                    .filter(|k| now.get(*k) != before.get(*k))
                    .cloned()
                    .collect();
                (!keys.is_empty()).then(|| ConfigChange {
                    group: name.clone(),
                    keys,
                })
            })
            .collect()
    }
}

impl ConfigStore for KdeConfig {
    fn read(&self, group: &str, key: &str) -> Option<&str> {
        self.groups.get(group)?.get(key).map(String::as_str)
    }

    fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }
}

fn parse_group_header(line: &str) -> String {
    let inner = &line[1..line.len() - 1];
    inner
        .split("][")
        .filter(|part| !part.starts_with('$'))
        .collect::<Vec<_>>()
        .join("][")
}

fn strip_key_markers(key: &str) -> &str {
    match key.find("[$") {
        Some(idx) => key[..idx].trim_end(),
        None => key,
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
