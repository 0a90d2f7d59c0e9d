use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::color::Color;
use crate::error::ExportError;

/// Key -> color mapping destined for one or more theme files.
///
/// Iteration is always in ascending byte-wise key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeMapping {
    entries: BTreeMap<String, Color>,
}

impl ThemeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, color: Color) {
        self.entries.insert(key.into(), color);
    }

    pub fn get(&self, key: &str) -> Option<Color> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

/// Wrapper syntax for a declaration block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStyle {
    pub selector: String,
    pub key_prefix: String,
    pub important: bool,
}

impl BlockStyle {
    /// CSS custom properties on `:root`.
    pub fn css_root() -> Self {
        Self {
            selector: ":root".to_string(),
            key_prefix: "--".to_string(),
            important: false,
        }
    }

    /// Rofi rasi global section.
    pub fn rasi() -> Self {
        Self {
            selector: "*".to_string(),
            key_prefix: String::new(),
            important: false,
        }
    }

    /// CSS custom properties on `*`, each marked `!important`.
    pub fn css_override() -> Self {
        Self {
            selector: "*".to_string(),
            key_prefix: "--".to_string(),
            important: true,
        }
    }
}

/// Serialize a mapping as a declaration block.
pub fn render(mapping: &ThemeMapping, style: &BlockStyle) -> String {
    let marker = if style.important { "!important" } else { "" };

    let mut out = String::new();
    out.push_str(&format!("{} {{\n", style.selector));
    for (key, color) in mapping.iter() {
        out.push_str(&format!(
            "    {}{}: {}{};\n",
            style.key_prefix,
            key,
            color.to_hex(),
            marker
        ));
    }
    out.push_str("}\n");
    out
}

/// Render and replace `path` with the result.
///
/// The block is written to a sibling temp file first and renamed into place,
/// so the destination is either left untouched or fully replaced.
pub fn write_to(mapping: &ThemeMapping, style: &BlockStyle, path: &Path) -> Result<(), ExportError> {
    let content = render(mapping, style);
    let temp_path = temp_path_for(path);

    let result = std::fs::File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .map_err(|e| ExportError::io(&temp_path, e))
        .and_then(|()| std::fs::rename(&temp_path, path).map_err(|e| ExportError::io(path, e)));

    if result.is_err() {
        let _ = std::fs::remove_file(&temp_path);
    } else {
        debug!(path = %path.display(), entries = mapping.len(), "theme block written");
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThemeMapping {
        let mut mapping = ThemeMapping::new();
        mapping.insert("zeta", Color::new(0, 0, 0));
        mapping.insert("alpha", Color::new(255, 136, 0));
        mapping.insert("Beta", Color::new(1, 2, 3));
        mapping
    }

    #[test]
    fn keys_iterate_sorted() {
        let mapping = sample();
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["Beta", "alpha", "zeta"]);
    }

    #[test]
    fn css_root_block() {
        let output = render(&sample(), &BlockStyle::css_root());
        assert_eq!(
            output,
            ":root {\n    --Beta: #010203;\n    --alpha: #ff8800;\n    --zeta: #000000;\n}\n"
        );
    }

    #[test]
    fn rasi_block_has_no_prefix() {
        let output = render(&sample(), &BlockStyle::rasi());
        assert!(output.starts_with("* {\n"));
        assert!(output.contains("    alpha: #ff8800;\n"));
    }

    #[test]
    fn important_marker_on_every_line() {
        let output = render(&sample(), &BlockStyle::css_override());
        let declarations: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("    "))
            .collect();
        assert_eq!(declarations.len(), 3);
        for line in declarations {
            assert!(line.ends_with("!important;"), "missing marker: {line}");
        }
        assert!(output.contains("--alpha: #ff8800!important;"));
    }

    #[test]
    fn empty_mapping_renders_empty_block() {
        assert_eq!(render(&ThemeMapping::new(), &BlockStyle::rasi()), "* {\n}\n");
    }

    #[test]
    fn write_to_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kde-colors.css");
        std::fs::write(&path, "old content that is much longer than the new block ...").unwrap();

        write_to(&sample(), &BlockStyle::css_root(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, render(&sample(), &BlockStyle::css_root()));
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn write_to_missing_directory_fails_without_creating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("kde-colors.css");

        let err = write_to(&sample(), &BlockStyle::css_root(), &path).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
        assert!(!dir.path().join("absent").exists());
    }
}
