//! Output backends: where each mapping is written and in which syntax.

pub mod kde_css;
pub mod rofi;
pub mod vencord;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::theme::{self, BlockStyle, ThemeMapping};

pub use kde_css::KdeCssBackend;
pub use rofi::RofiBackend;
pub use vencord::VencordBackend;

/// Which resolved mapping a target consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    General,
    Secondary,
}

/// Standard per-user directories the targets live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    pub home_dir: PathBuf,
}

/// One file to write during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub backend: &'static str,
    pub mapping: MappingKind,
    pub path: PathBuf,
    pub style: BlockStyle,
    /// Integration directory that must already exist, for optional targets.
    pub requires_dir: Option<PathBuf>,
}

/// Result of handling one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetOutcome {
    Written,
    /// The optional integration is not installed.
    Skipped,
    Failed(String),
}

/// A family of theme files for one consumer.
pub trait ThemeBackend {
    fn name(&self) -> &'static str;

    fn targets(&self, layout: &OutputLayout) -> Vec<OutputTarget>;
}

pub fn all_backends() -> Vec<Box<dyn ThemeBackend>> {
    vec![
        Box::new(KdeCssBackend),
        Box::new(RofiBackend),
        Box::new(VencordBackend),
    ]
}

/// Every target of every backend, in backend order.
pub fn all_targets(layout: &OutputLayout) -> Vec<OutputTarget> {
    all_backends()
        .iter()
        .flat_map(|backend| backend.targets(layout))
        .collect()
}

/// Write `mapping` to `target`. Failures are logged and reported, never raised.
pub fn emit(target: &OutputTarget, mapping: &ThemeMapping) -> TargetOutcome {
    if let Some(dir) = &target.requires_dir {
        if !dir.is_dir() {
            debug!(backend = target.backend, dir = %dir.display(), "integration not installed, skipping");
            return TargetOutcome::Skipped;
        }
    }

    match theme::write_to(mapping, &target.style, &target.path) {
        Ok(()) => TargetOutcome::Written,
        Err(e) => {
            warn!(backend = target.backend, path = %target.path.display(), error = %e, "failed to write theme file");
            TargetOutcome::Failed(e.to_string())
        }
    }
}

pub(crate) fn themes_file(dir: &Path, file_name: &str) -> PathBuf {
    dir.join("themes").join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn layout(root: &Path) -> OutputLayout {
        OutputLayout {
            config_dir: root.join("config"),
            data_dir: root.join("data"),
            home_dir: root.join("home"),
        }
    }

    fn mapping() -> ThemeMapping {
        let mut m = ThemeMapping::new();
        m.insert("a", Color::new(1, 2, 3));
        m
    }

    #[test]
    fn all_targets_cover_every_backend() {
        let targets = all_targets(&layout(Path::new("/x")));
        assert_eq!(targets.len(), 6);
        let general = targets
            .iter()
            .filter(|t| t.mapping == MappingKind::General)
            .count();
        assert_eq!(general, 2);
    }

    #[test]
    fn optional_target_skipped_without_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget {
            backend: "test",
            mapping: MappingKind::Secondary,
            path: dir.path().join("app/themes/kde-colors.css"),
            style: BlockStyle::css_override(),
            requires_dir: Some(dir.path().join("app")),
        };
        assert_eq!(emit(&target, &mapping()), TargetOutcome::Skipped);
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn failed_write_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget {
            backend: "test",
            mapping: MappingKind::General,
            path: dir.path().join("missing/kde-colors.css"),
            style: BlockStyle::css_root(),
            requires_dir: None,
        };
        assert!(matches!(emit(&target, &mapping()), TargetOutcome::Failed(_)));
    }

    #[test]
    fn emit_writes_block() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget {
            backend: "test",
            mapping: MappingKind::General,
            path: dir.path().join("kde-colors.css"),
            style: BlockStyle::css_root(),
            requires_dir: None,
        };
        assert_eq!(emit(&target, &mapping()), TargetOutcome::Written);
        assert_eq!(
            std::fs::read_to_string(&target.path).unwrap(),
            ":root {\n    --a: #010203;\n}\n"
        );
    }
}
