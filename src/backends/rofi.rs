use crate::theme::BlockStyle;

use super::{themes_file, MappingKind, OutputLayout, OutputTarget, ThemeBackend};

/// Rofi theme fragment, importable as `@import "kde-colors"`.
pub struct RofiBackend;

impl ThemeBackend for RofiBackend {
    fn name(&self) -> &'static str {
        "rofi"
    }

    fn targets(&self, layout: &OutputLayout) -> Vec<OutputTarget> {
        vec![OutputTarget {
            backend: self.name(),
            mapping: MappingKind::General,
            path: themes_file(&layout.data_dir.join("rofi"), "kde-colors.rasi"),
            style: BlockStyle::rasi(),
            requires_dir: None,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn writes_rasi_under_data_dir() {
        let layout = OutputLayout {
            config_dir: PathBuf::from("/c"),
            data_dir: PathBuf::from("/d"),
            home_dir: PathBuf::from("/h"),
        };
        let targets = RofiBackend.targets(&layout);
        assert_eq!(targets[0].path, PathBuf::from("/d/rofi/themes/kde-colors.rasi"));
        assert_eq!(targets[0].style, BlockStyle::rasi());
        assert_eq!(targets[0].mapping, MappingKind::General);
    }
}
