use crate::theme::BlockStyle;

use super::{MappingKind, OutputLayout, OutputTarget, ThemeBackend};

/// `~/.config/kde-colors.css`: the general mapping as CSS custom properties.
pub struct KdeCssBackend;

impl ThemeBackend for KdeCssBackend {
    fn name(&self) -> &'static str {
        "kde-css"
    }

    fn targets(&self, layout: &OutputLayout) -> Vec<OutputTarget> {
        vec![OutputTarget {
            backend: self.name(),
            mapping: MappingKind::General,
            path: layout.config_dir.join("kde-colors.css"),
            style: BlockStyle::css_root(),
            requires_dir: None,
        }]
    }
}
