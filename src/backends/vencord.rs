use std::path::PathBuf;

use crate::theme::BlockStyle;

use super::{themes_file, MappingKind, OutputLayout, OutputTarget, ThemeBackend};

const THEME_FILE: &str = "kde-colors.css";

/// Vencord and Vesktop client themes, native and Flatpak installs.
///
/// Each install is optional: nothing is written unless its config directory
/// already exists.
pub struct VencordBackend;

impl VencordBackend {
    /// Config directories of the supported Discord clients.
    pub fn install_dirs(layout: &OutputLayout) -> Vec<PathBuf> {
        let flatpak = layout.home_dir.join(".var").join("app");
        vec![
            layout.config_dir.join("Vencord"),
            flatpak.join("com.discordapp.Discord/config/Vencord"),
            layout.config_dir.join("vesktop"),
            flatpak.join("dev.vencord.Vesktop/config/vesktop"),
        ]
    }
}

impl ThemeBackend for VencordBackend {
    fn name(&self) -> &'static str {
        "vencord"
    }

    fn targets(&self, layout: &OutputLayout) -> Vec<OutputTarget> {
        Self::install_dirs(layout)
            .into_iter()
            .map(|dir| OutputTarget {
                backend: self.name(),
                mapping: MappingKind::Secondary,
                path: themes_file(&dir, THEME_FILE),
                style: BlockStyle::css_override(),
                requires_dir: Some(dir),
            })
            .collect()
    }
}
