//! kdeglobals on disk: snapshot loading and change notification.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use notify::{Event, RecursiveMode, Watcher};
use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::gate::{ChangeCallback, ChangeNotifier, ConfigSource, Subscription};
use crate::kde::config::KdeConfig;

/// System-wide defaults, overridden by the user's file.
pub const SYSTEM_KDEGLOBALS: &str = "/etc/xdg/kdeglobals";

/// The kdeglobals cascade. The last path is the user's file, which is the
/// one watched for changes.
#[derive(Debug, Clone)]
pub struct KdeGlobalsFile {
    cascade: Vec<PathBuf>,
}

impl KdeGlobalsFile {
    /// System defaults followed by `user_path`.
    pub fn new(user_path: impl Into<PathBuf>) -> Self {
        Self {
            cascade: vec![PathBuf::from(SYSTEM_KDEGLOBALS), user_path.into()],
        }
    }

    /// Only `user_path`, without system defaults.
    pub fn user_only(user_path: impl Into<PathBuf>) -> Self {
        Self {
            cascade: vec![user_path.into()],
        }
    }

    pub fn user_path(&self) -> &Path {
        // `cascade` is never empty: every constructor pushes the user path last
        self.cascade.last().map(PathBuf::as_path).unwrap_or(Path::new("kdeglobals"))
    }

    pub fn load(&self) -> KdeConfig {
        KdeConfig::load_cascade(&self.cascade)
    }
}

impl ConfigSource for KdeGlobalsFile {
    type Store = KdeConfig;

    fn snapshot(&self) -> KdeConfig {
        self.load()
    }
}

impl ChangeNotifier for KdeGlobalsFile {
    /// Watches the user file's directory, since KConfig saves by writing a
    /// new file and renaming it into place. Every relevant event reloads the
    /// cascade and reports the per-group differences to the previous load.
    fn subscribe(&self, on_change: ChangeCallback) -> Result<Subscription, ExportError> {
        let user_path = self.user_path().to_path_buf();
        let dir = match user_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name: Option<OsString> = user_path.file_name().map(|n| n.to_os_string());

        let source = self.clone();
        let mut previous = source.load();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "config watcher error");
                    return;
                }
            };
            if event.kind.is_access() || !touches_file(&event, file_name.as_deref()) {
                return;
            }

            let current = source.load();
            let changes = current.changes_since(&previous);
            debug!(kind = ?event.kind, groups = changes.len(), "kdeglobals reloaded");
            for change in &changes {
                on_change(change);
            }
            previous = current;
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        info!(path = %user_path.display(), "watching for color scheme changes");
        Ok(Subscription::new(watcher))
    }
}

fn touches_file(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    let Some(file_name) = file_name else {
        return true;
    };
    event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kde::config::{ConfigChange, ConfigStore};
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn user_file_overrides_system_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("system");
        let user = dir.path().join("kdeglobals");
        std::fs::write(&system, "[General]\nColorScheme=Breeze\nfixed=1\n").unwrap();
        std::fs::write(&user, "[General]\nColorScheme=BreezeDark\n").unwrap();

        let source = KdeGlobalsFile {
            cascade: vec![system, user.clone()],
        };
        let snapshot = source.snapshot();
        assert_eq!(snapshot.read("General", "ColorScheme"), Some("BreezeDark"));
        assert_eq!(snapshot.read("General", "fixed"), Some("1"));
        assert_eq!(source.user_path(), user.as_path());
    }

    #[test]
    fn missing_file_yields_empty_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let source = KdeGlobalsFile::user_only(dir.path().join("kdeglobals"));
        assert_eq!(source.snapshot(), KdeConfig::default());
    }

    #[test]
    fn rewrite_delivers_changed_group() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("kdeglobals");
        std::fs::write(&user, "[General]\nColorScheme=Breeze\n").unwrap();

        let source = KdeGlobalsFile::user_only(&user);
        let (tx, rx) = mpsc::channel::<ConfigChange>();
        let _subscription = source
            .subscribe(Box::new(move |change| {
                let _ = tx.send(change.clone());
            }))
            .unwrap();

        let staged = dir.path().join("kdeglobals.new");
        std::fs::write(&staged, "[General]\nColorScheme=BreezeDark\n").unwrap();
        std::fs::rename(&staged, &user).unwrap();

        let change = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(change, ConfigChange::new("General", ["ColorScheme"]));
    }
}
