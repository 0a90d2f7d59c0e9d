//! Change gate: runs a resolve+emit pass on startup and whenever the color
//! scheme or accent color changes.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::backends::{emit, MappingKind, OutputTarget, TargetOutcome};
use crate::error::ExportError;
use crate::kde::config::{ConfigChange, ConfigStore};
use crate::pipeline::{resolve_general, resolve_secondary};

/// Group whose changes can affect the palette.
pub const WATCHED_GROUP: &str = "General";

/// Keys in [`WATCHED_GROUP`] that trigger a pass.
pub const WATCHED_KEYS: [&str; 2] = ["ColorScheme", "AccentColor"];

/// Produces a fresh, internally consistent configuration snapshot per pass.
pub trait ConfigSource {
    type Store: ConfigStore;

    fn snapshot(&self) -> Self::Store;
}

pub type ChangeCallback = Box<dyn Fn(&ConfigChange) + Send + 'static>;

/// Delivers committed configuration changes.
pub trait ChangeNotifier {
    fn subscribe(&self, on_change: ChangeCallback) -> Result<Subscription, ExportError>;
}

/// Keeps a subscription alive. Dropping it unsubscribes.
pub struct Subscription {
    _guard: Box<dyn Send>,
}

impl Subscription {
    pub fn new(guard: impl Send + 'static) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Outcome of every target in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub outcomes: Vec<(PathBuf, TargetOutcome)>,
}

impl PassReport {
    pub fn count(&self, wanted: fn(&TargetOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|(_, o)| wanted(o)).count()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Written))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, TargetOutcome::Failed(_)))
    }
}

/// Whether `change` touches the color scheme or accent color.
pub fn is_relevant(change: &ConfigChange) -> bool {
    change.group == WATCHED_GROUP && WATCHED_KEYS.iter().any(|k| change.keys.contains(*k))
}

pub struct ChangeGate<S> {
    source: S,
    targets: Vec<OutputTarget>,
    in_flight: Mutex<()>,
}

impl<S: ConfigSource> ChangeGate<S> {
    pub fn new(source: S, targets: Vec<OutputTarget>) -> Self {
        Self {
            source,
            targets,
            in_flight: Mutex::new(()),
        }
    }

    pub fn targets(&self) -> &[OutputTarget] {
        &self.targets
    }

    /// Run the initial pass, then subscribe to `notifier` for relevant changes.
    pub fn start<N: ChangeNotifier>(
        self,
        notifier: &N,
    ) -> Result<(Arc<Self>, Subscription), ExportError>
    where
        S: Send + Sync + 'static,
    {
        let gate = Arc::new(self);
        gate.run_pass();

        let listener = Arc::clone(&gate);
        let subscription = notifier.subscribe(Box::new(move |change| {
            listener.on_change(change);
        }))?;
        Ok((gate, subscription))
    }

    /// Run a pass if `change` is relevant.
    pub fn on_change(&self, change: &ConfigChange) -> Option<PassReport> {
        if !is_relevant(change) {
            debug!(group = %change.group, keys = ?change.keys, "ignoring config change");
            return None;
        }
        info!(keys = ?change.keys, "color scheme changed");
        Some(self.run_pass())
    }

    /// Resolve both mappings from one snapshot and write every target.
    ///
    /// Passes are serialized; a pass started while another runs waits for it.
    pub fn run_pass(&self) -> PassReport {
        let _guard = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let store = self.source.snapshot();
        let general = resolve_general(&store);
        let secondary = resolve_secondary(&store);

        let outcomes = self
            .targets
            .iter()
            .map(|target| {
                let mapping = match target.mapping {
                    MappingKind::General => &general,
                    MappingKind::Secondary => &secondary,
                };
                (target.path.clone(), emit(target, mapping))
            })
            .collect();
        let report = PassReport { outcomes };

        info!(
            written = report.written(),
            skipped = report.skipped(),
            failed = report.failed(),
            "theme files exported"
        );
        report
    }
}
