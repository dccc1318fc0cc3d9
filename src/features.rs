//! Deferred registration against host features
//!
//! A keybinding can target a context whose defining feature has not loaded
//! yet. `FeatureBus` is the callback registry bridging that gap: the
//! installer queues a bind action per feature, and the host reports load
//! events (or, on legacy hosts, per-instance creation events) that make the
//! queued actions run.

use std::collections::{HashMap, HashSet};
use std::fmt;

use anyhow::Result;
use serde::Deserialize;

use crate::keymap::KeymapRegistry;

/// Identifier naming a loadable host feature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A deferred keymap mutation
///
/// Errors from an action are the caller's (ultimately the host's) to report;
/// nothing in this module catches them.
pub type BindAction = Box<dyn FnMut(&mut KeymapRegistry) -> Result<()>>;

/// Callback registry for "run this once feature X is available"
///
/// Hosts that can announce feature loads construct the bus with
/// [`FeatureBus::new`]. Legacy hosts that only signal the creation of
/// individual context instances use [`FeatureBus::legacy`]; registrants
/// check [`FeatureBus::supports_load_notifications`] and attach per-instance
/// hooks instead.
pub struct FeatureBus {
    supports_load_notifications: bool,
    loaded: HashSet<FeatureId>,
    pending: HashMap<FeatureId, Vec<BindAction>>,
    instance_hooks: HashMap<FeatureId, Vec<BindAction>>,
}

impl FeatureBus {
    /// Bus for hosts with load notifications
    pub fn new() -> Self {
        Self {
            supports_load_notifications: true,
            loaded: HashSet::new(),
            pending: HashMap::new(),
            instance_hooks: HashMap::new(),
        }
    }

    /// Bus for legacy hosts that only signal context-instance creation
    pub fn legacy() -> Self {
        Self {
            supports_load_notifications: false,
            ..Self::new()
        }
    }

    pub fn supports_load_notifications(&self) -> bool {
        self.supports_load_notifications
    }

    pub fn is_loaded(&self, feature: &FeatureId) -> bool {
        self.loaded.contains(feature)
    }

    /// Queue `action` to run when `feature` becomes available
    ///
    /// If the feature already loaded, the action runs right away, since
    /// "once available" is already true.
    pub fn notify_on_load(
        &mut self,
        feature: FeatureId,
        keymaps: &mut KeymapRegistry,
        mut action: BindAction,
    ) -> Result<()> {
        if self.loaded.contains(&feature) {
            tracing::debug!("feature {} already loaded, running action now", feature);
            return action(keymaps);
        }

        tracing::debug!("queued action until feature {} loads", feature);
        self.pending.entry(feature).or_default().push(action);
        Ok(())
    }

    /// Attach `action` to run on every new instance of `feature`'s context
    ///
    /// The legacy registration strategy; actions must tolerate re-running.
    pub fn on_instance_created(&mut self, feature: FeatureId, action: BindAction) {
        tracing::debug!("hooked action to instance creation for {}", feature);
        self.instance_hooks.entry(feature).or_default().push(action);
    }

    /// Host signal: `feature` finished loading
    ///
    /// Runs and discards every action queued for it. An action's error is
    /// returned as-is for the host's top-level reporting; actions after a
    /// failing one do not run.
    pub fn feature_loaded(&mut self, feature: &FeatureId, keymaps: &mut KeymapRegistry) -> Result<()> {
        self.loaded.insert(feature.clone());

        if let Some(actions) = self.pending.remove(feature) {
            tracing::debug!("feature {} loaded, running {} action(s)", feature, actions.len());
            for mut action in actions {
                action(keymaps)?;
            }
        }

        Ok(())
    }

    /// Host signal (legacy): a new instance of `feature`'s context exists
    ///
    /// Re-runs every hook attached for the feature.
    pub fn instance_created(&mut self, feature: &FeatureId, keymaps: &mut KeymapRegistry) -> Result<()> {
        if let Some(hooks) = self.instance_hooks.get_mut(feature) {
            for hook in hooks.iter_mut() {
                hook(keymaps)?;
            }
        }

        Ok(())
    }

    /// Number of actions still waiting on unloaded features
    pub fn pending_actions(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }
}

impl Default for FeatureBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_action(counter: &Rc<Cell<usize>>) -> BindAction {
        let counter = Rc::clone(counter);
        Box::new(move |_keymaps| {
            counter.set(counter.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn test_action_waits_for_load() {
        let mut bus = FeatureBus::new();
        let mut keymaps = KeymapRegistry::new();
        let runs = Rc::new(Cell::new(0));

        bus.notify_on_load("shell".into(), &mut keymaps, counting_action(&runs))
            .unwrap();
        assert_eq!(runs.get(), 0);
        assert_eq!(bus.pending_actions(), 1);

        bus.feature_loaded(&"shell".into(), &mut keymaps).unwrap();
        assert_eq!(runs.get(), 1);
        assert_eq!(bus.pending_actions(), 0);
    }

    #[test]
    fn test_action_runs_once_per_load_registration() {
        let mut bus = FeatureBus::new();
        let mut keymaps = KeymapRegistry::new();
        let runs = Rc::new(Cell::new(0));

        bus.notify_on_load("shell".into(), &mut keymaps, counting_action(&runs))
            .unwrap();
        bus.feature_loaded(&"shell".into(), &mut keymaps).unwrap();
        bus.feature_loaded(&"shell".into(), &mut keymaps).unwrap();

        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_already_loaded_runs_immediately() {
        let mut bus = FeatureBus::new();
        let mut keymaps = KeymapRegistry::new();
        let runs = Rc::new(Cell::new(0));

        bus.feature_loaded(&"shell".into(), &mut keymaps).unwrap();
        bus.notify_on_load("shell".into(), &mut keymaps, counting_action(&runs))
            .unwrap();

        assert_eq!(runs.get(), 1);
        assert_eq!(bus.pending_actions(), 0);
    }

    #[test]
    fn test_unrelated_feature_does_not_fire() {
        let mut bus = FeatureBus::new();
        let mut keymaps = KeymapRegistry::new();
        let runs = Rc::new(Cell::new(0));

        bus.notify_on_load("shell".into(), &mut keymaps, counting_action(&runs))
            .unwrap();
        bus.feature_loaded(&"repl".into(), &mut keymaps).unwrap();

        assert_eq!(runs.get(), 0);
        assert_eq!(bus.pending_actions(), 1);
    }

    #[test]
    fn test_instance_hook_reruns_per_instance() {
        let mut bus = FeatureBus::legacy();
        let mut keymaps = KeymapRegistry::new();
        let runs = Rc::new(Cell::new(0));

        assert!(!bus.supports_load_notifications());
        bus.on_instance_created("term".into(), counting_action(&runs));

        bus.instance_created(&"term".into(), &mut keymaps).unwrap();
        bus.instance_created(&"term".into(), &mut keymaps).unwrap();

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_action_error_propagates() {
        let mut bus = FeatureBus::new();
        let mut keymaps = KeymapRegistry::new();

        bus.notify_on_load(
            "shell".into(),
            &mut keymaps,
            Box::new(|_| Err(anyhow!("keymap 'shell' is not registered"))),
        )
        .unwrap();

        let err = bus.feature_loaded(&"shell".into(), &mut keymaps);
        assert!(err.is_err());
    }
}
