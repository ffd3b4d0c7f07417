use crate::{
    apply::output::{AppliedOutput, UiRoot, apply_output},
    config::model::SafeAreaConfig,
    foundation::core::Rect,
    foundation::error::SafeAreaResult,
    screen::state::{ScreenSource, ScreenState},
    solve::rect::resolve_safe_rect,
};

/// Change notification emitted when a tick actually re-applied the safe area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SafeAreaChanged {
    /// Resolved safe rectangle in screen pixels.
    pub rect: Rect,
    /// What was written to the UI root.
    pub applied: AppliedOutput,
}

#[derive(Clone, Debug, PartialEq)]
struct InputSnapshot {
    screen: ScreenState,
    config: SafeAreaConfig,
}

type Observer = Box<dyn FnMut(&SafeAreaChanged)>;

/// Per-frame safe-area driver for one UI root.
///
/// Call [`SafeAreaAdjuster::evaluate`] (or [`SafeAreaAdjuster::tick`]) once per frame.
/// Work only happens when the screen state or the configuration differs from the
/// previous tick; identical frames are no-ops.
pub struct SafeAreaAdjuster {
    config: SafeAreaConfig,
    last: Option<InputSnapshot>,
    enabled: bool,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for SafeAreaAdjuster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SafeAreaAdjuster")
            .field("config", &self.config)
            .field("last", &self.last)
            .field("enabled", &self.enabled)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for SafeAreaAdjuster {
    fn default() -> Self {
        Self::new(SafeAreaConfig::default())
    }
}

impl SafeAreaAdjuster {
    /// New, enabled adjuster. The first tick always applies.
    pub fn new(config: SafeAreaConfig) -> Self {
        Self {
            config,
            last: None,
            enabled: true,
            observers: Vec::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SafeAreaConfig {
        &self.config
    }

    /// Mutable configuration; edits are picked up on the next tick.
    pub fn config_mut(&mut self) -> &mut SafeAreaConfig {
        &mut self.config
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: SafeAreaConfig) {
        self.config = config;
    }

    /// Whether ticks are processed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Re-enable after [`SafeAreaAdjuster::disable`] or a fatal error; the next tick re-applies.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.last = None;
    }

    /// Stop processing ticks.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Register an observer for [`SafeAreaChanged`] notifications.
    pub fn subscribe(&mut self, observer: impl FnMut(&SafeAreaChanged) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Query `source` and evaluate one frame.
    pub fn tick<S, R>(
        &mut self,
        source: &S,
        root: &mut R,
    ) -> SafeAreaResult<Option<SafeAreaChanged>>
    where
        S: ScreenSource + ?Sized,
        R: UiRoot + ?Sized,
    {
        self.evaluate(&source.screen_state(), root)
    }

    /// Evaluate one frame against `screen`, applying to `root` if anything changed.
    ///
    /// Returns the change notification when the safe area was re-applied, `None` when
    /// the tick was a no-op. A padding-mode tick on a root without a layout container
    /// disables the adjuster and returns [`crate::SafeAreaError::MissingLayoutContainer`].
    #[tracing::instrument(skip(self, root), fields(mode = ?self.config.mode))]
    pub fn evaluate<R: UiRoot + ?Sized>(
        &mut self,
        screen: &ScreenState,
        root: &mut R,
    ) -> SafeAreaResult<Option<SafeAreaChanged>> {
        if !self.enabled {
            tracing::trace!("adjuster disabled, skipping tick");
            return Ok(None);
        }
        if screen.is_degenerate() {
            tracing::trace!("screen has no area yet, skipping tick");
            return Ok(None);
        }

        let snapshot = InputSnapshot {
            screen: *screen,
            config: self.config.clone(),
        };
        if self.last.as_ref() == Some(&snapshot) {
            return Ok(None);
        }
        self.last = Some(snapshot);

        let rect = resolve_safe_rect(screen, root.logical_size(), &self.config);
        let applied = match apply_output(rect, screen, self.config.mode, root) {
            Ok(applied) => applied,
            Err(err) => {
                self.enabled = false;
                tracing::error!(error = %err, "disabling safe-area adjuster");
                return Err(err);
            }
        };

        let change = SafeAreaChanged { rect, applied };
        tracing::debug!(?rect, ?applied, "safe area applied");
        for observer in &mut self.observers {
            observer(&change);
        }
        Ok(Some(change))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/adjust/adjuster.rs"]
mod tests;
