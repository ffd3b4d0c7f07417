use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::RectOffset;
use crate::foundation::error::{SafeAreaError, SafeAreaResult};

/// Default cosmetic correction factor for devices that over-report their cutout.
pub const DEFAULT_CUTOUT_CORRECTION: f64 = 0.417;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the resolved safe rectangle is written back to the UI root.
pub enum OutputMode {
    /// Resolve the rectangle and notify observers, but touch nothing.
    #[default]
    Disabled,
    /// Write the rectangle as normalized anchor bounds on the UI root.
    Anchor,
    /// Write the rectangle as integer padding on the root's layout container.
    Padding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Per-edge switches. A disabled edge is pushed back out to the screen border.
pub struct EdgeToggles {
    /// Respect the safe area on the left edge.
    #[serde(default = "enabled")]
    pub left: bool,
    /// Respect the safe area on the right edge.
    #[serde(default = "enabled")]
    pub right: bool,
    /// Respect the safe area on the top edge.
    #[serde(default = "enabled")]
    pub top: bool,
    /// Respect the safe area on the bottom edge.
    #[serde(default = "enabled")]
    pub bottom: bool,
}

impl EdgeToggles {
    /// Every edge enabled.
    pub const ALL: Self = Self {
        left: true,
        right: true,
        top: true,
        bottom: true,
    };

    /// Every edge disabled.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        top: false,
        bottom: false,
    };
}

impl Default for EdgeToggles {
    fn default() -> Self {
        Self::ALL
    }
}

fn enabled() -> bool {
    true
}

fn default_cutout_correction() -> f64 {
    DEFAULT_CUTOUT_CORRECTION
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Adjuster configuration.
///
/// All fields are plain values; the adjuster compares the whole struct against the
/// previous tick's copy, so editing any field triggers a re-apply on the next tick.
pub struct SafeAreaConfig {
    /// Output target for the resolved rectangle.
    #[serde(default)]
    pub mode: OutputMode,
    /// Which edges respect the safe area.
    #[serde(default)]
    pub edges: EdgeToggles,
    /// Extra inset applied inside the safe area, in UI-logical units.
    #[serde(default)]
    pub padding: RectOffset,
    /// Minimum clearance from each screen edge, in UI-logical units.
    #[serde(default)]
    pub min_border: RectOffset,
    /// Cosmetic factor applied to one edge on devices flagged for cutout correction.
    #[serde(default = "default_cutout_correction")]
    pub cutout_correction: f64,
}

impl Default for SafeAreaConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            edges: EdgeToggles::default(),
            padding: RectOffset::ZERO,
            min_border: RectOffset::ZERO,
            cutout_correction: DEFAULT_CUTOUT_CORRECTION,
        }
    }
}

impl SafeAreaConfig {
    /// Default configuration with the given output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> SafeAreaResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| SafeAreaError::serde(format!("parse safe-area config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> SafeAreaResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SafeAreaError::serde(format!("parse safe-area config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> SafeAreaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SafeAreaError::validation(format!("open safe-area config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the solver cannot work with.
    pub fn validate(&self) -> SafeAreaResult<()> {
        for (group, offset) in [("padding", self.padding), ("min_border", self.min_border)] {
            for (edge, value) in offset.edges() {
                if !value.is_finite() {
                    return Err(SafeAreaError::validation(format!(
                        "{group}.{edge} must be finite"
                    )));
                }
            }
        }
        if !self.cutout_correction.is_finite() || self.cutout_correction <= 0.0 {
            return Err(SafeAreaError::validation(
                "cutout_correction must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
