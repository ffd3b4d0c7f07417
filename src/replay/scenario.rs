use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    adjust::adjuster::{SafeAreaAdjuster, SafeAreaChanged},
    apply::memory::MemoryRoot,
    config::model::SafeAreaConfig,
    foundation::core::Size,
    foundation::error::{SafeAreaError, SafeAreaResult},
    screen::state::ScreenState,
};

fn default_layout_container() -> bool {
    true
}

/// A recorded sequence of screen states to drive an adjuster through.
///
/// Scenarios are the JSON-facing way to reproduce rotation, notch and resize
/// sequences without a host UI.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    /// Adjuster configuration.
    #[serde(default)]
    pub config: SafeAreaConfig,
    /// Logical size of the UI root.
    pub root_size: Size,
    /// Whether the root carries a layout container.
    #[serde(default = "default_layout_container")]
    pub layout_container: bool,
    /// One screen state per frame.
    pub frames: Vec<ScreenState>,
}

/// Outcome of one replayed frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameReport {
    /// 0-based frame index within the scenario.
    pub frame: u64,
    /// Change notification, if the frame re-applied the safe area.
    pub change: Option<SafeAreaChanged>,
}

impl Scenario {
    /// Parse a scenario from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> SafeAreaResult<Self> {
        let s: Self = serde_json::from_reader(r)
            .map_err(|e| SafeAreaError::serde(format!("parse scenario JSON: {e}")))?;
        s.validate()?;
        Ok(s)
    }

    /// Parse a scenario from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> SafeAreaResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SafeAreaError::validation(format!("open scenario JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate the configuration, root size and frame rectangles.
    pub fn validate(&self) -> SafeAreaResult<()> {
        self.config.validate()?;
        if !(self.root_size.width.is_finite() && self.root_size.width > 0.0)
            || !(self.root_size.height.is_finite() && self.root_size.height > 0.0)
        {
            return Err(SafeAreaError::validation(
                "root_size width/height must be finite and > 0",
            ));
        }
        for (idx, frame) in self.frames.iter().enumerate() {
            let r = frame.safe_area;
            if ![r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite()) {
                return Err(SafeAreaError::validation(format!(
                    "frame {idx}: safe_area must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Run `scenario` through a fresh adjuster over an in-memory root, one tick per frame.
///
/// Stops at the first error (a padding-mode scenario without a layout container).
#[tracing::instrument(skip(scenario), fields(frames = scenario.frames.len()))]
pub fn replay(scenario: &Scenario) -> SafeAreaResult<Vec<FrameReport>> {
    let mut root = if scenario.layout_container {
        MemoryRoot::with_layout(scenario.root_size)
    } else {
        MemoryRoot::new(scenario.root_size)
    };
    let mut adjuster = SafeAreaAdjuster::new(scenario.config.clone());

    let mut out = Vec::with_capacity(scenario.frames.len());
    for (idx, screen) in scenario.frames.iter().enumerate() {
        let change = adjuster.evaluate(screen, &mut root)?;
        out.push(FrameReport {
            frame: idx as u64,
            change,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/replay/scenario.rs"]
mod tests;
