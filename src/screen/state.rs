use crate::foundation::core::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Physical screen orientation as reported by the host.
pub enum ScreenOrientation {
    /// Orientation not known yet (host still auto-rotating).
    #[default]
    Unknown,
    /// Device upright.
    Portrait,
    /// Device upside down.
    PortraitUpsideDown,
    /// Device rotated counter-clockwise; its physical bottom is on the right of the screen.
    LandscapeLeft,
    /// Device rotated clockwise; its physical bottom is on the left of the screen.
    LandscapeRight,
}

impl ScreenOrientation {
    /// `true` for both landscape variants.
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::LandscapeLeft | Self::LandscapeRight)
    }
}

/// Everything the adjuster reads from the host screen in one tick.
///
/// Pixel space has its origin at the bottom-left and y grows upward, so
/// `safe_area.y0` is the bottom edge and `safe_area.y1` the top edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenState {
    /// Unobstructed region reported by the device, in pixels.
    pub safe_area: Rect,
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
    /// Current orientation.
    #[serde(default)]
    pub orientation: ScreenOrientation,
    /// Host decided this device family over-reports its cutout and wants the cosmetic correction.
    #[serde(default)]
    pub needs_cutout_correction: bool,
}

impl ScreenState {
    /// A screen whose safe area covers the whole display.
    pub fn full(width: u32, height: u32, orientation: ScreenOrientation) -> Self {
        Self {
            safe_area: Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            width,
            height,
            orientation,
            needs_cutout_correction: false,
        }
    }

    /// Same screen with a different safe area.
    pub fn with_safe_area(self, safe_area: Rect) -> Self {
        Self { safe_area, ..self }
    }

    /// Screen width as `f64`.
    pub fn width_px(&self) -> f64 {
        f64::from(self.width)
    }

    /// Screen height as `f64`.
    pub fn height_px(&self) -> f64 {
        f64::from(self.height)
    }

    /// Full-screen rectangle in pixels.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width_px(), self.height_px())
    }

    /// A zero-sized screen has no meaningful safe area yet.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Host-side query for the current screen state.
pub trait ScreenSource {
    /// Snapshot the screen for this tick.
    fn screen_state(&self) -> ScreenState;
}

impl ScreenSource for ScreenState {
    fn screen_state(&self) -> ScreenState {
        *self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/screen/state.rs"]
mod tests;
