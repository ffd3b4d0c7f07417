pub use kurbo::{Point, Rect, Size};

/// Four independent edge offsets, in UI-logical units.
///
/// Used for both the extra padding applied inside the safe area and the minimum
/// clearance kept from each screen edge. Equality is by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectOffset {
    /// Left edge offset.
    #[serde(default)]
    pub left: f64,
    /// Right edge offset.
    #[serde(default)]
    pub right: f64,
    /// Top edge offset.
    #[serde(default)]
    pub top: f64,
    /// Bottom edge offset.
    #[serde(default)]
    pub bottom: f64,
}

impl RectOffset {
    /// All four offsets set to zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build an offset from `(left, right, top, bottom)`.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same offset on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// `left + right`.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn edges(self) -> [(&'static str, f64); 4] {
        [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
