use crate::{
    config::model::{EdgeToggles, SafeAreaConfig},
    foundation::core::{Rect, RectOffset, Size},
    screen::state::ScreenState,
    solve::correction::apply_cutout_correction,
};

/// Ratio between the UI root's logical size and the physical screen, per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    /// `root.width / screen.width`.
    pub x: f64,
    /// `root.height / screen.height`.
    pub y: f64,
}

impl AxisScale {
    /// Logical and physical spaces coincide.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Scale from physical screen pixels to `root` logical units.
    ///
    /// An axis with no physical extent, or a root without a usable size on that
    /// axis, falls back to 1.
    pub fn between(root: Size, screen: &ScreenState) -> Self {
        Self {
            x: axis_ratio(root.width, screen.width_px()),
            y: axis_ratio(root.height, screen.height_px()),
        }
    }
}

fn axis_ratio(logical: f64, physical: f64) -> f64 {
    if physical <= 0.0 || !logical.is_finite() || logical <= 0.0 {
        return 1.0;
    }
    logical / physical
}

/// Clamp each edge to `min_border` and pull it inward by `padding`.
///
/// Both offsets are in logical units and are divided by the axis scale to land in
/// pixel space.
pub fn clamp_and_inset(
    rect: Rect,
    screen: &ScreenState,
    scale: AxisScale,
    padding: RectOffset,
    min_border: RectOffset,
) -> Rect {
    let w = screen.width_px();
    let h = screen.height_px();
    Rect {
        y1: rect.y1.min(h - min_border.top / scale.y) - padding.top / scale.y,
        y0: rect.y0.max(min_border.bottom / scale.y) + padding.bottom / scale.y,
        x1: rect.x1.min(w - min_border.right / scale.x) - padding.right / scale.x,
        x0: rect.x0.max(min_border.left / scale.x) + padding.left / scale.x,
    }
}

/// Push every disabled edge back out to the screen border.
pub fn reset_disabled_edges(rect: Rect, screen: &ScreenState, edges: EdgeToggles) -> Rect {
    let mut r = rect;
    if !edges.top {
        r.y1 = screen.height_px();
    }
    if !edges.bottom {
        r.y0 = 0.0;
    }
    if !edges.right {
        r.x1 = screen.width_px();
    }
    if !edges.left {
        r.x0 = 0.0;
    }
    r
}

/// Resolve the final safe rectangle for one tick, in screen pixels.
///
/// Order: cutout correction, clamp and inset, disabled-edge reset.
pub fn resolve_safe_rect(screen: &ScreenState, root_size: Size, config: &SafeAreaConfig) -> Rect {
    let corrected = apply_cutout_correction(screen.safe_area, screen, config.cutout_correction);
    let scale = AxisScale::between(root_size, screen);
    let inset = clamp_and_inset(corrected, screen, scale, config.padding, config.min_border);
    reset_disabled_edges(inset, screen, config.edges)
}

#[cfg(test)]
#[path = "../../tests/unit/solve/rect.rs"]
mod tests;
