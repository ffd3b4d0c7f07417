use crate::{
    foundation::core::Rect,
    screen::state::{ScreenOrientation, ScreenState},
};

/// Scale the edge facing the device's physical bottom by `factor`.
///
/// No-op unless the screen is flagged for correction and `factor != 1`. Portrait and
/// landscape-right scale the edge's distance from the origin; upside-down and
/// landscape-left scale its distance from the far screen edge.
pub fn apply_cutout_correction(rect: Rect, screen: &ScreenState, factor: f64) -> Rect {
    if !screen.needs_cutout_correction || factor == 1.0 {
        return rect;
    }

    let w = screen.width_px();
    let h = screen.height_px();
    let mut r = rect;
    match screen.orientation {
        ScreenOrientation::Portrait => r.y0 *= factor,
        ScreenOrientation::PortraitUpsideDown => r.y1 = h - (h - r.y1) * factor,
        ScreenOrientation::LandscapeRight => r.x0 *= factor,
        ScreenOrientation::LandscapeLeft => r.x1 = w - (w - r.x1) * factor,
        ScreenOrientation::Unknown => {}
    }
    r
}

#[cfg(test)]
#[path = "../../tests/unit/solve/correction.rs"]
mod tests;
