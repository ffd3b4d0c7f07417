use crate::{
    config::model::OutputMode,
    foundation::core::{Point, Rect, Size},
    foundation::error::{SafeAreaError, SafeAreaResult},
    screen::state::ScreenState,
    solve::rect::AxisScale,
};

/// Normalized placement of the UI root, each coordinate in `[0, 1]` of the screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchors {
    /// Bottom-left corner.
    pub min: Point,
    /// Top-right corner.
    pub max: Point,
}

impl Anchors {
    /// Anchors spanning the whole parent.
    pub const FULL: Self = Self {
        min: Point::ZERO,
        max: Point::new(1.0, 1.0),
    };

    /// Normalize a pixel rectangle by the screen size.
    pub fn from_rect(rect: Rect, screen: &ScreenState) -> Self {
        let w = screen.width_px();
        let h = screen.height_px();
        Self {
            min: Point::new(rect.x0 / w, rect.y0 / h),
            max: Point::new(rect.x1 / w, rect.y1 / h),
        }
    }
}

/// Integer insets written into a layout container, in UI-logical units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LayoutPadding {
    /// Left inset.
    pub left: i32,
    /// Right inset.
    pub right: i32,
    /// Top inset.
    pub top: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl LayoutPadding {
    /// Convert a pixel rectangle's distance from each screen edge back to logical units.
    ///
    /// Rounds half to even, like the layout engines this feeds.
    pub fn from_rect(rect: Rect, screen: &ScreenState, scale: AxisScale) -> Self {
        let w = screen.width_px();
        let h = screen.height_px();
        Self {
            top: round_to_i32((h - rect.y1) * scale.y),
            bottom: round_to_i32(rect.y0 * scale.y),
            left: round_to_i32(rect.x0 * scale.x),
            right: round_to_i32((w - rect.x1) * scale.x),
        }
    }
}

fn round_to_i32(v: f64) -> i32 {
    // Saturating cast; NaN maps to 0.
    v.round_ties_even() as i32
}

/// What the adjuster wrote to the UI root on a given tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AppliedOutput {
    /// Output mode was [`OutputMode::Disabled`].
    None,
    /// Anchor bounds written to the root.
    Anchors(Anchors),
    /// Padding written to the root's layout container.
    Padding(LayoutPadding),
}

/// A layout container that arranges the root's children inside an inset.
pub trait LayoutContainer {
    /// Replace the container's padding.
    fn set_padding(&mut self, padding: LayoutPadding);

    /// Ask the host to recompute layout for this container.
    fn mark_for_rebuild(&mut self);
}

/// The UI root the safe area is applied to.
pub trait UiRoot {
    /// Logical size of the root canvas (the space padding and borders are expressed in).
    fn logical_size(&self) -> Size;

    /// Set the root's normalized anchor bounds.
    fn set_anchors(&mut self, anchors: Anchors);

    /// The layout container attached to the root, if any.
    fn layout_container(&mut self) -> Option<&mut dyn LayoutContainer>;
}

/// Write `rect` to `root` according to `mode`.
pub fn apply_output<R: UiRoot + ?Sized>(
    rect: Rect,
    screen: &ScreenState,
    mode: OutputMode,
    root: &mut R,
) -> SafeAreaResult<AppliedOutput> {
    match mode {
        OutputMode::Disabled => Ok(AppliedOutput::None),
        OutputMode::Anchor => {
            let anchors = Anchors::from_rect(rect, screen);
            root.set_anchors(anchors);
            Ok(AppliedOutput::Anchors(anchors))
        }
        OutputMode::Padding => {
            let scale = AxisScale::between(root.logical_size(), screen);
            let container = root
                .layout_container()
                .ok_or(SafeAreaError::MissingLayoutContainer)?;
            let padding = LayoutPadding::from_rect(rect, screen, scale);
            container.set_padding(padding);
            container.mark_for_rebuild();
            Ok(AppliedOutput::Padding(padding))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apply/output.rs"]
mod tests;
