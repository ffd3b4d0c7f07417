//! Safe-area resolution for UI roots.
//!
//! `safearea` turns the unobstructed rectangle reported by a device (the "safe area",
//! excluding notches, rounded corners and system bars) into placement for a UI root,
//! once per frame.
//!
//! # Pipeline overview
//!
//! 1. **Snapshot**: the host reports a [`ScreenState`] (safe rect, screen size,
//!    orientation, cutout-correction capability) through [`ScreenSource`].
//! 2. **Dirty check**: [`SafeAreaAdjuster`] compares the snapshot and its
//!    [`SafeAreaConfig`] with the previous tick; unchanged frames stop here.
//! 3. **Solve**: cutout correction, min-border clamping, padding inset and
//!    disabled-edge reset produce one pixel [`Rect`] ([`resolve_safe_rect`]).
//! 4. **Apply**: depending on [`OutputMode`], the rect becomes normalized
//!    [`Anchors`] on the [`UiRoot`] or integer [`LayoutPadding`] on its
//!    [`LayoutContainer`].
//! 5. **Notify**: observers receive a [`SafeAreaChanged`].
//!
//! Pixel space has its origin at the bottom-left with y growing upward.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No hidden scheduling**: the host decides when to tick.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod adjust;
mod apply;
mod config;
mod foundation;
mod replay;
mod screen;
mod solve;

pub use adjust::adjuster::{SafeAreaAdjuster, SafeAreaChanged};
pub use apply::memory::{MemoryLayout, MemoryRoot};
pub use apply::output::{
    Anchors, AppliedOutput, LayoutContainer, LayoutPadding, UiRoot, apply_output,
};
pub use config::model::{DEFAULT_CUTOUT_CORRECTION, EdgeToggles, OutputMode, SafeAreaConfig};
pub use foundation::core::{Point, Rect, RectOffset, Size};
pub use foundation::error::{SafeAreaError, SafeAreaResult};
pub use replay::scenario::{FrameReport, Scenario, replay};
pub use screen::state::{ScreenOrientation, ScreenSource, ScreenState};
pub use solve::correction::apply_cutout_correction;
pub use solve::rect::{AxisScale, clamp_and_inset, reset_disabled_edges, resolve_safe_rect};
