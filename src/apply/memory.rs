use crate::{
    apply::output::{Anchors, LayoutContainer, LayoutPadding, UiRoot},
    foundation::core::Size,
};

/// In-memory layout container that records what it was told.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Last padding written.
    pub padding: LayoutPadding,
    /// Number of rebuild requests received.
    pub rebuilds: u32,
}

impl LayoutContainer for MemoryLayout {
    fn set_padding(&mut self, padding: LayoutPadding) {
        self.padding = padding;
    }

    fn mark_for_rebuild(&mut self) {
        self.rebuilds += 1;
    }
}

/// In-memory UI root, used by the replay driver and by hosts without a scene graph.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryRoot {
    /// Logical canvas size.
    pub logical_size: Size,
    /// Current anchor bounds.
    pub anchors: Anchors,
    /// Number of anchor writes received.
    pub anchor_writes: u32,
    /// Attached layout container.
    pub layout: Option<MemoryLayout>,
}

impl MemoryRoot {
    /// Root without a layout container.
    pub fn new(logical_size: Size) -> Self {
        Self {
            logical_size,
            anchors: Anchors::FULL,
            anchor_writes: 0,
            layout: None,
        }
    }

    /// Root with an empty layout container attached.
    pub fn with_layout(logical_size: Size) -> Self {
        Self {
            layout: Some(MemoryLayout::default()),
            ..Self::new(logical_size)
        }
    }
}

impl UiRoot for MemoryRoot {
    fn logical_size(&self) -> Size {
        self.logical_size
    }

    fn set_anchors(&mut self, anchors: Anchors) {
        self.anchors = anchors;
        self.anchor_writes += 1;
    }

    fn layout_container(&mut self) -> Option<&mut dyn LayoutContainer> {
        self.layout.as_mut().map(|l| l as &mut dyn LayoutContainer)
    }
}
