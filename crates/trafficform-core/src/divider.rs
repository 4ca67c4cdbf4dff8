//! Drag state for the divider between the map panel and the tabs panel.
//!
//! The dragging flag lives on the handler value itself; two dividers never
//! share it.

/// Fixed strip below the tabs panel, in px.
pub const FOOTER_PX: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub map_height_px: u32,
    pub tabs_height_css: String,
}

impl PanelLayout {
    fn for_map_height(map_height_px: u32) -> Self {
        Self {
            map_height_px,
            tabs_height_css: format!("calc(100vh - {}px - {}px)", map_height_px, FOOTER_PX),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResizeDivider {
    container_offset_top: i32,
    viewport_height: u32,
    dragging: bool,
}

impl ResizeDivider {
    pub fn new(container_offset_top: i32, viewport_height: u32) -> Self {
        Self {
            container_offset_top,
            viewport_height,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn set_viewport_height(&mut self, viewport_height: u32) {
        self.viewport_height = viewport_height;
    }

    /// New layout for a pointer at `pointer_y`, or `None` when no drag is active.
    /// The map height is clamped to `0..=viewport - footer`.
    pub fn drag_to(&self, pointer_y: i32) -> Option<PanelLayout> {
        if !self.dragging {
            return None;
        }
        let max = self.viewport_height.saturating_sub(FOOTER_PX) as i64;
        let wanted = pointer_y as i64 - self.container_offset_top as i64;
        let height = wanted.clamp(0, max) as u32;
        Some(PanelLayout::for_map_height(height))
    }
}
