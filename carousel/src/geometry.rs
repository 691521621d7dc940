use crate::Transition;

/// Pixel geometry of one carousel mount.
///
/// Built once from the sampled viewport width; it does not follow later resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    viewport_width: f32,
    item_width_px: f32,
}

impl Geometry {
    /// Converts a logical `item_width` into pixels: `item_width / design_width * viewport_width`.
    pub fn new(item_width: f32, design_width: f32, viewport_width: f32) -> Self {
        let item_width_px = if design_width > 0.0 {
            item_width / design_width * viewport_width
        } else {
            0.0
        };
        Self {
            viewport_width,
            item_width_px,
        }
    }

    /// Geometry where one item is exactly `item_width_px` wide.
    pub fn from_pixels(item_width_px: f32) -> Self {
        Self {
            viewport_width: item_width_px,
            item_width_px,
        }
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn item_width_px(&self) -> f32 {
        self.item_width_px
    }

    /// Width of the leading spacer that puts the window at its place in the full strip.
    pub fn placeholder_width(&self, min_index: usize) -> f32 {
        min_index as f32 * self.item_width_px
    }

    /// Container translation that puts `index` at the visible origin, plus the live drag.
    pub fn translation(&self, index: usize, min_index: usize, live_offset: f32) -> f32 {
        debug_assert!(index >= min_index, "current index precedes the window");
        let in_window = index.saturating_sub(min_index) as f32 * self.item_width_px;
        -(self.placeholder_width(min_index) + in_window) + live_offset
    }
}

/// Transitions are suppressed while dragging and before first paint settles.
pub fn transition_for(is_dragging: bool, initializing: bool, duration_ms: u64) -> Transition {
    if is_dragging || initializing {
        Transition::None
    } else {
        Transition::EaseOut { duration_ms }
    }
}
