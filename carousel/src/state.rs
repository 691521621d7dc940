use crate::{Transition, WindowRange};

/// A lightweight snapshot of everything a host needs to lay out one render.
///
/// The host draws a spacer of `placeholder_width`, then one `item_width_px` wide slot per
/// index in `window`, inside a container translated by `translation` with `transition`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The clamped current index, `None` for an empty list.
    pub current: Option<usize>,
    pub window: WindowRange,
    pub placeholder_width: f32,
    pub item_width_px: f32,
    pub translation: f32,
    pub is_dragging: bool,
    pub transition: Transition,
}
