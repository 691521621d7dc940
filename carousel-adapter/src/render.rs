use alloc::vec::Vec;

use virtual_carousel::{Carousel, CarouselItem, Transition};

/// One materialized, keyed slot ready for the host renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Slot<K, R> {
    /// Stable render key taken from the item.
    pub key: K,
    /// Absolute index in the full list.
    pub index: usize,
    pub width: f32,
    pub content: R,
}

/// Everything a host needs to draw one frame of the carousel.
///
/// Layout: a spacer `placeholder_width` wide followed by `slots`, all inside a container
/// translated by `translation` and styled with `transition`.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutput<K, R> {
    pub placeholder_width: f32,
    pub translation: f32,
    pub transition: Transition,
    pub slots: Vec<Slot<K, R>>,
}

/// Renders the carousel's window, calling `render_item(item, index)` once per
/// materialized item.
pub fn render<T: CarouselItem, R>(
    carousel: &Carousel<T>,
    render_item: impl FnMut(&T, usize) -> R,
) -> RenderOutput<T::Key, R> {
    render_with_translation(carousel, carousel.translation(), render_item)
}

pub(crate) fn render_with_translation<T: CarouselItem, R>(
    carousel: &Carousel<T>,
    translation: f32,
    mut render_item: impl FnMut(&T, usize) -> R,
) -> RenderOutput<T::Key, R> {
    let window = carousel.window();
    let width = carousel.item_width_px();
    let mut slots = Vec::with_capacity(window.len());
    for slot in window.iter() {
        slots.push(Slot {
            key: slot.item.key(),
            index: slot.index,
            width,
            content: render_item(slot.item, slot.index),
        });
    }
    RenderOutput {
        placeholder_width: carousel.geometry().placeholder_width(window.min_index()),
        translation,
        transition: carousel.transition(),
        slots,
    }
}
