#[cfg(feature = "std")]
#[doc(hidden)]
pub trait ItemKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ItemKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait ItemKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ItemKey for K {}

/// An item with a stable identity, used as the render key of its slot.
///
/// The core never looks at anything else on the item.
pub trait CarouselItem {
    type Key: ItemKey;

    fn key(&self) -> Self::Key;
}
