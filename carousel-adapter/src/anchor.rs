use core::fmt;

use virtual_carousel::{Carousel, CarouselItem};

/// A current-item anchor that survives list replacement.
///
/// Typical use cases:
/// - prepending older items in front of the current one without the carousel jumping
/// - any reorder/replace where the same item should stay on screen
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexAnchor<K> {
    pub key: K,
    /// The index the keyed item had when the anchor was captured.
    pub index: usize,
}

impl<K: fmt::Debug> fmt::Debug for IndexAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexAnchor")
            .field("key", &self.key)
            .field("index", &self.index)
            .finish()
    }
}

/// Captures an anchor for the current item (by key).
///
/// Returns `None` if the list is empty.
pub fn capture_current_anchor<T: CarouselItem>(
    carousel: &Carousel<T>,
) -> Option<IndexAnchor<T::Key>> {
    let index = carousel.current_index()?;
    let key = carousel.item(index)?.key();
    Some(IndexAnchor { key, index })
}

/// Applies a previously captured anchor by repositioning onto the keyed item.
///
/// The adapter must provide a `key_to_index` mapping for the *current* list. The move is
/// silent (no `on_change`): an uncontrolled carousel repositions itself, a controlled one is
/// left alone and the host should adopt the returned index.
///
/// Returns `None` when the key is gone or the mapping points at a different item.
pub fn apply_anchor<T: CarouselItem>(
    carousel: &mut Carousel<T>,
    anchor: &IndexAnchor<T::Key>,
    mut key_to_index: impl FnMut(&T::Key) -> Option<usize>,
) -> Option<usize> {
    let index = key_to_index(&anchor.key)?;
    if carousel.item(index)?.key() != anchor.key {
        return None;
    }
    carousel.jump_to(index)
}

/// Linear key lookup, for callers without their own key index.
pub fn find_key_index<T: CarouselItem>(list: &[T], key: &T::Key) -> Option<usize> {
    list.iter().position(|item| item.key() == *key)
}
