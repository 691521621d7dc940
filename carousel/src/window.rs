use crate::WindowRange;

/// One materialized slot: an item together with its absolute position in the full list.
#[derive(Debug)]
pub struct WindowItem<'a, T> {
    pub index: usize,
    pub item: &'a T,
}

impl<T> Clone for WindowItem<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WindowItem<'_, T> {}

/// The materialized neighbourhood of the current index: at most previous, current and next.
///
/// Borrows the list; building one never allocates.
#[derive(Debug)]
pub struct Window<'a, T> {
    items: &'a [T],
    min_index: usize,
}

impl<T> Clone for Window<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Window<'_, T> {}

impl<'a, T> Window<'a, T> {
    /// Absolute index of the first materialized item (0 for an empty list).
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    /// Absolute index of the last materialized item.
    pub fn max_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.min_index + self.items.len() - 1)
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn range(&self) -> WindowRange {
        WindowRange {
            start_index: self.min_index,
            end_index: self.min_index + self.items.len(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(index)
    }

    /// Looks up a materialized item by its absolute index.
    pub fn get(&self, index: usize) -> Option<WindowItem<'a, T>> {
        let offset = index.checked_sub(self.min_index)?;
        let item = self.items.get(offset)?;
        Some(WindowItem { index, item })
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn iter(self) -> impl ExactSizeIterator<Item = WindowItem<'a, T>> + 'a {
        let min_index = self.min_index;
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| WindowItem {
                index: min_index + i,
                item,
            })
    }
}

/// Computes the window bounds for `index` over a list of `count` items.
///
/// Out-of-range indexes are clamped to the last item. Returns an empty range when
/// `count == 0`.
pub fn window_range(index: usize, count: usize) -> WindowRange {
    if count == 0 {
        return WindowRange::default();
    }
    let last = count - 1;
    let index = index.min(last);
    let start_index = index.saturating_sub(1);
    let end_index = index.saturating_add(1).min(last) + 1;
    WindowRange {
        start_index,
        end_index,
    }
}

/// Computes the materialized window for `index` over `list`.
///
/// O(1) regardless of the list length: the result is a sub-slice of `list`.
pub fn compute_window<T>(index: usize, list: &[T]) -> Window<'_, T> {
    let range = window_range(index, list.len());
    let items = &list[range.start_index..range.end_index];
    debug_assert!(items.len() <= 3, "window exceeded three items");
    Window {
        items,
        min_index: range.start_index,
    }
}
