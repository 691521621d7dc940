/// Who owns the current index.
///
/// Selected once at construction. A controlled source only mirrors what the host pushes via
/// [`crate::Carousel::sync_current`]; gestures request changes through the `on_change`
/// callback and never write it. An uncontrolled source is written by the carousel itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexSource {
    Controlled { current: usize },
    Uncontrolled { current: usize },
}

impl IndexSource {
    pub fn new(current: Option<usize>, default_current: usize) -> Self {
        match current {
            Some(current) => Self::Controlled { current },
            None => Self::Uncontrolled {
                current: default_current,
            },
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// The stored index, as given (may be out of range for a controlled source).
    pub fn raw(&self) -> usize {
        match *self {
            Self::Controlled { current } | Self::Uncontrolled { current } => current,
        }
    }

    /// The stored index clamped into `0..count`, or `None` for an empty list.
    pub fn resolve(&self, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        Some(self.raw().min(count - 1))
    }

    /// Records a committed index. Only an uncontrolled source changes.
    pub(crate) fn commit(&mut self, index: usize) {
        if let Self::Uncontrolled { current } = self {
            *current = index;
        }
    }

    /// Mirrors a host-pushed index. Returns `false` (and changes nothing) when uncontrolled.
    pub(crate) fn sync(&mut self, index: usize) -> bool {
        match self {
            Self::Controlled { current } => {
                *current = index;
                true
            }
            Self::Uncontrolled { .. } => false,
        }
    }

    /// Clamps an uncontrolled index into a list of `count` items.
    ///
    /// Controlled indexes belong to the host and are left untouched.
    pub(crate) fn reclamp(&mut self, count: usize) {
        if let Self::Uncontrolled { current } = self {
            *current = (*current).min(count.saturating_sub(1));
        }
    }
}
