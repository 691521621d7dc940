/// A touch position in host client coordinates (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The per-gesture axis decision.
///
/// Starts as `Undecided` on touch start and is locked at most once per gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisLock {
    #[default]
    Undecided,
    Horizontal,
    Vertical,
}

/// What a touch-move did to the carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// No gesture is in progress; the event was ignored.
    Idle,
    /// The movement has not yet crossed the axis-lock slop.
    Undecided,
    /// The gesture is a horizontal swipe; the carousel tracks it with this live offset.
    Tracking(f32),
    /// The gesture was locked vertical; hosts should let their scroll view handle it.
    PassThrough,
}

impl MoveOutcome {
    /// Whether the host should treat the event as consumed by the carousel.
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Tracking(_))
    }
}

/// How a gesture (or a programmatic navigation) settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// The current index moved from `previous` to `current`.
    Committed { previous: usize, current: usize },
    /// The carousel snapped back; the current index is unchanged.
    Reverted,
}

impl Resolution {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    /// The newly committed index, if any.
    pub fn committed_index(&self) -> Option<usize> {
        match self {
            Self::Committed { current, .. } => Some(*current),
            Self::Reverted => None,
        }
    }
}

/// Transition styling the host should apply to the window container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// Apply the translation instantly (dragging, or first paint).
    None,
    /// Animate `transform` with an ease-out curve.
    EaseOut { duration_ms: u64 },
}

impl Transition {
    pub fn duration_ms(&self) -> u64 {
        match self {
            Self::None => 0,
            Self::EaseOut { duration_ms } => *duration_ms,
        }
    }
}

/// An inclusive-exclusive index range over the full list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl WindowRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

#[inline]
pub(crate) fn abs_f32(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
