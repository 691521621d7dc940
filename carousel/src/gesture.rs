use crate::options::GestureConfig;
use crate::types::abs_f32;
use crate::{AxisLock, MoveOutcome, Point};

/// Transient state of one touch sequence, alive between touch start and release.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    pub origin: Point,
    pub origin_ms: u64,
    /// Live offset at the moment the drag (re)started.
    pub base_offset: f32,
    pub axis: AxisLock,
    /// Signed drag offset in pixels; negative pulls toward the next item.
    pub live_offset: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Where the current index sits in the list, for edge damping and release clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub index: usize,
    pub count: usize,
}

impl Bounds {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    fn is_first(&self) -> bool {
        self.index == 0
    }

    fn is_last(&self) -> bool {
        self.index.saturating_add(1) >= self.count
    }
}

/// The swipe state machine: `Idle -> Dragging -> Idle`.
///
/// Holds no list or index of its own. Every transition takes the current [`Bounds`] and
/// tuning, so the machine is a plain function of the events fed to it. Touch-move is O(1) and
/// allocation free.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureMachine {
    phase: GesturePhase,
}

impl GestureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    pub fn drag(&self) -> Option<&DragState> {
        match &self.phase {
            GesturePhase::Dragging(drag) => Some(drag),
            GesturePhase::Idle => None,
        }
    }

    /// The live drag offset; always 0 while idle.
    pub fn live_offset(&self) -> f32 {
        self.drag().map_or(0.0, |d| d.live_offset)
    }

    pub fn axis(&self) -> Option<AxisLock> {
        self.drag().map(|d| d.axis)
    }

    /// Touch start. A start during a drag re-grabs from the current live offset.
    pub fn start(&mut self, point: Point, now_ms: u64) {
        let base_offset = self.live_offset();
        ctrace!(x = point.x, y = point.y, now_ms, base_offset, "gesture start");
        self.phase = GesturePhase::Dragging(DragState {
            origin: point,
            origin_ms: now_ms,
            base_offset,
            axis: AxisLock::Undecided,
            live_offset: base_offset,
        });
    }

    /// Touch move. Locks the axis once, then tracks horizontal drags with damping.
    pub fn update(&mut self, point: Point, bounds: Bounds, config: &GestureConfig) -> MoveOutcome {
        let GesturePhase::Dragging(drag) = &mut self.phase else {
            return MoveOutcome::Idle;
        };

        let delta_x = point.x - drag.origin.x;
        let delta_y = point.y - drag.origin.y;

        if drag.axis == AxisLock::Undecided {
            drag.axis = lock_axis(delta_x, delta_y, config.axis_lock_slop);
            if drag.axis != AxisLock::Undecided {
                ctrace!(axis = ?drag.axis, delta_x, delta_y, "axis locked");
            }
        }

        match drag.axis {
            AxisLock::Undecided => MoveOutcome::Undecided,
            AxisLock::Vertical => MoveOutcome::PassThrough,
            AxisLock::Horizontal => {
                let damping = damping_for(delta_x, bounds, config);
                drag.live_offset = drag.base_offset + delta_x * damping;
                MoveOutcome::Tracking(drag.live_offset)
            }
        }
    }

    /// Touch end. Returns to idle and yields the index to commit, if it differs from
    /// `bounds.index`.
    ///
    /// The commit distance is `config.threshold` of `item_width_px`.
    pub fn release(
        &mut self,
        now_ms: u64,
        bounds: Bounds,
        item_width_px: f32,
        config: &GestureConfig,
    ) -> Option<usize> {
        let GesturePhase::Dragging(drag) = core::mem::take(&mut self.phase) else {
            return None;
        };
        if drag.axis == AxisLock::Vertical || bounds.count == 0 {
            return None;
        }

        let elapsed_ms = now_ms.saturating_sub(drag.origin_ms);
        let threshold_px = item_width_px * config.threshold;
        let target = resolve_release(drag.live_offset, elapsed_ms, bounds, threshold_px, config);
        ctrace!(
            live_offset = drag.live_offset,
            elapsed_ms,
            target,
            "gesture release"
        );
        (target != bounds.index).then_some(target)
    }

    /// Touch cancel. Always snaps back. Returns whether a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            ctrace!("gesture cancel");
        }
        self.phase = GesturePhase::Idle;
        was_dragging
    }
}

/// One-shot axis decision for a movement of `(delta_x, delta_y)` from the origin.
pub fn lock_axis(delta_x: f32, delta_y: f32, slop: f32) -> AxisLock {
    let abs_x = abs_f32(delta_x);
    let abs_y = abs_f32(delta_y);
    if abs_x > abs_y && abs_x > slop {
        AxisLock::Horizontal
    } else if abs_y > abs_x && abs_y > slop {
        AxisLock::Vertical
    } else {
        AxisLock::Undecided
    }
}

/// Edge damping applies when pulling further past the boundary the index already sits on.
pub fn damping_for(delta_x: f32, bounds: Bounds, config: &GestureConfig) -> f32 {
    let pulling_first = bounds.is_first() && delta_x > 0.0;
    let pulling_last = bounds.is_last() && delta_x < 0.0;
    if pulling_first || pulling_last {
        config.edge_damping
    } else {
        config.damping
    }
}

/// Picks the index a release settles on.
///
/// A quick swipe (short and fast enough) commits in its direction even below the distance
/// threshold. The result is clamped to the list; `bounds.count` must be non-zero.
pub fn resolve_release(
    live_offset: f32,
    elapsed_ms: u64,
    bounds: Bounds,
    threshold_px: f32,
    config: &GestureConfig,
) -> usize {
    debug_assert!(bounds.count > 0, "resolve_release on an empty list");
    let last = bounds.count.saturating_sub(1);
    let index = bounds.index.min(last);
    let quick_swipe =
        elapsed_ms < config.quick_swipe_ms && abs_f32(live_offset) > config.quick_swipe_distance;

    if live_offset < -threshold_px || (quick_swipe && live_offset < 0.0) {
        index.saturating_add(1).min(last)
    } else if live_offset > threshold_px || (quick_swipe && live_offset > 0.0) {
        index.saturating_sub(1)
    } else {
        index
    }
}
