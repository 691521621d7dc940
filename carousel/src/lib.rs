//! A headless windowed carousel: horizontal paging over arbitrarily large lists.
//!
//! For adapter-level utilities (mount lifecycle, snap tweens, keyed slots, anchoring), see the
//! `virtual-carousel-adapter` crate.
//!
//! The crate keeps three quantities consistent under live touch input:
//! - the materialized window (previous, current and next item; never more than three),
//! - the container translation (committed position plus the in-progress drag),
//! - the current index, owned either by the host (controlled) or by the carousel
//!   (uncontrolled).
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a viewport width sample at mount
//! - touch start/move/end/cancel events with client coordinates and timestamps
//! - a renderer for one item
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod geometry;
mod gesture;
mod index;
mod key;
mod options;
mod state;
mod types;
mod window;


pub use carousel::Carousel;
pub use geometry::{Geometry, transition_for};
pub use gesture::{
    Bounds, DragState, GestureMachine, GesturePhase, damping_for, lock_axis, resolve_release,
};
pub use index::IndexSource;
pub use key::CarouselItem;
pub use options::{
    CarouselOptions, DEFAULT_AXIS_LOCK_SLOP, DEFAULT_DAMPING, DEFAULT_DESIGN_WIDTH,
    DEFAULT_DURATION_MS, DEFAULT_EDGE_DAMPING, DEFAULT_INIT_DELAY_MS, DEFAULT_ITEM_WIDTH,
    DEFAULT_QUICK_SWIPE_DISTANCE, DEFAULT_QUICK_SWIPE_MS, DEFAULT_THRESHOLD,
    DEFAULT_VIEWPORT_WIDTH, GestureConfig, OnChangeCallback, OptionsError, ViewportWidth,
};
pub use state::Frame;
pub use types::{AxisLock, MoveOutcome, Point, Resolution, Transition, WindowRange};
pub use window::{Window, WindowItem, compute_window, window_range};

#[doc(hidden)]
pub use key::ItemKey;
