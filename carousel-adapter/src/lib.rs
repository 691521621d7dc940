//! Adapter utilities for the `virtual-carousel` crate.
//!
//! The `virtual-carousel` crate is UI-agnostic and focuses on windowing and gesture state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A mount controller (first-paint init timer, scoped release on unmount)
//! - Tween-based snap animation for hosts without native transitions
//! - Keyed slot rendering and current-item anchoring across list replacement
//! - Tick-driven one-shot, debounce and throttle timers
//!
//! This crate is intentionally framework-agnostic (no bindings to any UI toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod render;
mod timing;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{IndexAnchor, apply_anchor, capture_current_anchor, find_key_index};
pub use controller::Controller;
pub use render::{RenderOutput, Slot, render};
pub use timing::{Debounce, OneShot, Throttle};
pub use tween::{Easing, Tween};
