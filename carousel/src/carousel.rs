use alloc::vec::Vec;

use crate::geometry::{Geometry, transition_for};
use crate::gesture::{Bounds, GestureMachine};
use crate::options::validate_viewport_width;
use crate::window::compute_window;
use crate::{
    AxisLock, CarouselOptions, Frame, IndexSource, MoveOutcome, OptionsError, Point, Resolution,
    Transition, Window,
};

/// A headless windowed carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it touch events and reads back a [`Frame`] (or the [`Window`]) to
///   render.
/// - At most three items are ever materialized, whatever the list length.
///
/// For the mount lifecycle (init timer, snap tweens, keyed slots), see the
/// `virtual-carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<T> {
    options: CarouselOptions<T>,
    list: Vec<T>,
    index: IndexSource,
    gesture: GestureMachine,
    geometry: Geometry,
    initializing: bool,
}

impl<T> Carousel<T> {
    /// Creates a carousel, sampling the viewport width once.
    ///
    /// Options are not validated; see [`Carousel::try_new`].
    pub fn new(list: Vec<T>, options: CarouselOptions<T>) -> Self {
        let viewport_width = options.viewport_width.resolve();
        Self::with_viewport(list, options, viewport_width)
    }

    /// Like [`Carousel::new`], but rejects invalid options and viewport samples.
    pub fn try_new(list: Vec<T>, options: CarouselOptions<T>) -> Result<Self, OptionsError> {
        options.validate()?;
        let viewport_width = options.viewport_width.resolve();
        validate_viewport_width(viewport_width)?;
        Ok(Self::with_viewport(list, options, viewport_width))
    }

    fn with_viewport(list: Vec<T>, options: CarouselOptions<T>, viewport_width: f32) -> Self {
        let geometry = Geometry::new(options.item_width, options.design_width, viewport_width);
        let mut index = IndexSource::new(options.current, options.default_current);
        index.reclamp(list.len());
        cdebug!(
            count = list.len(),
            controlled = index.is_controlled(),
            viewport_width,
            item_width_px = geometry.item_width_px(),
            "Carousel::new"
        );
        let carousel = Self {
            options,
            list,
            index,
            gesture: GestureMachine::new(),
            geometry,
            initializing: true,
        };
        carousel.warn_if_out_of_range();
        carousel
    }

    pub fn options(&self) -> &CarouselOptions<T> {
        &self.options
    }

    pub fn list(&self) -> &[T] {
        &self.list
    }

    pub fn into_list(self) -> Vec<T> {
        self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Replaces the list.
    ///
    /// An in-flight drag is reverted first. The uncontrolled index is clamped into the new
    /// list; a controlled index stays as the host set it and is clamped when read.
    pub fn set_list(&mut self, list: Vec<T>) {
        self.gesture.cancel();
        self.list = list;
        self.index.reclamp(self.list.len());
        cdebug!(count = self.list.len(), "Carousel::set_list");
        self.warn_if_out_of_range();
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.list.get(index)
    }

    pub fn index_source(&self) -> IndexSource {
        self.index
    }

    pub fn is_controlled(&self) -> bool {
        self.index.is_controlled()
    }

    /// The current index clamped into the list, or `None` when the list is empty.
    pub fn current_index(&self) -> Option<usize> {
        self.index.resolve(self.list.len())
    }

    pub fn current_item(&self) -> Option<&T> {
        self.current_index().and_then(|i| self.list.get(i))
    }

    /// Pushes a new host-owned index (controlled mode only).
    ///
    /// Returns `false` and changes nothing when the carousel is uncontrolled. The value is
    /// stored as given; out-of-range values are clamped when read, never rewritten.
    pub fn sync_current(&mut self, index: usize) -> bool {
        if !self.index.sync(index) {
            cwarn!(index, "sync_current ignored: carousel is uncontrolled");
            return false;
        }
        self.warn_if_out_of_range();
        true
    }

    /// Repositions without notifying `on_change`.
    ///
    /// Uncontrolled carousels move to the clamped index; controlled ones are unchanged and the
    /// host is expected to adopt the returned index. `None` for an empty list.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        let last = self.list.len().checked_sub(1)?;
        let index = index.min(last);
        self.index.commit(index);
        Some(index)
    }

    /// Navigates to `index` through the same commit path as a swipe.
    ///
    /// Rejected while a drag is in progress.
    pub fn go_to(&mut self, index: usize) -> Resolution {
        if self.gesture.is_dragging() {
            cwarn!(index, "go_to ignored while dragging");
            return Resolution::Reverted;
        }
        self.commit(index)
    }

    pub fn next_page(&mut self) -> Resolution {
        match self.current_index() {
            Some(current) => self.go_to(current.saturating_add(1)),
            None => Resolution::Reverted,
        }
    }

    pub fn prev_page(&mut self) -> Resolution {
        match self.current_index() {
            Some(current) => self.go_to(current.saturating_sub(1)),
            None => Resolution::Reverted,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn item_width_px(&self) -> f32 {
        self.geometry.item_width_px()
    }

    pub fn gesture(&self) -> &GestureMachine {
        &self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn live_offset(&self) -> f32 {
        self.gesture.live_offset()
    }

    pub fn axis_lock(&self) -> Option<AxisLock> {
        self.gesture.axis()
    }

    pub fn is_initializing(&self) -> bool {
        self.initializing
    }

    /// Ends the first-paint phase; transitions are enabled from the next render on.
    pub fn finish_initializing(&mut self) {
        self.initializing = false;
    }

    /// The materialized window around the current index.
    pub fn window(&self) -> Window<'_, T> {
        compute_window(self.index.raw(), &self.list)
    }

    /// Container translation including the live drag.
    pub fn translation(&self) -> f32 {
        self.resting_translation() + self.live_offset()
    }

    /// Container translation with no drag applied.
    pub fn resting_translation(&self) -> f32 {
        let Some(current) = self.current_index() else {
            return 0.0;
        };
        self.geometry
            .translation(current, self.window().min_index(), 0.0)
    }

    pub fn transition(&self) -> Transition {
        transition_for(
            self.gesture.is_dragging(),
            self.initializing,
            self.options.duration_ms,
        )
    }

    /// Returns a snapshot of the current render geometry.
    pub fn frame(&self) -> Frame {
        let window = self.window();
        Frame {
            current: self.current_index(),
            window: window.range(),
            placeholder_width: self.geometry.placeholder_width(window.min_index()),
            item_width_px: self.geometry.item_width_px(),
            translation: self.translation(),
            is_dragging: self.gesture.is_dragging(),
            transition: self.transition(),
        }
    }

    /// Calls `render_item(item, original_index)` once per materialized item, in order.
    pub fn for_each_rendered(&self, mut render_item: impl FnMut(&T, usize)) {
        for slot in self.window().iter() {
            render_item(slot.item, slot.index);
        }
    }

    pub fn on_touch_start(&mut self, point: Point, now_ms: u64) {
        self.gesture.start(point, now_ms);
    }

    pub fn on_touch_move(&mut self, point: Point) -> MoveOutcome {
        let bounds = self.bounds();
        let config = self.options.gesture_config();
        self.gesture.update(point, bounds, &config)
    }

    pub fn on_touch_end(&mut self, now_ms: u64) -> Resolution {
        let bounds = self.bounds();
        let config = self.options.gesture_config();
        let item_width_px = self.geometry.item_width_px();
        match self.gesture.release(now_ms, bounds, item_width_px, &config) {
            Some(target) => self.commit(target),
            None => Resolution::Reverted,
        }
    }

    /// A cancelled touch never changes page, however far it was dragged.
    pub fn on_touch_cancel(&mut self) -> Resolution {
        self.gesture.cancel();
        Resolution::Reverted
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.current_index().unwrap_or(0), self.list.len())
    }

    fn commit(&mut self, target: usize) -> Resolution {
        let Some(previous) = self.current_index() else {
            return Resolution::Reverted;
        };
        let current = target.min(self.list.len() - 1);
        if current == previous {
            return Resolution::Reverted;
        }

        self.index.commit(current);
        cdebug!(
            previous,
            current,
            controlled = self.index.is_controlled(),
            "index committed"
        );
        if let Some(on_change) = &self.options.on_change {
            on_change(current, &self.list[current]);
        }
        Resolution::Committed { previous, current }
    }

    fn warn_if_out_of_range(&self) {
        if !self.list.is_empty() && self.index.raw() >= self.list.len() {
            cwarn!(
                index = self.index.raw(),
                count = self.list.len(),
                "current index out of range; rendering the nearest item"
            );
        }
    }
}
