use alloc::vec::Vec;

use virtual_carousel::{
    Carousel, CarouselItem, CarouselOptions, MoveOutcome, OptionsError, Point, Resolution,
    Transition,
};

use crate::render::render_with_translation;
use crate::{
    Easing, OneShot, RenderOutput, Tween, apply_anchor, capture_current_anchor, find_key_index,
};

/// A framework-neutral controller that owns one mounted [`Carousel`] and the deferred work
/// that goes with it (the first-paint init timer and snap tweens).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_touch_*` when touch events arrive
/// - `tick(now_ms)` each frame/timer tick (init timer and tween sampling)
/// - `render(now_ms, ..)` to get the keyed slots and container translation
///
/// Pending timers are plain data owned by the controller: [`Controller::unmount`] consumes it,
/// so nothing scheduled at mount can run against a torn-down carousel.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    carousel: Carousel<T>,
    init_timer: Option<OneShot>,
    tween: Option<Tween>,
    easing: Easing,
}

impl<T> Controller<T> {
    /// Mounts a carousel: samples the viewport and arms the init timer.
    pub fn mount(list: Vec<T>, options: CarouselOptions<T>, now_ms: u64) -> Self {
        Self::from_carousel(Carousel::new(list, options), now_ms)
    }

    /// Like [`Controller::mount`], but validates the options first.
    pub fn try_mount(
        list: Vec<T>,
        options: CarouselOptions<T>,
        now_ms: u64,
    ) -> Result<Self, OptionsError> {
        Ok(Self::from_carousel(Carousel::try_new(list, options)?, now_ms))
    }

    pub fn from_carousel(carousel: Carousel<T>, now_ms: u64) -> Self {
        let init_timer = carousel
            .is_initializing()
            .then(|| OneShot::new(now_ms, carousel.options().init_delay_ms));
        adebug!(
            count = carousel.len(),
            now_ms,
            armed = init_timer.is_some(),
            "Controller::mount"
        );
        Self {
            carousel,
            init_timer,
            tween: None,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn carousel(&self) -> &Carousel<T> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<T> {
        &mut self.carousel
    }

    pub fn is_initializing(&self) -> bool {
        self.carousel.is_initializing()
    }

    pub fn has_pending_init(&self) -> bool {
        self.init_timer.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Touch start. Cancels any running snap so the drag takes over.
    pub fn on_touch_start(&mut self, point: Point, now_ms: u64) {
        self.cancel_animation();
        self.carousel.on_touch_start(point, now_ms);
    }

    pub fn on_touch_move(&mut self, point: Point) -> MoveOutcome {
        self.carousel.on_touch_move(point)
    }

    /// Touch end. Starts a snap from the dragged position to the settled one.
    pub fn on_touch_end(&mut self, now_ms: u64) -> Resolution {
        let from = self.translation(now_ms);
        let resolution = self.carousel.on_touch_end(now_ms);
        self.start_snap(from, now_ms);
        resolution
    }

    pub fn on_touch_cancel(&mut self, now_ms: u64) -> Resolution {
        let from = self.translation(now_ms);
        let resolution = self.carousel.on_touch_cancel();
        self.start_snap(from, now_ms);
        resolution
    }

    /// Pushes a host-owned index (controlled mode) and animates toward it.
    pub fn sync_current(&mut self, index: usize, now_ms: u64) -> bool {
        let from = self.translation(now_ms);
        if !self.carousel.sync_current(index) {
            return false;
        }
        self.start_snap(from, now_ms);
        true
    }

    /// Programmatic navigation, animated like a swipe.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> Resolution {
        let from = self.translation(now_ms);
        let resolution = self.carousel.go_to(index);
        self.start_snap(from, now_ms);
        resolution
    }

    /// Advances the controller.
    ///
    /// - Fires the init timer once it is due, enabling transitions.
    /// - If a snap tween is active, returns the animated translation (the final value on the
    ///   tick that completes it).
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if let Some(timer) = self.init_timer.as_mut() {
            if timer.poll(now_ms) {
                self.init_timer = None;
                self.carousel.finish_initializing();
                adebug!(now_ms, "init timer fired");
            }
        }

        let tween = self.tween?;
        let translation = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(translation)
    }

    /// The on-screen translation: the tween sample while snapping, otherwise the carousel's.
    pub fn translation(&self, now_ms: u64) -> f32 {
        match self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.carousel.translation(),
        }
    }

    /// Tears the mount down: drops the pending init timer and tween and reverts any drag.
    pub fn unmount(self) -> Carousel<T> {
        adebug!(
            pending_init = self.init_timer.is_some(),
            animating = self.tween.is_some(),
            "Controller::unmount"
        );
        let mut carousel = self.carousel;
        carousel.on_touch_cancel();
        carousel
    }

    /// Animates from `from` to the carousel's settled translation.
    ///
    /// A running tween is retargeted from its current sample. Nothing animates during first
    /// paint or while a drag owns the translation.
    fn start_snap(&mut self, from: f32, now_ms: u64) {
        let running = self.tween.take();
        if self.carousel.is_initializing() || self.carousel.is_dragging() {
            return;
        }
        let to = self.carousel.translation();
        let duration_ms = self.carousel.options().duration_ms;
        if from == to || duration_ms == 0 {
            return;
        }
        atrace!(from, to, duration_ms, retarget = running.is_some(), "snap tween");
        let tween = match running {
            Some(mut tween) => {
                tween.retarget(now_ms, to, duration_ms);
                tween
            }
            None => Tween::new(from, to, now_ms, duration_ms, self.easing),
        };
        self.tween = Some(tween);
    }
}

impl<T: CarouselItem> Controller<T> {
    /// Renders the current window with the on-screen translation.
    ///
    /// While a tween drives the translation, the reported transition is
    /// [`Transition::None`] so hosts do not animate twice.
    pub fn render<R>(
        &self,
        now_ms: u64,
        render_item: impl FnMut(&T, usize) -> R,
    ) -> RenderOutput<T::Key, R> {
        let mut output =
            render_with_translation(&self.carousel, self.translation(now_ms), render_item);
        if self.tween.is_some() {
            output.transition = Transition::None;
        }
        output
    }

    /// Replaces the list, keeping the current item on screen when it is still present.
    ///
    /// Returns the index of the re-anchored item, or `None` when it was removed (the index
    /// is then clamped as usual).
    pub fn replace_list(&mut self, list: Vec<T>) -> Option<usize> {
        self.cancel_animation();
        let anchor = capture_current_anchor(&self.carousel);
        self.carousel.set_list(list);
        let anchor = anchor?;
        let found = find_key_index(self.carousel.list(), &anchor.key);
        apply_anchor(&mut self.carousel, &anchor, |_| found)
    }
}
