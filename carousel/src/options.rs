use alloc::sync::Arc;

/// A callback fired once per committed index change with `(new_index, item)`.
pub type OnChangeCallback<T> = Arc<dyn Fn(usize, &T) + Send + Sync>;

/// Viewport width configuration.
///
/// The width is sampled exactly once, when the carousel is constructed. Later resizes are not
/// tracked.
#[derive(Clone)]
pub enum ViewportWidth {
    /// A fixed width in pixels.
    Value(f32),
    /// A lazily evaluated width query (called by `Carousel::new`).
    Provider(Arc<dyn Fn() -> f32 + Send + Sync>),
}

impl ViewportWidth {
    pub(crate) fn resolve(&self) -> f32 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for ViewportWidth {
    fn default() -> Self {
        Self::Value(DEFAULT_VIEWPORT_WIDTH)
    }
}

impl core::fmt::Debug for ViewportWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

pub const DEFAULT_ITEM_WIDTH: f32 = 750.0;
pub const DEFAULT_DESIGN_WIDTH: f32 = 750.0;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 375.0;
pub const DEFAULT_THRESHOLD: f32 = 0.1;
pub const DEFAULT_DAMPING: f32 = 1.0;
pub const DEFAULT_EDGE_DAMPING: f32 = 0.3;
pub const DEFAULT_DURATION_MS: u64 = 300;
pub const DEFAULT_AXIS_LOCK_SLOP: f32 = 5.0;
pub const DEFAULT_QUICK_SWIPE_MS: u64 = 300;
pub const DEFAULT_QUICK_SWIPE_DISTANCE: f32 = 30.0;
pub const DEFAULT_INIT_DELAY_MS: u64 = 50;

/// A rejected configuration value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("item width must be finite and positive, got {0}")]
    ItemWidth(f32),
    #[error("design width must be finite and positive, got {0}")]
    DesignWidth(f32),
    #[error("viewport width must be finite and positive, got {0}")]
    ViewportWidth(f32),
    #[error("threshold must be a finite fraction in 0.0..=1.0, got {0}")]
    Threshold(f32),
    #[error("damping must be finite and non-negative, got {0}")]
    Damping(f32),
    #[error("edge damping must be finite and non-negative, got {0}")]
    EdgeDamping(f32),
    #[error("axis lock slop must be finite and non-negative, got {0}")]
    AxisLockSlop(f32),
    #[error("quick swipe distance must be finite and non-negative, got {0}")]
    QuickSwipeDistance(f32),
}

/// The gesture tuning subset of [`CarouselOptions`], copied into the state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub threshold: f32,
    pub damping: f32,
    pub edge_damping: f32,
    pub axis_lock_slop: f32,
    pub quick_swipe_ms: u64,
    pub quick_swipe_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            damping: DEFAULT_DAMPING,
            edge_damping: DEFAULT_EDGE_DAMPING,
            axis_lock_slop: DEFAULT_AXIS_LOCK_SLOP,
            quick_swipe_ms: DEFAULT_QUICK_SWIPE_MS,
            quick_swipe_distance: DEFAULT_QUICK_SWIPE_DISTANCE,
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback and viewport provider live behind `Arc`s.
pub struct CarouselOptions<T> {
    /// Host-owned index. `Some` selects controlled mode when the carousel is constructed.
    pub current: Option<usize>,
    /// Seed for the internally owned index in uncontrolled mode.
    pub default_current: usize,

    /// Logical width of one item.
    pub item_width: f32,
    /// Logical width of the whole viewport; `item_width / design_width` is the fraction of the
    /// viewport one item occupies.
    pub design_width: f32,
    pub viewport_width: ViewportWidth,

    /// Fraction of the item pixel width a drag must cross to change page.
    pub threshold: f32,
    pub damping: f32,
    /// Multiplier used instead of `damping` when pulling past the first or last item.
    pub edge_damping: f32,
    /// Duration of the committed snap transition.
    pub duration_ms: u64,

    /// Pixels of movement required before the axis of a gesture is locked.
    pub axis_lock_slop: f32,
    /// A release sooner than this after touch start counts as a quick swipe.
    pub quick_swipe_ms: u64,
    /// Minimum live offset for a quick swipe to commit.
    pub quick_swipe_distance: f32,

    /// Delay after mount before transitions are enabled.
    pub init_delay_ms: u64,

    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> Clone for CarouselOptions<T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            default_current: self.default_current,
            item_width: self.item_width,
            design_width: self.design_width,
            viewport_width: self.viewport_width.clone(),
            threshold: self.threshold,
            damping: self.damping,
            edge_damping: self.edge_damping,
            duration_ms: self.duration_ms,
            axis_lock_slop: self.axis_lock_slop,
            quick_swipe_ms: self.quick_swipe_ms,
            quick_swipe_distance: self.quick_swipe_distance,
            init_delay_ms: self.init_delay_ms,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> Default for CarouselOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CarouselOptions<T> {
    /// Creates uncontrolled options with every default applied.
    pub fn new() -> Self {
        Self {
            current: None,
            default_current: 0,
            item_width: DEFAULT_ITEM_WIDTH,
            design_width: DEFAULT_DESIGN_WIDTH,
            viewport_width: ViewportWidth::default(),
            threshold: DEFAULT_THRESHOLD,
            damping: DEFAULT_DAMPING,
            edge_damping: DEFAULT_EDGE_DAMPING,
            duration_ms: DEFAULT_DURATION_MS,
            axis_lock_slop: DEFAULT_AXIS_LOCK_SLOP,
            quick_swipe_ms: DEFAULT_QUICK_SWIPE_MS,
            quick_swipe_distance: DEFAULT_QUICK_SWIPE_DISTANCE,
            init_delay_ms: DEFAULT_INIT_DELAY_MS,
            on_change: None,
        }
    }

    /// Creates controlled options: the host owns `current` and is notified via `on_change`.
    pub fn controlled(current: usize) -> Self {
        Self::new().with_current(Some(current))
    }

    pub fn with_current(mut self, current: Option<usize>) -> Self {
        self.current = current;
        self
    }

    pub fn with_default_current(mut self, default_current: usize) -> Self {
        self.default_current = default_current;
        self
    }

    pub fn with_item_width(mut self, item_width: f32) -> Self {
        self.item_width = item_width;
        self
    }

    pub fn with_design_width(mut self, design_width: f32) -> Self {
        self.design_width = design_width;
        self
    }

    pub fn with_viewport_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = ViewportWidth::Value(viewport_width);
        self
    }

    pub fn with_viewport_width_provider(
        mut self,
        provider: impl Fn() -> f32 + Send + Sync + 'static,
    ) -> Self {
        self.viewport_width = ViewportWidth::Provider(Arc::new(provider));
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_edge_damping(mut self, edge_damping: f32) -> Self {
        self.edge_damping = edge_damping;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_axis_lock_slop(mut self, slop: f32) -> Self {
        self.axis_lock_slop = slop;
        self
    }

    pub fn with_quick_swipe(mut self, max_ms: u64, min_distance: f32) -> Self {
        self.quick_swipe_ms = max_ms;
        self.quick_swipe_distance = min_distance;
        self
    }

    pub fn with_init_delay_ms(mut self, init_delay_ms: u64) -> Self {
        self.init_delay_ms = init_delay_ms;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(usize, &T) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            threshold: self.threshold,
            damping: self.damping,
            edge_damping: self.edge_damping,
            axis_lock_slop: self.axis_lock_slop,
            quick_swipe_ms: self.quick_swipe_ms,
            quick_swipe_distance: self.quick_swipe_distance,
        }
    }

    /// Checks every numeric option.
    ///
    /// A `Provider` viewport is not queried here; `Carousel::try_new` validates the sampled
    /// width instead.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !is_positive(self.item_width) {
            return Err(OptionsError::ItemWidth(self.item_width));
        }
        if !is_positive(self.design_width) {
            return Err(OptionsError::DesignWidth(self.design_width));
        }
        if let ViewportWidth::Value(width) = self.viewport_width {
            validate_viewport_width(width)?;
        }
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(OptionsError::Threshold(self.threshold));
        }
        if !is_non_negative(self.damping) {
            return Err(OptionsError::Damping(self.damping));
        }
        if !is_non_negative(self.edge_damping) {
            return Err(OptionsError::EdgeDamping(self.edge_damping));
        }
        if !is_non_negative(self.axis_lock_slop) {
            return Err(OptionsError::AxisLockSlop(self.axis_lock_slop));
        }
        if !is_non_negative(self.quick_swipe_distance) {
            return Err(OptionsError::QuickSwipeDistance(self.quick_swipe_distance));
        }
        Ok(())
    }
}

pub(crate) fn validate_viewport_width(width: f32) -> Result<(), OptionsError> {
    if is_positive(width) {
        Ok(())
    } else {
        Err(OptionsError::ViewportWidth(width))
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn is_non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

impl<T> core::fmt::Debug for CarouselOptions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("current", &self.current)
            .field("default_current", &self.default_current)
            .field("item_width", &self.item_width)
            .field("design_width", &self.design_width)
            .field("viewport_width", &self.viewport_width)
            .field("threshold", &self.threshold)
            .field("damping", &self.damping)
            .field("edge_damping", &self.edge_damping)
            .field("duration_ms", &self.duration_ms)
            .field("axis_lock_slop", &self.axis_lock_slop)
            .field("quick_swipe_ms", &self.quick_swipe_ms)
            .field("quick_swipe_distance", &self.quick_swipe_distance)
            .field("init_delay_ms", &self.init_delay_ms)
            .finish_non_exhaustive()
    }
}
