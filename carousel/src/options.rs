use std::sync::Arc;

use crate::{CenterTolerance, Easing, Inset, ItemIndex};

/// A callback fired after the visible surface mirrored a new proxy offset.
pub type OnScrollCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// A callback fired when the carousel settles after deceleration.
///
/// The argument is the resolved center index, if any.
pub type OnSettleCallback = Arc<dyn Fn(Option<ItemIndex>) + Send + Sync>;

/// Configuration for [`crate::CarouselSurface`].
///
/// Cheap to clone: callbacks are stored in `Arc`s.
#[derive(Clone)]
pub struct CarouselOptions {
    pub inset: Inset,

    /// Window around the inset inside which an item counts as centered.
    pub center_tolerance: CenterTolerance,

    /// Release velocity (points per second) above which a drag pages in its direction of
    /// travel instead of snapping to the nearest page.
    pub paging_velocity_threshold: f32,

    /// Duration of the snap animation after a drag is released.
    pub deceleration_ms: u64,

    /// Duration of animated `scroll_to_item` / `scroll_rect_to_visible` calls.
    pub scroll_animation_ms: u64,

    pub easing: Easing,

    pub on_scroll: Option<OnScrollCallback>,
    pub on_settle: Option<OnSettleCallback>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(Inset::ZERO)
    }
}

impl CarouselOptions {
    pub fn new(inset: Inset) -> Self {
        Self {
            inset,
            center_tolerance: CenterTolerance::default(),
            paging_velocity_threshold: 300.0,
            deceleration_ms: 250,
            scroll_animation_ms: 300,
            easing: Easing::default(),
            on_scroll: None,
            on_settle: None,
        }
    }

    pub fn with_inset(mut self, inset: Inset) -> Self {
        self.inset = inset;
        self
    }

    pub fn with_center_tolerance(mut self, center_tolerance: CenterTolerance) -> Self {
        self.center_tolerance = center_tolerance;
        self
    }

    pub fn with_paging_velocity_threshold(mut self, threshold: f32) -> Self {
        self.paging_velocity_threshold = threshold.max(0.0);
        self
    }

    pub fn with_deceleration_ms(mut self, deceleration_ms: u64) -> Self {
        self.deceleration_ms = deceleration_ms;
        self
    }

    pub fn with_scroll_animation_ms(mut self, scroll_animation_ms: u64) -> Self {
        self.scroll_animation_ms = scroll_animation_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_scroll(mut self, on_scroll: Option<impl Fn(f32) + Send + Sync + 'static>) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_settle(
        mut self,
        on_settle: Option<impl Fn(Option<ItemIndex>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_settle = on_settle.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("inset", &self.inset)
            .field("center_tolerance", &self.center_tolerance)
            .field("paging_velocity_threshold", &self.paging_velocity_threshold)
            .field("deceleration_ms", &self.deceleration_ms)
            .field("scroll_animation_ms", &self.scroll_animation_ms)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
