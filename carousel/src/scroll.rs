use crate::{Easing, Point, Rect, Size, Tween};

/// The hidden proxy surface.
///
/// It scrolls continuously while dragged and is only ever read back as an offset. Paging is
/// expressed in multiples of its frame width, which always equals one item width.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSurface {
    frame: Rect,
    content_size: Size,
    content_offset: Point,
    paging_enabled: bool,
    user_interaction_enabled: bool,
    shows_horizontal_indicator: bool,
    animation: Option<Tween>,
}

impl ScrollSurface {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            content_size: Size::ZERO,
            content_offset: Point::ZERO,
            paging_enabled: true,
            user_interaction_enabled: false,
            shows_horizontal_indicator: false,
            animation: None,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
    }

    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn offset_x(&self) -> f32 {
        self.content_offset.x
    }

    /// Sets the horizontal offset without clamping. Returns `true` if it changed.
    pub fn set_offset_x(&mut self, x: f32) -> bool {
        if self.content_offset.x == x {
            return false;
        }
        self.content_offset.x = x;
        true
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    pub fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    pub fn shows_horizontal_indicator(&self) -> bool {
        self.shows_horizontal_indicator
    }

    pub fn page_width(&self) -> f32 {
        self.frame.width()
    }

    pub fn max_offset_x(&self) -> f32 {
        (self.content_size.width - self.frame.width()).max(0.0)
    }

    pub fn clamp_offset_x(&self, x: f32) -> f32 {
        if !x.is_finite() {
            return 0.0;
        }
        x.clamp(0.0, self.max_offset_x())
    }

    pub fn page_count(&self) -> usize {
        let w = self.page_width();
        if w <= f32::EPSILON {
            return 0;
        }
        let n = (self.content_size.width / w).round();
        if n.is_finite() && n > 0.0 { n as usize } else { 0 }
    }

    pub fn offset_for_page(&self, page: usize) -> f32 {
        self.page_width() * page as f32
    }

    /// Fractional page under the current offset.
    pub fn page_float(&self) -> f32 {
        let w = self.page_width();
        if w <= f32::EPSILON {
            return 0.0;
        }
        self.content_offset.x / w
    }

    pub fn nearest_page(&self) -> usize {
        self.clamp_page(self.page_float().round())
    }

    /// Page a release should snap to.
    ///
    /// Below `velocity_threshold` the nearest page wins. Above it, the page boundary in the
    /// direction of travel wins. The result never moves more than one page away from
    /// `origin_page`.
    pub fn snap_page(&self, velocity: f32, velocity_threshold: f32, origin_page: usize) -> usize {
        if self.page_count() == 0 {
            return 0;
        }
        let page_float = self.page_float();
        let target = if velocity > velocity_threshold {
            page_float.floor() + 1.0
        } else if velocity < -velocity_threshold {
            page_float.ceil() - 1.0
        } else {
            page_float.round()
        };
        let lo = origin_page.saturating_sub(1) as f32;
        let hi = origin_page.saturating_add(1) as f32;
        self.clamp_page(target.clamp(lo, hi))
    }

    fn clamp_page(&self, page: f32) -> usize {
        let count = self.page_count();
        if count == 0 || !page.is_finite() {
            return 0;
        }
        let max_page = count.saturating_sub(1) as f32;
        page.clamp(0.0, max_page) as usize
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&Tween> {
        self.animation.as_ref()
    }

    /// Starts (or retargets) an offset animation.
    pub fn animate_to(&mut self, to: f32, now_ms: u64, duration_ms: u64, easing: Easing) {
        match &mut self.animation {
            Some(tween) => tween.retarget(now_ms, to, duration_ms),
            None => {
                self.animation = Some(Tween::new(
                    self.content_offset.x,
                    to,
                    now_ms,
                    duration_ms,
                    easing,
                ));
            }
        }
    }

    pub fn cancel_animation(&mut self) {
        self.animation = None;
    }

    /// Advances a running animation.
    ///
    /// Returns `None` when idle, otherwise whether the animation finished with this step.
    pub fn advance(&mut self, now_ms: u64) -> Option<bool> {
        let tween = self.animation?;
        self.content_offset.x = tween.sample(now_ms);
        let done = tween.is_done(now_ms);
        if done {
            self.animation = None;
        }
        Some(done)
    }
}
