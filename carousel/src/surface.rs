use std::collections::VecDeque;

use crate::layout::item_width_for;
use crate::{
    CarouselCell, CarouselDataSource, CarouselOptions, CarouselSnapshot, Inset, ItemIndex,
    PagingLayout, Phase, Point, Rect, ScaleContext, ScrollPosition, ScrollSurface, Size,
};

/// Smoothing factor of the drag velocity moving average.
const VELOCITY_SMOOTHING: f32 = 0.3;
/// A finger resting longer than this before release counts as a zero-velocity release.
const VELOCITY_STALE_MS: u64 = 100;

/// A rendered cell together with its placement.
#[derive(Clone, Debug)]
pub struct VisibleCell<C> {
    pub index: ItemIndex,
    /// Position of the item in the flattened strip of all sections.
    pub ordinal: usize,
    /// Frame in content space (before the content offset is applied).
    pub frame: Rect,
    pub cell: C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    RestoreCenter(ItemIndex),
}

#[derive(Clone, Copy, Debug)]
struct DragState {
    origin_page: usize,
    velocity: f32,
    last_event_ms: u64,
}

/// A paging carousel whose visible scroll position is driven by a hidden proxy surface.
///
/// The surface holds no UI objects of its own beyond the host-provided cells:
/// - the host reports geometry (`set_frame`, `attach`) and input (`begin_drag`/`drag_by`/
///   `end_drag`), and pumps time with `tick` and `run_deferred`;
/// - the proxy scrolls continuously and every change of its offset is mirrored onto this
///   surface, after which the visible cells are rescaled;
/// - on release, the proxy snaps to a page boundary and the remembered center is updated once
///   it settles.
///
/// All operations are best-effort: a missing proxy, data source or resolvable center turns
/// them into silent no-ops.
pub struct CarouselSurface<D: CarouselDataSource> {
    options: CarouselOptions,
    layout: PagingLayout,
    frame: Rect,
    content_offset: Point,
    content_size: Size,
    paging_enabled: bool,
    scroll_enabled: bool,
    shares_pan_gesture: bool,

    parent: Option<Rect>,
    proxy: Option<ScrollSurface>,

    data_source: Option<D>,
    item_count: usize,
    visible: Vec<VisibleCell<D::Cell>>,

    last_center: Option<ItemIndex>,
    phase: Phase,
    drag: Option<DragState>,
    now_ms: u64,
    deferred: VecDeque<Deferred>,
}

impl<D: CarouselDataSource> CarouselSurface<D> {
    pub fn new(frame: Rect, options: CarouselOptions) -> Self {
        cdebug!(
            width = frame.width(),
            height = frame.height(),
            inset = options.inset.get(),
            "CarouselSurface::new"
        );
        let mut layout = PagingLayout::new(options.inset);
        layout.prepare(frame.size);
        let mut s = Self {
            paging_enabled: layout.paging_enabled,
            layout,
            options,
            frame,
            content_offset: Point::ZERO,
            content_size: Size::ZERO,
            scroll_enabled: true,
            shares_pan_gesture: false,
            parent: None,
            proxy: None,
            data_source: None,
            item_count: 0,
            visible: Vec::new(),
            last_center: None,
            phase: Phase::Idle,
            drag: None,
            now_ms: 0,
            deferred: VecDeque::new(),
        };
        s.content_size_changed();
        s
    }

    pub fn with_inset(frame: Rect, inset: Inset) -> Self {
        Self::new(frame, CarouselOptions::new(inset))
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Replaces the options. A changed inset reconfigures the layout like `set_inset`.
    pub fn set_options(&mut self, options: CarouselOptions) {
        let inset_changed = self.options.inset != options.inset;
        self.options = options;
        if inset_changed {
            self.reconfigure_keeping_center();
        }
    }

    pub fn inset(&self) -> Inset {
        self.options.inset
    }

    /// Sets the inset and rebuilds the layout and proxy geometry.
    ///
    /// The item centered before the change (or else the remembered center) is centered again
    /// under the new item width. Calling it again with the same value yields the same
    /// configuration.
    pub fn set_inset(&mut self, inset: Inset) {
        cdebug!(inset = inset.get(), "set_inset");
        self.options.inset = inset;
        self.reconfigure_keeping_center();
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Applies new container geometry and runs a layout pass.
    ///
    /// Offsets are left alone. For orientation changes use `rotate`, which captures the center
    /// before the geometry changes and restores it on the next `run_deferred`.
    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame == frame {
            return;
        }
        ctrace!(
            width = frame.width(),
            height = frame.height(),
            "set_frame"
        );
        self.frame = frame;
        self.layout.prepare(frame.size);
        self.paging_enabled = self.layout.paging_enabled;
        self.refresh_proxy_frame();
        self.content_size_changed();
        self.layout_visible_cells();
        self.scale_visible_cells();
    }

    pub fn layout(&self) -> &PagingLayout {
        &self.layout
    }

    pub fn item_width(&self) -> f32 {
        self.layout.item_width()
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn content_offset(&self) -> Point {
        self.content_offset
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    /// Whether the visible surface scrolls on its own. `false` while a proxy is attached.
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn shares_pan_gesture(&self) -> bool {
        self.shares_pan_gesture
    }

    pub fn parent(&self) -> Option<Rect> {
        self.parent
    }

    pub fn proxy(&self) -> Option<&ScrollSurface> {
        self.proxy.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.proxy.as_ref().is_some_and(ScrollSurface::is_animating)
    }

    pub fn data_source(&self) -> Option<&D> {
        self.data_source.as_ref()
    }

    /// Mutable access to the data source. Call `reload_data` after changing item counts.
    pub fn data_source_mut(&mut self) -> Option<&mut D> {
        self.data_source.as_mut()
    }

    pub fn set_data_source(&mut self, data_source: D) {
        self.data_source = Some(data_source);
        self.reload_data();
    }

    pub fn take_data_source(&mut self) -> Option<D> {
        let ds = self.data_source.take();
        self.reload_data();
        ds
    }

    pub fn visible_cells(&self) -> &[VisibleCell<D::Cell>] {
        &self.visible
    }

    pub fn visible_cells_mut(&mut self) -> &mut [VisibleCell<D::Cell>] {
        &mut self.visible
    }

    /// Joins a parent. Passing `None` detaches and tears the proxy down.
    ///
    /// The proxy is created in the parent's coordinate space, inset from this surface's left
    /// edge and one item wide. It shares the pan gesture with this surface, which stops
    /// scrolling on its own and only mirrors the proxy from then on.
    pub fn attach(&mut self, parent: Option<Rect>) {
        self.parent = parent;
        if parent.is_none() {
            cdebug!("detach");
            self.proxy = None;
            self.shares_pan_gesture = false;
            self.scroll_enabled = true;
            self.drag = None;
            self.phase = Phase::Idle;
            return;
        }

        cdebug!("attach");
        self.proxy = Some(ScrollSurface::new(self.frame));
        self.shares_pan_gesture = true;
        self.configure_layout();

        // Pick up where the visible surface currently is.
        let start = self.content_offset.x;
        if let Some(proxy) = self.proxy.as_mut() {
            let clamped = proxy.clamp_offset_x(start);
            proxy.set_offset_x(clamped);
        }
        self.proxy_did_scroll();
    }

    pub fn detach(&mut self) {
        self.attach(None);
    }

    /// Drops all cells and re-reads the item counts from the data source.
    pub fn reload_data(&mut self) {
        self.visible.clear();
        self.content_size_changed();
        cdebug!(items = self.item_count, "reload_data");

        let changed = match self.proxy.as_mut() {
            Some(proxy) => {
                let clamped = proxy.clamp_offset_x(proxy.offset_x());
                proxy.set_offset_x(clamped)
            }
            None => false,
        };
        if changed {
            self.proxy_did_scroll();
        } else {
            self.layout_visible_cells();
            self.scale_visible_cells();
        }
    }

    /// Recomputes content sizes from the data source's current item counts.
    ///
    /// The proxy's content width is one item width per item, across all sections.
    pub fn content_size_changed(&mut self) {
        self.item_count = self
            .data_source
            .as_ref()
            .map_or(0, CarouselDataSource::total_items);

        let inset = self.options.inset.get();
        let n = self.item_count as f32;
        self.content_size = Size::new(
            inset * 2.0 + self.item_width() * n,
            self.frame.height(),
        );

        if self.data_source.is_none() {
            return;
        }
        let Some(proxy) = self.proxy.as_mut() else {
            return;
        };
        let frame = proxy.frame();
        proxy.set_content_size(Size::new(frame.width() * n, frame.height()));
    }

    /// Scrolls so that `index` is centered.
    ///
    /// The visible surface is positioned first (unless animated), then the proxy is forced to
    /// `ordinal * item_width` since the two keep independent scroll states. `index` becomes
    /// the remembered center. Unknown indexes are ignored.
    pub fn scroll_to_item(&mut self, index: ItemIndex, position: ScrollPosition, animated: bool) {
        let Some(ordinal) = self
            .data_source
            .as_ref()
            .and_then(|ds| ds.ordinal_of(index))
        else {
            cwarn!(
                section = index.section,
                item = index.item,
                "scroll_to_item: unknown index"
            );
            return;
        };
        ctrace!(ordinal, animated, "scroll_to_item");

        if !animated {
            let x = self.offset_for_position(ordinal, position);
            self.set_visible_offset(x);
        }

        let w = self.item_width();
        let rect = Rect::new(ordinal as f32 * w, 0.0, w, self.frame.height());
        self.scroll_rect_to_visible(rect, animated);
        self.last_center = Some(index);
    }

    /// Scrolls the proxy to `rect.origin.x`; the visible surface follows by mirroring.
    pub fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        let now_ms = self.now_ms;
        let duration = self.options.scroll_animation_ms;
        let easing = self.options.easing;
        let Some(proxy) = self.proxy.as_mut() else {
            ctrace!("scroll_rect_to_visible: no proxy");
            return;
        };
        if animated {
            proxy.animate_to(rect.origin.x, now_ms, duration, easing);
            return;
        }
        proxy.cancel_animation();
        proxy.set_offset_x(rect.origin.x);
        self.proxy_did_scroll();
        // The jump replaced a release animation: the proxy is at rest now.
        if self.phase == Phase::Decelerating {
            self.finish_deceleration();
        }
    }

    /// The visible item whose left edge lies within the centering window around the inset.
    ///
    /// The edge is measured relative to this surface's frame, so the answer does not depend on
    /// where the frame sits in its parent.
    pub fn current_center_item(&self) -> Option<&VisibleCell<D::Cell>> {
        let inset = self.options.inset.get();
        let tolerance = self.options.center_tolerance.resolve(self.item_width());
        let lower = inset - tolerance;
        let upper = inset + tolerance;
        let offset = self.content_offset.x;
        self.visible.iter().find(|c| {
            let x = c.frame.min_x() - offset;
            x >= lower && x <= upper
        })
    }

    pub fn current_center_index(&self) -> Option<ItemIndex> {
        self.current_center_item().map(|c| c.index)
    }

    /// The center remembered from the last settle or `scroll_to_item`.
    pub fn last_center_index(&self) -> Option<ItemIndex> {
        self.last_center
    }

    /// Re-runs the mirror and scale pass outside of proxy notifications.
    pub fn notify_scrolled(&mut self) {
        self.proxy_did_scroll();
    }

    /// Settle handling: remembers the resolved center and fires `on_settle`.
    pub fn notify_did_end_decelerating(&mut self) {
        let center = self.current_center_index();
        if center.is_some() {
            self.last_center = center;
        }
        cdebug!(center = ?center, "did_end_decelerating");
        if let Some(cb) = &self.options.on_settle {
            cb(center);
        }
    }

    /// Queues a restore of the current (or else remembered) center.
    ///
    /// The restore runs in `run_deferred`, after the new geometry has been applied.
    pub fn notify_rotated(&mut self) {
        let Some(index) = self.current_center_index().or(self.last_center) else {
            ctrace!("notify_rotated: no center to restore");
            return;
        };
        cdebug!(section = index.section, item = index.item, "notify_rotated");
        self.deferred.push_back(Deferred::RestoreCenter(index));
    }

    /// A rotation: captures the center with the old geometry, then applies `frame`.
    pub fn rotate(&mut self, frame: Rect) {
        self.notify_rotated();
        self.set_frame(frame);
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs work deferred to this turn of the event loop. Returns the number of tasks run.
    ///
    /// Tasks queued while running are left for the next call.
    pub fn run_deferred(&mut self) -> usize {
        let pending = core::mem::take(&mut self.deferred);
        let n = pending.len();
        for task in pending {
            match task {
                Deferred::RestoreCenter(index) => {
                    self.reload_data();
                    self.scroll_to_item(index, ScrollPosition::CenteredHorizontally, false);
                    self.notify_scrolled();
                }
            }
        }
        n
    }

    /// Starts a drag on the shared pan gesture. Cancels a running animation.
    pub fn begin_drag(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let Some(proxy) = self.proxy.as_mut() else {
            return;
        };
        proxy.cancel_animation();
        self.drag = Some(DragState {
            origin_page: proxy.nearest_page(),
            velocity: 0.0,
            last_event_ms: now_ms,
        });
        self.phase = Phase::Dragging;
        ctrace!(now_ms, "begin_drag");
    }

    /// Moves the finger by `delta_x` points. Positive values drag the content to the right.
    pub fn drag_by(&mut self, delta_x: f32, now_ms: u64) {
        self.now_ms = now_ms;
        let (Some(proxy), Some(drag)) = (self.proxy.as_mut(), self.drag.as_mut()) else {
            return;
        };

        let offset_delta = -delta_x;
        let dt = now_ms.saturating_sub(drag.last_event_ms) as f32 / 1000.0;
        if dt >= 0.5 {
            drag.velocity = 0.0;
        } else if dt > 0.0 {
            let instant = offset_delta / dt;
            drag.velocity =
                drag.velocity * (1.0 - VELOCITY_SMOOTHING) + instant * VELOCITY_SMOOTHING;
        }
        drag.last_event_ms = now_ms;

        let next = proxy.clamp_offset_x(proxy.offset_x() + offset_delta);
        ctrace!(delta_x, offset = next, "drag_by");
        if proxy.set_offset_x(next) {
            self.proxy_did_scroll();
        }
    }

    /// Releases the drag and starts decelerating toward a page boundary.
    pub fn end_drag(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let Some(drag) = self.drag.take() else {
            return;
        };
        let threshold = self.options.paging_velocity_threshold;
        let duration = self.options.deceleration_ms;
        let easing = self.options.easing;
        let Some(proxy) = self.proxy.as_mut() else {
            self.phase = Phase::Idle;
            return;
        };

        let velocity = if now_ms.saturating_sub(drag.last_event_ms) > VELOCITY_STALE_MS {
            0.0
        } else {
            drag.velocity
        };
        let page = proxy.snap_page(velocity, threshold, drag.origin_page);
        let target = proxy.offset_for_page(page);
        cdebug!(velocity, page, "end_drag");

        self.phase = Phase::Decelerating;
        if (proxy.offset_x() - target).abs() <= f32::EPSILON {
            self.finish_deceleration();
            return;
        }
        proxy.animate_to(target, now_ms, duration, easing);
    }

    /// Advances proxy animations to `now_ms`. Returns `true` if the offset moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.now_ms = now_ms;
        let Some(done) = self.proxy.as_mut().and_then(|p| p.advance(now_ms)) else {
            return false;
        };
        self.proxy_did_scroll();
        if done && self.phase == Phase::Decelerating {
            self.finish_deceleration();
        }
        true
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            center: self.current_center_index().or(self.last_center),
            offset_x: self
                .proxy
                .as_ref()
                .map_or(self.content_offset.x, ScrollSurface::offset_x),
        }
    }

    /// Restores a snapshot: the center item if it still exists, otherwise the raw offset.
    pub fn restore(&mut self, snapshot: CarouselSnapshot) {
        let known = snapshot.center.filter(|index| {
            self.data_source
                .as_ref()
                .is_some_and(|ds| ds.ordinal_of(*index).is_some())
        });
        match known {
            Some(index) => {
                self.scroll_to_item(index, ScrollPosition::CenteredHorizontally, false)
            }
            None => {
                let h = self.frame.height();
                let w = self.item_width();
                self.scroll_rect_to_visible(Rect::new(snapshot.offset_x, 0.0, w, h), false);
            }
        }
    }

    fn finish_deceleration(&mut self) {
        self.phase = Phase::Idle;
        self.notify_did_end_decelerating();
    }

    fn configure_layout(&mut self) {
        self.layout = PagingLayout::new(self.options.inset);
        self.layout.prepare(self.frame.size);
        self.paging_enabled = self.layout.paging_enabled;

        if self.proxy.is_some() {
            self.refresh_proxy_frame();
            // Only the proxy scrolls; taps must not move the visible surface.
            self.paging_enabled = true;
            self.scroll_enabled = false;
        }

        self.content_size_changed();
        self.layout_visible_cells();
        self.scale_visible_cells();
    }

    fn reconfigure_keeping_center(&mut self) {
        let center = self.current_center_index().or(self.last_center);
        self.configure_layout();
        if self.proxy.is_none() {
            return;
        }
        if let Some(index) = center {
            self.scroll_to_item(index, ScrollPosition::CenteredHorizontally, false);
        }
    }

    fn refresh_proxy_frame(&mut self) {
        let frame = self.frame;
        let inset = self.options.inset;
        let Some(proxy) = self.proxy.as_mut() else {
            return;
        };
        proxy.set_frame(Rect::new(
            frame.min_x() + inset.get(),
            frame.origin.y,
            item_width_for(frame.width(), inset),
            frame.height(),
        ));
    }

    fn offset_for_position(&self, ordinal: usize, position: ScrollPosition) -> f32 {
        let inset = self.options.inset.get();
        let w = self.item_width();
        let item_min = inset + ordinal as f32 * w;
        let x = match position {
            ScrollPosition::CenteredHorizontally => item_min + w / 2.0 - self.frame.width() / 2.0,
            ScrollPosition::Left => item_min,
            ScrollPosition::Right => item_min + w - self.frame.width(),
        };
        let max = (self.content_size.width - self.frame.width()).max(0.0);
        x.clamp(0.0, max)
    }

    fn set_visible_offset(&mut self, x: f32) {
        self.content_offset.x = x;
        self.layout_visible_cells();
        self.scale_visible_cells();
    }

    fn proxy_did_scroll(&mut self) {
        if let Some(proxy) = &self.proxy {
            self.content_offset = proxy.content_offset();
        }
        self.layout_visible_cells();
        self.scale_visible_cells();
        if let Some(cb) = &self.options.on_scroll {
            cb(self.content_offset.x);
        }
    }

    /// Syncs the visible cell set with the current offset, keeping cells that stay visible.
    fn layout_visible_cells(&mut self) {
        let inset = self.options.inset.get();
        let w = self.item_width();
        let h = self.frame.height();
        let n = self.item_count;
        let Some(ds) = self.data_source.as_mut() else {
            self.visible.clear();
            return;
        };
        if n == 0 || w <= f32::EPSILON {
            self.visible.clear();
            return;
        }

        let left = self.content_offset.x;
        let right = left + self.frame.width();
        let first = ((left - inset) / w).floor();
        let last = ((right - inset) / w).ceil();
        if !first.is_finite() || !last.is_finite() || last <= 0.0 || first >= n as f32 {
            self.visible.clear();
            return;
        }
        let start = first.max(0.0) as usize;
        let end = (last as usize).min(n);

        let mut next = Vec::with_capacity(end.saturating_sub(start));
        let mut old = core::mem::take(&mut self.visible).into_iter().peekable();
        for ordinal in start..end {
            while old.next_if(|c| c.ordinal < ordinal).is_some() {}
            let frame = Rect::new(inset + ordinal as f32 * w, 0.0, w, h);
            if let Some(mut kept) = old.next_if(|c| c.ordinal == ordinal) {
                kept.frame = frame;
                next.push(kept);
                continue;
            }
            let Some(index) = ds.index_at(ordinal) else {
                continue;
            };
            next.push(VisibleCell {
                index,
                ordinal,
                frame,
                cell: ds.cell_for_item(index),
            });
        }
        self.visible = next;
    }

    fn scale_visible_cells(&mut self) {
        let inset = self.options.inset;
        let offset = self.content_offset.x;
        for vc in &mut self.visible {
            let ctx = ScaleContext {
                inset,
                origin_x: vc.frame.min_x() - offset,
                width: vc.frame.width(),
            };
            if let Some(cell) = vc.cell.scaling() {
                cell.scale(&ctx);
            }
        }
    }
}

impl<D: CarouselDataSource> core::fmt::Debug for CarouselSurface<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselSurface")
            .field("options", &self.options)
            .field("layout", &self.layout)
            .field("frame", &self.frame)
            .field("content_offset", &self.content_offset)
            .field("content_size", &self.content_size)
            .field("proxy", &self.proxy)
            .field("item_count", &self.item_count)
            .field("visible", &self.visible.len())
            .field("last_center", &self.last_center)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
