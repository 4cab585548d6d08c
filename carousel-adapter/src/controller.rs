use carousel::{
    CarouselDataSource, CarouselOptions, CarouselSurface, ItemIndex, Rect, ScrollPosition,
};

use crate::{CenterAnchor, apply_center_anchor, capture_center_anchor};

/// A framework-neutral controller that wraps a `carousel::CarouselSurface` and plays the role
/// of the embedding collaborator.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` when the carousel's frame changes (size changes are treated as rotations)
/// - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` for the pan gesture
/// - `tick(now_ms)` each frame, which runs deferred work first and then advances animations
#[derive(Debug)]
pub struct Controller<D: CarouselDataSource> {
    c: CarouselSurface<D>,
    pointer_x: Option<f32>,
}

impl<D: CarouselDataSource> Controller<D> {
    /// Creates a surface, installs `data_source` and attaches it to `parent`.
    pub fn new(frame: Rect, parent: Rect, options: CarouselOptions, data_source: D) -> Self {
        let mut c = CarouselSurface::new(frame, options);
        c.set_data_source(data_source);
        c.attach(Some(parent));
        Self::from_surface(c)
    }

    pub fn from_surface(c: CarouselSurface<D>) -> Self {
        Self { c, pointer_x: None }
    }

    pub fn surface(&self) -> &CarouselSurface<D> {
        &self.c
    }

    pub fn surface_mut(&mut self) -> &mut CarouselSurface<D> {
        &mut self.c
    }

    pub fn into_surface(self) -> CarouselSurface<D> {
        self.c
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer_x.is_some()
    }

    /// Call this when the UI reports a new frame for the carousel.
    ///
    /// A changed size is handled as a rotation: the center is captured before the geometry
    /// changes and restored on the next `tick`.
    pub fn on_viewport(&mut self, frame: Rect) {
        let prev = self.c.frame();
        if prev == frame {
            return;
        }
        if prev.size != frame.size {
            adebug!(
                from_width = prev.width(),
                to_width = frame.width(),
                "viewport size changed"
            );
            self.c.rotate(frame);
        } else {
            self.c.set_frame(frame);
        }
    }

    pub fn on_pointer_down(&mut self, x: f32, now_ms: u64) {
        self.pointer_x = Some(x);
        self.c.begin_drag(now_ms);
    }

    pub fn on_pointer_move(&mut self, x: f32, now_ms: u64) {
        let Some(last) = self.pointer_x.replace(x) else {
            return;
        };
        self.c.drag_by(x - last, now_ms);
    }

    pub fn on_pointer_up(&mut self, now_ms: u64) {
        if self.pointer_x.take().is_none() {
            return;
        }
        self.c.end_drag(now_ms);
    }

    /// Advances the controller by one frame.
    ///
    /// Returns `true` when the carousel moved or deferred work ran, i.e. a redraw is due.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let ran = self.c.run_deferred() > 0;
        let moved = self.c.tick(now_ms);
        ran || moved
    }

    /// Pages to the item after the current center, if any. Returns the target.
    pub fn next_page(&mut self, animated: bool) -> Option<ItemIndex> {
        self.step(1, animated)
    }

    /// Pages to the item before the current center, if any. Returns the target.
    pub fn previous_page(&mut self, animated: bool) -> Option<ItemIndex> {
        self.step(-1, animated)
    }

    fn step(&mut self, delta: isize, animated: bool) -> Option<ItemIndex> {
        if self.is_dragging() {
            return None;
        }
        let center = self
            .c
            .current_center_index()
            .or(self.c.last_center_index())?;
        let ds = self.c.data_source()?;
        let ordinal = ds.ordinal_of(center)?.checked_add_signed(delta)?;
        let target = ds.index_at(ordinal)?;
        self.c
            .scroll_to_item(target, ScrollPosition::CenteredHorizontally, animated);
        Some(target)
    }

    pub fn capture_center_anchor<K>(
        &self,
        key_for: impl FnOnce(ItemIndex) -> K,
    ) -> Option<CenterAnchor<K>> {
        capture_center_anchor(&self.c, key_for)
    }

    /// Reloads the data and re-centers the anchored item.
    ///
    /// Returns `true` when the anchor was found in the new data.
    pub fn reload_with_anchor<K>(
        &mut self,
        anchor: &CenterAnchor<K>,
        key_to_index: impl FnOnce(&K) -> Option<ItemIndex>,
    ) -> bool {
        self.c.reload_data();
        apply_center_anchor(&mut self.c, anchor, key_to_index)
    }
}
