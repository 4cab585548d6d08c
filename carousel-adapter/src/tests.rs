use crate::*;

use carousel::{
    CarouselCell, CarouselDataSource, CarouselOptions, Inset, ItemIndex, Phase, Rect,
    ScrollPosition,
};
use std::collections::HashMap;

struct Card;

impl CarouselCell for Card {}

/// Items identified by stable ids.
struct Ids(Vec<u64>);

impl CarouselDataSource for Ids {
    type Cell = Card;

    fn number_of_items(&self, _section: usize) -> usize {
        self.0.len()
    }

    fn cell_for_item(&mut self, _index: ItemIndex) -> Card {
        Card
    }
}

fn controller(ids: Vec<u64>) -> Controller<Ids> {
    let frame = Rect::new(0.0, 0.0, 375.0, 200.0);
    let options = CarouselOptions::new(Inset::new(20.0).unwrap()).with_deceleration_ms(100);
    Controller::new(frame, frame, options, Ids(ids))
}

#[test]
fn pointer_swipe_pages_forward() {
    let mut c = controller((0..5).collect());
    c.on_pointer_down(300.0, 0);
    for (i, x) in [280.0, 250.0, 210.0, 160.0].into_iter().enumerate() {
        c.on_pointer_move(x, 16 * (i as u64 + 1));
    }
    assert_eq!(c.surface().phase(), Phase::Dragging);
    assert_eq!(c.surface().content_offset().x, 140.0);
    c.on_pointer_up(70);

    let mut now = 70;
    while c.surface().is_animating() {
        now += 16;
        assert!(c.tick(now));
    }
    assert_eq!(c.surface().phase(), Phase::Idle);
    assert_eq!(c.surface().current_center_index(), Some(ItemIndex::item(1)));
}

#[test]
fn pointer_move_without_down_is_ignored() {
    let mut c = controller((0..5).collect());
    c.on_pointer_move(100.0, 16);
    c.on_pointer_up(32);
    assert_eq!(c.surface().content_offset().x, 0.0);
    assert_eq!(c.surface().phase(), Phase::Idle);
}

#[test]
fn viewport_resize_restores_center_on_next_tick() {
    let mut c = controller((0..5).collect());
    c.surface_mut()
        .scroll_to_item(ItemIndex::item(2), ScrollPosition::CenteredHorizontally, false);

    c.on_viewport(Rect::new(0.0, 0.0, 812.0, 375.0));
    assert!(c.surface().has_deferred());
    assert!(c.tick(16));

    let s = c.surface();
    assert_eq!(s.item_width(), 772.0);
    assert_eq!(s.current_center_index(), Some(ItemIndex::item(2)));
    assert_eq!(s.proxy().unwrap().offset_x(), 2.0 * 772.0);
}

#[test]
fn viewport_move_is_not_a_rotation() {
    let mut c = controller((0..5).collect());
    c.on_viewport(Rect::new(0.0, 100.0, 375.0, 200.0));
    assert!(!c.surface().has_deferred());
    assert_eq!(c.surface().proxy().unwrap().frame(), Rect::new(20.0, 100.0, 335.0, 200.0));
}

#[test]
fn keyboard_paging_stops_at_the_ends() {
    let mut c = controller((0..3).collect());
    assert_eq!(c.previous_page(false), None);
    assert_eq!(c.next_page(false), Some(ItemIndex::item(1)));
    assert_eq!(c.next_page(false), Some(ItemIndex::item(2)));
    assert_eq!(c.next_page(false), None);
    assert_eq!(c.surface().current_center_index(), Some(ItemIndex::item(2)));
    assert_eq!(c.previous_page(true), Some(ItemIndex::item(1)));
    c.tick(1_000);
    assert_eq!(c.surface().current_center_index(), Some(ItemIndex::item(1)));
}

#[test]
fn anchor_keeps_centered_item_across_prepend() {
    let mut c = controller(vec![10, 11, 12, 13]);
    c.next_page(false);
    c.next_page(false);

    let anchor = {
        let ids = &c.surface().data_source().unwrap().0;
        c.capture_center_anchor(|index| ids[index.item]).unwrap()
    };
    assert_eq!(anchor.key, 12);

    // Prepend two items: the anchored item moves from 2 to 4.
    c.surface_mut().data_source_mut().unwrap().0 = vec![1, 2, 10, 11, 12, 13];
    let map: HashMap<u64, usize> = c
        .surface()
        .data_source()
        .unwrap()
        .0
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    assert!(c.reload_with_anchor(&anchor, |k| map.get(k).copied().map(ItemIndex::item)));
    assert_eq!(c.surface().current_center_index(), Some(ItemIndex::item(4)));
}

#[test]
fn anchor_for_removed_item_is_not_applied() {
    let mut c = controller(vec![10, 11, 12]);
    c.next_page(false);
    let anchor = CenterAnchor { key: 11u64 };
    c.surface_mut().data_source_mut().unwrap().0 = vec![10, 12];
    assert!(!c.reload_with_anchor(&anchor, |_| None));
    assert!(!apply_center_anchor(c.surface_mut(), &anchor, |_| Some(ItemIndex::item(7))));
}
