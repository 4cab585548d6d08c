// Example: an adapter loop that swipes through cards, then rotates the device.
use carousel::{CarouselCell, CarouselDataSource, CarouselOptions, Inset, ItemIndex, Rect};
use carousel_adapter::Controller;

struct Card;

impl CarouselCell for Card {}

struct Cards(usize);

impl CarouselDataSource for Cards {
    type Cell = Card;

    fn number_of_items(&self, _section: usize) -> usize {
        self.0
    }

    fn cell_for_item(&mut self, _index: ItemIndex) -> Card {
        Card
    }
}

fn main() -> Result<(), carousel::CarouselError> {
    let portrait = Rect::new(0.0, 0.0, 375.0, 200.0);
    let options = CarouselOptions::new(Inset::new(24.0)?).with_on_settle(Some(
        |center: Option<ItemIndex>| println!("settled on {center:?}"),
    ));
    let mut c = Controller::new(portrait, portrait, options, Cards(6));

    let mut now_ms = 0u64;
    for _ in 0..2 {
        // A quick flick to the left.
        c.on_pointer_down(300.0, now_ms);
        for x in [270.0, 230.0, 180.0] {
            now_ms += 16;
            c.on_pointer_move(x, now_ms);
        }
        c.on_pointer_up(now_ms);
        while c.tick(now_ms) {
            now_ms += 16;
        }
    }

    c.on_viewport(Rect::new(0.0, 0.0, 812.0, 375.0));
    now_ms += 16;
    c.tick(now_ms);
    println!(
        "after rotation: item_width={} center={:?}",
        c.surface().item_width(),
        c.surface().current_center_index()
    );
    Ok(())
}
