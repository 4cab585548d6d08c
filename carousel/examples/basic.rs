// Example: drive a carousel with a simulated swipe and print the scale of each visible cell.
use carousel::{
    CarouselCell, CarouselDataSource, CarouselSurface, CellTransform, Inset, ItemIndex, Rect,
    ScaleContext, ScaleCurve, ScalingCell,
};

struct Card {
    index: ItemIndex,
    transform: CellTransform,
}

impl ScalingCell for Card {
    fn scale(&mut self, ctx: &ScaleContext) {
        self.transform = ScaleCurve::default().transform(ctx);
    }
}

impl CarouselCell for Card {
    fn scaling(&mut self) -> Option<&mut dyn ScalingCell> {
        Some(self)
    }
}

struct Cards(usize);

impl CarouselDataSource for Cards {
    type Cell = Card;

    fn number_of_items(&self, _section: usize) -> usize {
        self.0
    }

    fn cell_for_item(&mut self, index: ItemIndex) -> Card {
        Card {
            index,
            transform: CellTransform::IDENTITY,
        }
    }
}

fn main() -> Result<(), carousel::CarouselError> {
    let frame = Rect::new(0.0, 0.0, 375.0, 200.0);
    let mut c = CarouselSurface::with_inset(frame, Inset::new(20.0)?);
    c.set_data_source(Cards(8));
    c.attach(Some(Rect::new(0.0, 0.0, 375.0, 812.0)));

    // Swipe left by ~60% of a card, 16ms per frame.
    let mut now_ms = 0u64;
    c.begin_drag(now_ms);
    for _ in 0..10 {
        now_ms += 16;
        c.drag_by(-20.0, now_ms);
    }
    c.end_drag(now_ms);

    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
        let scales: Vec<String> = c
            .visible_cells()
            .iter()
            .map(|vc| format!("#{}={:.3}", vc.cell.index.item, vc.cell.transform.scale))
            .collect();
        println!("t={now_ms}ms off={:.1} {}", c.content_offset().x, scales.join(" "));
    }

    println!(
        "settled: center={:?} phase={:?}",
        c.current_center_index(),
        c.phase()
    );
    Ok(())
}
