use crate::{CarouselCell, ItemIndex};

/// Supplies item counts and cell objects to a [`crate::CarouselSurface`].
///
/// Items of all sections are laid out back to back in section order. The position of an item
/// in that strip is its *ordinal*.
pub trait CarouselDataSource {
    type Cell: CarouselCell;

    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_items(&self, section: usize) -> usize;

    fn cell_for_item(&mut self, index: ItemIndex) -> Self::Cell;

    fn total_items(&self) -> usize {
        (0..self.number_of_sections()).fold(0usize, |acc, s| {
            acc.saturating_add(self.number_of_items(s))
        })
    }

    /// Maps an index to its ordinal. Returns `None` for indexes outside the current data.
    fn ordinal_of(&self, index: ItemIndex) -> Option<usize> {
        if index.section >= self.number_of_sections() {
            return None;
        }
        if index.item >= self.number_of_items(index.section) {
            return None;
        }
        let before = (0..index.section).fold(0usize, |acc, s| {
            acc.saturating_add(self.number_of_items(s))
        });
        Some(before.saturating_add(index.item))
    }

    /// Maps an ordinal back to its index.
    fn index_at(&self, ordinal: usize) -> Option<ItemIndex> {
        let mut remaining = ordinal;
        for section in 0..self.number_of_sections() {
            let n = self.number_of_items(section);
            if remaining < n {
                return Some(ItemIndex::new(section, remaining));
            }
            remaining -= n;
        }
        None
    }
}
