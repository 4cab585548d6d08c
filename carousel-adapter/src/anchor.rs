use carousel::{CarouselDataSource, CarouselSurface, ItemIndex, ScrollPosition};

/// Identifies the centered item by a stable key rather than by position.
///
/// Typical use cases:
/// - items inserted or removed before the centered one during a reload
/// - reordering, where the focused card should stay focused
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterAnchor<K> {
    pub key: K,
}

/// Captures an anchor for the current (or else remembered) center item.
///
/// Returns `None` if neither is known.
pub fn capture_center_anchor<D: CarouselDataSource, K>(
    c: &CarouselSurface<D>,
    key_for: impl FnOnce(ItemIndex) -> K,
) -> Option<CenterAnchor<K>> {
    let index = c.current_center_index().or(c.last_center_index())?;
    Some(CenterAnchor { key: key_for(index) })
}

/// Re-centers a previously captured anchor without animation.
///
/// The adapter must provide a `key_to_index` mapping for the *current* dataset.
///
/// Returns `true` when the anchor was successfully applied.
pub fn apply_center_anchor<D: CarouselDataSource, K>(
    c: &mut CarouselSurface<D>,
    anchor: &CenterAnchor<K>,
    key_to_index: impl FnOnce(&K) -> Option<ItemIndex>,
) -> bool {
    let Some(index) = key_to_index(&anchor.key) else {
        return false;
    };
    let known = c
        .data_source()
        .is_some_and(|ds| ds.ordinal_of(index).is_some());
    if !known {
        return false;
    }
    c.scroll_to_item(index, ScrollPosition::CenteredHorizontally, false);
    true
}
