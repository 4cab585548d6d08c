use crate::ItemIndex;

/// A lightweight, serializable snapshot of where a carousel is scrolled to.
///
/// `center` wins on restore when it still exists in the data; `offset_x` is the fallback.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub center: Option<ItemIndex>,
    pub offset_x: f32,
}
