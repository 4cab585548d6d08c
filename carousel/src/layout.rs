use crate::{EdgeInsets, Inset, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    Vertical,
    Horizontal,
}

/// Flow-layout configuration for a single-row paging carousel.
///
/// `prepare` is re-run on every layout pass. It overwrites whatever the fields held before, so
/// the layout is a pure function of `(inset, container)`:
/// - item size is `(container.width - 2 * inset, container.height)`
/// - horizontal scrolling with paging enabled
/// - zero line/inter-item spacing, zero header/footer
/// - section margins `(0, inset, 0, inset)`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingLayout {
    pub inset: Inset,
    pub item_size: Size,
    pub scroll_direction: ScrollDirection,
    pub paging_enabled: bool,
    pub minimum_line_spacing: f32,
    pub minimum_interitem_spacing: f32,
    pub section_margins: EdgeInsets,
    pub header_size: Size,
    pub footer_size: Size,
}

impl PagingLayout {
    pub fn new(inset: Inset) -> Self {
        Self {
            inset,
            item_size: Size::ZERO,
            scroll_direction: ScrollDirection::default(),
            paging_enabled: false,
            minimum_line_spacing: 0.0,
            minimum_interitem_spacing: 0.0,
            section_margins: EdgeInsets::ZERO,
            header_size: Size::ZERO,
            footer_size: Size::ZERO,
        }
    }

    pub fn prepare(&mut self, container: Size) {
        let inset = self.inset.get();
        self.item_size = Size::new(item_width_for(container.width, self.inset), container.height);

        self.scroll_direction = ScrollDirection::Horizontal;
        self.paging_enabled = true;

        self.minimum_line_spacing = 0.0;
        self.minimum_interitem_spacing = 0.0;

        self.section_margins = EdgeInsets::new(0.0, inset, 0.0, inset);
        self.header_size = Size::ZERO;
        self.footer_size = Size::ZERO;
    }

    pub fn item_width(&self) -> f32 {
        self.item_size.width
    }
}

/// Item width for a container of `width` points: `width - 2 * inset`, never negative.
pub fn item_width_for(width: f32, inset: Inset) -> f32 {
    (width - inset.get() * 2.0).max(0.0)
}
