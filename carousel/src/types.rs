use crate::CarouselError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in toolkit points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Horizontal margin reserved on both edges of the carousel.
///
/// Always finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f32", into = "f32"))]
pub struct Inset(f32);

impl Inset {
    pub const ZERO: Self = Self(0.0);

    pub fn new(value: f32) -> Result<Self, CarouselError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CarouselError::InvalidInset(value));
        }
        Ok(Self(value))
    }

    /// Like [`Inset::new`], but maps negative, NaN and infinite values to zero.
    pub fn saturating(value: f32) -> Self {
        Self::new(value).unwrap_or(Self::ZERO)
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Inset {
    type Error = CarouselError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Inset> for f32 {
    fn from(inset: Inset) -> Self {
        inset.0
    }
}

/// Position of an item: section plus position within the section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemIndex {
    pub section: usize,
    pub item: usize,
}

impl ItemIndex {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Shorthand for an item in section 0.
    pub fn item(item: usize) -> Self {
        Self { section: 0, item }
    }
}

/// Where `scroll_to_item` should place the target item in the visible surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPosition {
    #[default]
    CenteredHorizontally,
    Left,
    Right,
}

/// Interaction phase of the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Decelerating,
}

/// Window around the inset boundary inside which an item counts as centered.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CenterTolerance {
    /// A fixed distance in points.
    Fixed(f32),
    /// A fraction of the current item width.
    Fraction(f32),
}

impl CenterTolerance {
    pub fn resolve(self, item_width: f32) -> f32 {
        match self {
            Self::Fixed(v) => v.max(0.0),
            Self::Fraction(f) => (f * item_width).max(0.0),
        }
    }
}

impl Default for CenterTolerance {
    fn default() -> Self {
        Self::Fraction(0.1)
    }
}
