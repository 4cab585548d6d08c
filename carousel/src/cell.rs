use crate::Inset;

/// Geometry handed to a cell when the carousel asks it to rescale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleContext {
    /// The carousel inset. A cell whose left edge sits exactly on it is centered.
    pub inset: Inset,
    /// The cell's left edge, relative to the carousel's frame.
    pub origin_x: f32,
    /// The cell width (the current item width).
    pub width: f32,
}

impl ScaleContext {
    /// Signed distance between the cell's left edge and the centered position.
    pub fn displacement(&self) -> f32 {
        self.origin_x - self.inset.get()
    }

    /// `1.0` when centered, falling linearly to `0.0` one item width away.
    pub fn proximity(&self) -> f32 {
        if self.width <= f32::EPSILON {
            return 0.0;
        }
        ((self.width - self.displacement().abs()) / self.width).clamp(0.0, 1.0)
    }
}

/// Optional capability for cells that react to their distance from center.
pub trait ScalingCell {
    fn scale(&mut self, ctx: &ScaleContext);
}

/// A cell rendered by the carousel.
///
/// Cells opt into scaling by returning `Some(self)` from [`CarouselCell::scaling`]. Cells that
/// keep the default are left untouched by scale passes.
pub trait CarouselCell {
    fn scaling(&mut self) -> Option<&mut dyn ScalingCell> {
        None
    }
}

/// Resulting transform of a [`ScaleCurve`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellTransform {
    pub scale: f32,
    pub alpha: f32,
}

impl CellTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        alpha: 1.0,
    };
}

/// A linear falloff curve for scaling cells.
///
/// `scale = minimum_scale + proximity / divisor`, clamped to `minimum_scale..=1.0`. Alpha uses
/// the same falloff from `minimum_alpha` when `alpha_enabled` is set.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleCurve {
    pub minimum_scale: f32,
    pub minimum_alpha: f32,
    pub divisor: f32,
    pub alpha_enabled: bool,
}

impl Default for ScaleCurve {
    fn default() -> Self {
        Self {
            minimum_scale: 0.9,
            minimum_alpha: 0.85,
            divisor: 10.0,
            alpha_enabled: true,
        }
    }
}

impl ScaleCurve {
    pub fn transform(&self, ctx: &ScaleContext) -> CellTransform {
        let divisor = if self.divisor > f32::EPSILON {
            self.divisor
        } else {
            1.0
        };
        let step = ctx.proximity() / divisor;
        let scale = (self.minimum_scale + step).clamp(self.minimum_scale.min(1.0), 1.0);
        let alpha = if self.alpha_enabled {
            (self.minimum_alpha + step).clamp(self.minimum_alpha.min(1.0), 1.0)
        } else {
            1.0
        };
        CellTransform { scale, alpha }
    }
}
