//! A headless paging carousel engine.
//!
//! For adapter-level utilities (pointer input, frame driving, center anchors), see the
//! `carousel-adapter` crate.
//!
//! The carousel pages one item at a time while giving continuous scale feedback: the centered
//! item is full size and its neighbours shrink with their distance from center. Paging and
//! smoothness are reconciled by a hidden proxy surface that scrolls continuously; its offset is
//! mirrored onto the paging surface on every change.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - the carousel frame and its parent (`set_frame`, `attach`)
//! - drag deltas and a millisecond clock (`begin_drag`, `drag_by`, `end_drag`, `tick`)
//! - a [`CarouselDataSource`] producing cells, optionally [`ScalingCell`]s
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod cell;
mod error;
mod layout;
mod options;
mod scroll;
mod source;
mod state;
mod surface;
mod tween;
mod types;


pub use cell::{CarouselCell, CellTransform, ScaleContext, ScaleCurve, ScalingCell};
pub use error::CarouselError;
pub use layout::{PagingLayout, ScrollDirection, item_width_for};
pub use options::{CarouselOptions, OnScrollCallback, OnSettleCallback};
pub use scroll::ScrollSurface;
pub use source::CarouselDataSource;
pub use state::CarouselSnapshot;
pub use surface::{CarouselSurface, VisibleCell};
pub use tween::{Easing, Tween};
pub use types::{
    CenterTolerance, EdgeInsets, Inset, ItemIndex, Phase, Point, Rect, ScrollPosition, Size,
};
