//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on paging geometry and scroll state. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A frame-driven `Controller` that turns pointer samples into drags, treats viewport size
//!   changes as rotations and pumps deferred work and animations
//! - Key-based center anchors that keep the focused item across inserts and removals
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod controller;

#[cfg(test)]
mod tests;

pub use anchor::{CenterAnchor, apply_center_anchor, capture_center_anchor};
pub use controller::Controller;
