//! Core types and traits for the Rangeslide widget toolkit.
//!
//! This crate provides the substrate widgets are written against:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Layout constraints: [`Constraints`] (tight / loose / unbounded axes)
//! - Pointer input: [`Event`]
//! - The [`Widget`] lifecycle trait and [`Canvas`] paint abstraction
//! - [`DrawCommand`] and [`RecordingCanvas`] for testable rendering

mod canvas;
mod color;
mod constraints;
mod draw;
mod event;
mod geometry;
pub mod widget;

pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::Event;
pub use geometry::{Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, TextAlign, TextStyle, TypeId, Widget};
