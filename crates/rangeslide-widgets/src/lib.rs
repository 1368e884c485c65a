//! Widget implementations for the Rangeslide toolkit.

pub mod config;
pub mod geometry;
pub mod range_bar;

pub use config::{ConfigError, HeightPolicy, SliderConfig};
pub use geometry::SlotGeometry;
pub use range_bar::{IndexOutOfRange, RangeBar, SlideChanged, StateError};
