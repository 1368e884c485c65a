//! Draw commands.
//!
//! All rendering reduces to these primitives. A backend replays the command
//! list in order; later commands occlude earlier ones.

use crate::widget::TextStyle;
use crate::{Color, Point, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },

    /// Draw a filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill color
        color: Color,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}
