//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Pointer events unify mouse and touch: the host translates whatever the
/// platform delivers into these before dispatching to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer pressed (mouse button down or touch start)
    PointerDown {
        /// Position of the press
        position: Point,
    },
    /// Pointer moved while pressed
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer released (mouse button up or touch end)
    PointerUp {
        /// Position of the release
        position: Point,
    },
}

impl Event {
    /// The position carried by this event.
    #[must_use]
    pub const fn position(&self) -> Point {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => *position,
        }
    }
}
