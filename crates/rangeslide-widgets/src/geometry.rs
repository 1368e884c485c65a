//! Slot geometry for the range bar.
//!
//! Computed once per layout pass from the control bounds and configuration.
//! Everything here is a pure function of its inputs.

use crate::config::SliderConfig;
use rangeslide_core::Rect;

/// Fixed pixel positions of the slots plus the derived track metrics.
///
/// Slots are centered within `slot_count` equal-width cells spanning the
/// padded width, so the first and last slot sit half a cell in from the edges:
///
/// ```text
/// Example for 4 slots:
///
/// ____o____|____o____|____o____|____o____
/// --cell---
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGeometry {
    slot_positions: Vec<f32>,
    track_y: f32,
    thumb_radius: f32,
    slot_radius: f32,
    bar_half_height: f32,
}

impl SlotGeometry {
    /// Compute the geometry for the given bounds and configuration.
    ///
    /// `config.slot_count()` is always >= 2 (enforced at configuration time).
    #[must_use]
    pub fn compute(bounds: Rect, config: &SliderConfig) -> Self {
        let padded = bounds.inset(config.padding());
        let spacing = padded.width / config.slot_count() as f32;

        let mut slot_positions = Vec::with_capacity(config.slot_count());
        let mut x = padded.x + spacing / 2.0;
        for _ in 0..config.slot_count() {
            slot_positions.push(x);
            x += spacing;
        }

        Self {
            slot_positions,
            track_y: padded.center().y,
            thumb_radius: bounds.height * config.thumb_radius_percent(),
            slot_radius: bounds.height * config.slot_radius_percent(),
            bar_half_height: bounds.height * config.bar_height_percent() / 2.0,
        }
    }

    /// X coordinates of the slots, in increasing order.
    #[must_use]
    pub fn slot_positions(&self) -> &[f32] {
        &self.slot_positions
    }

    /// X coordinate of a slot.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the slot count this geometry was
    /// computed for.
    #[must_use]
    pub fn slot_x(&self, index: usize) -> f32 {
        self.slot_positions[index]
    }

    /// X coordinate of the first slot.
    #[must_use]
    pub fn first_x(&self) -> f32 {
        self.slot_positions[0]
    }

    /// X coordinate of the last slot.
    #[must_use]
    pub fn last_x(&self) -> f32 {
        self.slot_positions[self.slot_positions.len() - 1]
    }

    /// Vertical center of the track.
    #[must_use]
    pub const fn track_y(&self) -> f32 {
        self.track_y
    }

    /// Thumb radius in pixels.
    #[must_use]
    pub const fn thumb_radius(&self) -> f32 {
        self.thumb_radius
    }

    /// Slot marker radius in pixels.
    #[must_use]
    pub const fn slot_radius(&self) -> f32 {
        self.slot_radius
    }

    /// Half the track bar height in pixels.
    #[must_use]
    pub const fn bar_half_height(&self) -> f32 {
        self.bar_half_height
    }

    /// Whether an x coordinate lies within the slot range.
    #[must_use]
    pub fn in_track_range(&self, x: f32) -> bool {
        x >= self.first_x() && x <= self.last_x()
    }

    /// Whether a y coordinate lies within the thumb's vertical hit band
    /// (twice the thumb radius on either side of the track).
    #[must_use]
    pub fn in_hit_band(&self, y: f32) -> bool {
        (y - self.track_y).abs() <= 2.0 * self.thumb_radius
    }

    /// Index of the slot nearest to an x coordinate.
    ///
    /// Ties resolve to the lower index: the scan keeps the first minimum it
    /// finds, comparing with strict `<`.
    #[must_use]
    pub fn nearest_slot(&self, x: f32) -> usize {
        let mut min = f32::MAX;
        let mut nearest = 0;
        for (i, &slot_x) in self.slot_positions.iter().enumerate() {
            let dx = (x - slot_x).abs();
            if dx < min {
                min = dx;
                nearest = i;
            }
        }
        nearest
    }
}
