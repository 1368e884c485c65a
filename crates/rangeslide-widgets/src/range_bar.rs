//! Discrete horizontal range bar.
//!
//! A track of evenly spaced slots with a draggable thumb that snaps to the
//! nearest slot on release. Labels render beneath the slots and the portion
//! of the track left of the thumb is drawn filled.

use crate::config::{ConfigError, HeightPolicy, SliderConfig};
use crate::geometry::SlotGeometry;
use rangeslide_core::widget::{Canvas, LayoutResult, TextAlign, TextStyle, TypeId, Widget};
use rangeslide_core::{Color, Constraints, Event, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// Intrinsic width used when the host gives no horizontal bound.
const DEFAULT_WIDTH: f32 = 200.0;
/// Intrinsic height used when the host gives no vertical bound.
const DEFAULT_HEIGHT: f32 = 50.0;
/// Font size for slot labels.
const LABEL_FONT_SIZE: f32 = 10.0;
/// Vertical distance from the bottom of a slot marker to its label baseline.
const LABEL_OFFSET: f32 = 18.0;

/// Message emitted when the thumb settles on a new slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChanged {
    pub index: usize,
    pub label: String,
}

/// Error returned when an index does not address an existing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub slot_count: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for {} slots",
            self.index, self.slot_count
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Error returned when restoring serialized state fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The payload was not valid saved state.
    Malformed,
    /// The payload decoded but its index does not fit the current slot count.
    OutOfRange { index: usize, slot_count: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "malformed saved state"),
            Self::OutOfRange { index, slot_count } => write!(
                f,
                "saved index {index} out of range for {slot_count} slots"
            ),
        }
    }
}

impl std::error::Error for StateError {}

/// Persisted portion of the control state. Geometry and configuration are
/// owned by the host and rebuilt on restore, so only the selection survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct SavedState {
    current_index: usize,
}

type SlideCallback = Box<dyn Fn(usize, &str) + Send + Sync>;

/// Discrete range bar widget.
pub struct RangeBar {
    config: SliderConfig,
    labels: Vec<String>,
    current_index: usize,
    drag_x: f32,
    dragging: bool,
    geometry: Option<SlotGeometry>,
    bounds: Rect,
    repaint_requested: bool,
    on_slide: Option<SlideCallback>,
}

impl fmt::Debug for RangeBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeBar")
            .field("config", &self.config)
            .field("labels", &self.labels)
            .field("current_index", &self.current_index)
            .field("drag_x", &self.drag_x)
            .field("dragging", &self.dragging)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Default for RangeBar {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeBar {
    /// Create a range bar with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SliderConfig::new())
    }

    /// Create a range bar with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SliderConfig) -> Self {
        Self {
            config,
            labels: Vec::new(),
            current_index: 0,
            drag_x: 0.0,
            dragging: false,
            geometry: None,
            bounds: Rect::default(),
            repaint_requested: false,
            on_slide: None,
        }
    }

    /// Set the slot labels (builder style).
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the slot labels. Slots without a label render empty text.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
        self.repaint_requested = true;
    }

    /// Label for a slot, or the empty string when none was provided.
    #[must_use]
    pub fn label(&self, index: usize) -> &str {
        self.labels.get(index).map_or("", String::as_str)
    }

    /// Currently selected slot index.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Select a slot programmatically. Does not notify the slide callback.
    pub fn set_initial_index(&mut self, index: usize) -> Result<(), IndexOutOfRange> {
        if index >= self.config.slot_count() {
            return Err(IndexOutOfRange {
                index,
                slot_count: self.config.slot_count(),
            });
        }
        self.current_index = index;
        self.snap_to_current();
        self.repaint_requested = true;
        Ok(())
    }

    /// Change the number of slots. The current index is clamped to the new
    /// range and the geometry is rebuilt.
    pub fn set_slot_count(&mut self, count: usize) -> Result<(), ConfigError> {
        self.config.set_slot_count(count)?;
        if self.current_index >= count {
            self.current_index = count - 1;
        }
        self.refresh_geometry();
        Ok(())
    }

    /// Set the track bar height as a fraction of the control height.
    pub fn set_bar_height_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.config.set_bar_height_percent(percent)?;
        self.refresh_geometry();
        Ok(())
    }

    /// Set the slot marker radius as a fraction of the control height.
    pub fn set_slot_radius_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.config.set_slot_radius_percent(percent)?;
        self.refresh_geometry();
        Ok(())
    }

    /// Set the thumb radius as a fraction of the control height.
    pub fn set_thumb_radius_percent(&mut self, percent: f32) -> Result<(), ConfigError> {
        self.config.set_thumb_radius_percent(percent)?;
        self.refresh_geometry();
        Ok(())
    }

    /// Set the color of the filled track, slots and thumb.
    pub fn set_filled_color(&mut self, color: Color) {
        self.config.set_filled_color(color);
        self.repaint_requested = true;
    }

    /// Set the color of the unfilled track and slots.
    pub fn set_empty_color(&mut self, color: Color) {
        self.config.set_empty_color(color);
        self.repaint_requested = true;
    }

    /// Set the color of labels for unselected slots.
    pub fn set_normal_text_color(&mut self, color: Color) {
        self.config.set_normal_text_color(color);
        self.repaint_requested = true;
    }

    /// Set the color of the selected slot's label.
    pub fn set_selected_text_color(&mut self, color: Color) {
        self.config.set_selected_text_color(color);
        self.repaint_requested = true;
    }

    /// Set the inner padding on all four sides.
    pub fn set_padding(&mut self, padding: f32) {
        self.config.set_padding(padding);
        self.refresh_geometry();
    }

    /// Set how the control resolves its height when unconstrained.
    pub fn set_height_policy(&mut self, policy: HeightPolicy) {
        self.config.set_height_policy(policy);
    }

    /// Register a callback invoked whenever the selection changes through
    /// user interaction, with the new index and its label.
    pub fn set_on_slide<F>(&mut self, callback: F)
    where
        F: Fn(usize, &str) + Send + Sync + 'static,
    {
        self.on_slide = Some(Box::new(callback));
    }

    /// Serialize the persistent state.
    #[must_use]
    pub fn save_state(&self) -> Vec<u8> {
        let state = SavedState {
            current_index: self.current_index,
        };
        serde_json::to_vec(&state).expect("saved state is always serializable")
    }

    /// Restore previously saved state.
    pub fn restore_state(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        let state: SavedState =
            serde_json::from_slice(bytes).map_err(|_| StateError::Malformed)?;
        if state.current_index >= self.config.slot_count() {
            return Err(StateError::OutOfRange {
                index: state.current_index,
                slot_count: self.config.slot_count(),
            });
        }
        self.current_index = state.current_index;
        self.snap_to_current();
        self.repaint_requested = true;
        Ok(())
    }

    /// Whether a repaint was requested since the last call. Clears the flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    fn refresh_geometry(&mut self) {
        if self.bounds.width > 0.0 && self.bounds.height > 0.0 {
            self.geometry = Some(SlotGeometry::compute(self.bounds, &self.config));
            if !self.dragging {
                self.snap_to_current();
            }
        }
        self.repaint_requested = true;
    }

    fn snap_to_current(&mut self) {
        if let Some(geometry) = &self.geometry {
            self.drag_x = geometry.slot_x(self.current_index);
        }
    }

    fn on_pointer_down(&mut self, position: Point) {
        // A platform view only receives presses dispatched inside its bounds
        if !self.bounds.contains_point(&position) {
            return;
        }
        let Some(geometry) = &self.geometry else {
            return;
        };
        if !geometry.in_hit_band(position.y) {
            return;
        }
        let jump = geometry.in_track_range(position.x);
        self.dragging = true;
        if jump {
            self.drag_x = position.x;
            self.repaint_requested = true;
        }
    }

    fn on_pointer_move(&mut self, position: Point) {
        if !self.dragging {
            return;
        }
        let Some(geometry) = &self.geometry else {
            return;
        };
        // Positions beyond the end slots are ignored rather than clamped
        if geometry.in_track_range(position.x) {
            self.drag_x = position.x;
            self.repaint_requested = true;
        }
    }

    fn on_pointer_up(&mut self, position: Point) -> Option<SlideChanged> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        let Some(geometry) = &self.geometry else {
            return None;
        };
        let nearest = geometry.nearest_slot(position.x);
        let snap_x = geometry.slot_x(nearest);
        self.drag_x = snap_x;
        self.repaint_requested = true;
        if nearest == self.current_index {
            return None;
        }
        self.current_index = nearest;
        let label = self.label(nearest).to_string();
        if let Some(on_slide) = &self.on_slide {
            on_slide(nearest, &label);
        }
        Some(SlideChanged {
            index: nearest,
            label,
        })
    }
}

impl Widget for RangeBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<RangeBar>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            DEFAULT_WIDTH
        };

        let height = if constraints.has_tight_height() {
            constraints.max_height
        } else {
            let base = match self.config.height_policy() {
                HeightPolicy::Auto => DEFAULT_HEIGHT,
                HeightPolicy::Fixed(h) => h,
                HeightPolicy::Fill => {
                    if constraints.has_bounded_height() {
                        constraints.max_height
                    } else {
                        DEFAULT_HEIGHT
                    }
                }
            };
            let desired = base + 2.0 * self.config.padding();
            if constraints.has_bounded_height() {
                desired.min(constraints.max_height)
            } else {
                desired
            }
        };

        constraints.constrain(Size::new(width, height))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.refresh_geometry();
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(geometry) = &self.geometry else {
            return;
        };
        let config = &self.config;
        let track_y = geometry.track_y();
        let label_y = track_y + geometry.slot_radius() + LABEL_OFFSET;

        for &x in geometry.slot_positions() {
            canvas.fill_circle(
                Point::new(x, track_y),
                geometry.slot_radius(),
                config.empty_color(),
            );
        }

        for (i, &x) in geometry.slot_positions().iter().enumerate() {
            let color = if i == self.current_index {
                config.selected_text_color()
            } else {
                config.normal_text_color()
            };
            canvas.draw_text(
                self.label(i),
                Point::new(x, label_y),
                &TextStyle {
                    size: LABEL_FONT_SIZE,
                    color,
                    align: TextAlign::Center,
                },
            );
        }

        for &x in geometry.slot_positions() {
            if x <= self.drag_x {
                canvas.fill_circle(
                    Point::new(x, track_y),
                    geometry.slot_radius(),
                    config.filled_color(),
                );
            }
        }

        let bar_top = track_y - geometry.bar_half_height();
        let bar_height = 2.0 * geometry.bar_half_height();
        canvas.fill_rect(
            Rect::new(
                geometry.first_x(),
                bar_top,
                geometry.last_x() - geometry.first_x(),
                bar_height,
            ),
            config.empty_color(),
        );
        canvas.fill_rect(
            Rect::new(
                geometry.first_x(),
                bar_top,
                (self.drag_x - geometry.first_x()).max(0.0),
                bar_height,
            ),
            config.filled_color(),
        );

        let thumb_center = Point::new(self.drag_x, track_y);
        canvas.fill_circle(thumb_center, geometry.thumb_radius(), config.filled_color());
        canvas.fill_circle(thumb_center, geometry.thumb_radius() / 4.0, Color::WHITE);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let position = event.position();
        match event {
            Event::PointerDown { .. } => {
                self.on_pointer_down(position);
                None
            }
            Event::PointerMove { .. } => {
                self.on_pointer_move(position);
                None
            }
            Event::PointerUp { .. } => self
                .on_pointer_up(position)
                .map(|changed| Box::new(changed) as Box<dyn Any + Send>),
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
