//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, Point, Rect};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted, and in which order)
/// - Serialization (ship commands to a remote or GPU backend)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());

        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::GRAY);
        canvas.fill_circle(Point::new(5.0, 5.0), 2.0, Color::BLACK);
        canvas.draw_text("hi", Point::new(1.0, 1.0), &TextStyle::default());

        assert_eq!(canvas.command_count(), 3);
        assert!(matches!(canvas.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Circle { .. }));
        assert!(matches!(canvas.commands()[2], DrawCommand::Text { .. }));
    }

    #[test]
    fn test_recording_canvas_take_commands() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_recording_canvas_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 1.0, Color::BLACK);
        canvas.clear();
        assert_eq!(canvas.command_count(), 0);
    }
}
