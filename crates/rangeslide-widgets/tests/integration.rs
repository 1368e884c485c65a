//! Integration tests for rangeslide-widgets.
//!
//! These tests drive the range bar through the full widget lifecycle the way
//! a host would: measure, layout, paint, pointer events.

use rangeslide_core::widget::Widget;
use rangeslide_core::{
    Color, Constraints, DrawCommand, Event, Point, Rect, RecordingCanvas, Size,
};
use rangeslide_widgets::{HeightPolicy, RangeBar, SlideChanged, SliderConfig, StateError};
use std::sync::{Arc, Mutex};

fn pointer_down(x: f32, y: f32) -> Event {
    Event::PointerDown {
        position: Point::new(x, y),
    }
}

fn pointer_move(x: f32, y: f32) -> Event {
    Event::PointerMove {
        position: Point::new(x, y),
    }
}

fn pointer_up(x: f32, y: f32) -> Event {
    Event::PointerUp {
        position: Point::new(x, y),
    }
}

// =============================================================================
// Full Lifecycle
// =============================================================================

#[test]
fn test_distance_picker_scenario() {
    // Five distances, drag from the first slot all the way to the last.
    let mut bar = RangeBar::new().with_labels(vec![
        "1km".to_string(),
        "2km".to_string(),
        "3km".to_string(),
        "4km".to_string(),
        "5km".to_string(),
    ]);

    let notified = Arc::new(Mutex::new(Vec::<(usize, String)>::new()));
    {
        let notified = Arc::clone(&notified);
        bar.set_on_slide(move |index, label| {
            notified
                .lock()
                .expect("lock")
                .push((index, label.to_string()));
        });
    }

    let size = bar.measure(Constraints::loose(Size::new(210.0, 120.0)));
    assert_eq!(size, Size::new(210.0, 50.0));
    bar.layout(Rect::new(0.0, 0.0, size.width, 40.0));

    bar.event(&pointer_down(21.0, 20.0));
    bar.event(&pointer_move(100.0, 22.0));
    bar.event(&pointer_move(185.0, 18.0));
    let message = bar.event(&pointer_up(185.0, 18.0)).expect("index changed");
    let changed = message.downcast::<SlideChanged>().expect("slide message");

    assert_eq!(*changed, SlideChanged {
        index: 4,
        label: "5km".to_string(),
    });
    assert_eq!(bar.current_index(), 4);
    assert_eq!(*notified.lock().expect("lock"), vec![(4, "5km".to_string())]);
}

#[test]
fn test_paint_reflects_drag_in_progress() {
    let mut bar = RangeBar::new();
    bar.layout(Rect::new(0.0, 0.0, 210.0, 40.0));
    bar.event(&pointer_down(21.0, 20.0));
    bar.event(&pointer_move(130.0, 20.0));

    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);

    // The thumb follows the pointer mid-drag, before any snapping.
    let thumb = canvas
        .commands()
        .iter()
        .rev()
        .nth(1)
        .expect("thumb command");
    match thumb {
        DrawCommand::Circle { center, radius, .. } => {
            assert_eq!(center.x, 130.0);
            assert_eq!(*radius, 10.0);
        }
        other => panic!("expected circle, got {other:?}"),
    }

    // Slots at 21, 63 and 105 are left of the pointer; 3 filled markers plus
    // thumb and highlight makes 10 circles total.
    let circles = canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Circle { .. }))
        .count();
    assert_eq!(circles, 10);
}

#[test]
fn test_release_snaps_and_repaints_at_slot() {
    let mut bar = RangeBar::new();
    bar.layout(Rect::new(0.0, 0.0, 210.0, 40.0));
    bar.event(&pointer_down(21.0, 20.0));
    bar.event(&pointer_move(110.0, 20.0));
    bar.event(&pointer_up(110.0, 20.0));
    assert_eq!(bar.current_index(), 2);

    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);
    let thumb = canvas
        .commands()
        .iter()
        .rev()
        .nth(1)
        .expect("thumb command");
    match thumb {
        DrawCommand::Circle { center, .. } => assert_eq!(center.x, 105.0),
        other => panic!("expected circle, got {other:?}"),
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_custom_config_end_to_end() {
    let mut config = SliderConfig::new();
    config.set_slot_count(3).expect("valid slot count");
    config
        .set_thumb_radius_percent(0.5)
        .expect("valid percent");
    config.set_filled_color(Color::from_hex("#ff0000").expect("valid hex"));
    config.set_height_policy(HeightPolicy::Fixed(30.0));

    let mut bar = RangeBar::with_config(config);
    assert_eq!(bar.measure(Constraints::unbounded()).height, 30.0);

    // 3 slots over width 300: slots at 50, 150, 250; thumb radius 15.
    bar.layout(Rect::new(0.0, 0.0, 300.0, 30.0));
    bar.event(&pointer_down(50.0, 15.0));
    bar.event(&pointer_up(240.0, 15.0));
    assert_eq!(bar.current_index(), 2);

    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);
    let thumb = canvas
        .commands()
        .iter()
        .rev()
        .nth(1)
        .expect("thumb command");
    match thumb {
        DrawCommand::Circle { center, radius, color } => {
            assert_eq!(center.x, 250.0);
            assert_eq!(*radius, 15.0);
            assert_eq!(*color, Color::rgb(1.0, 0.0, 0.0));
        }
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn test_shrinking_slot_count_after_selection() {
    let mut bar = RangeBar::new();
    bar.layout(Rect::new(0.0, 0.0, 210.0, 40.0));
    bar.event(&pointer_down(21.0, 20.0));
    bar.event(&pointer_up(189.0, 20.0));
    assert_eq!(bar.current_index(), 4);

    bar.set_slot_count(2).expect("valid slot count");
    assert_eq!(bar.current_index(), 1);

    // Geometry rebuilt for 2 slots: 52.5 and 157.5 over width 210.
    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);
    let thumb = canvas
        .commands()
        .iter()
        .rev()
        .nth(1)
        .expect("thumb command");
    match thumb {
        DrawCommand::Circle { center, .. } => assert_eq!(center.x, 157.5),
        other => panic!("expected circle, got {other:?}"),
    }
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_state_survives_reconstruction() {
    let mut bar = RangeBar::new();
    bar.layout(Rect::new(0.0, 0.0, 210.0, 40.0));
    bar.event(&pointer_down(21.0, 20.0));
    bar.event(&pointer_up(150.0, 20.0));
    assert_eq!(bar.current_index(), 3);

    let saved = bar.save_state();
    drop(bar);

    let mut revived = RangeBar::new();
    revived.restore_state(&saved).expect("valid state");
    revived.layout(Rect::new(0.0, 0.0, 210.0, 40.0));
    assert_eq!(revived.current_index(), 3);

    let mut canvas = RecordingCanvas::new();
    revived.paint(&mut canvas);
    let thumb = canvas
        .commands()
        .iter()
        .rev()
        .nth(1)
        .expect("thumb command");
    match thumb {
        DrawCommand::Circle { center, .. } => assert_eq!(center.x, 147.0),
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn test_restore_rejects_foreign_payload() {
    let mut bar = RangeBar::new();
    assert_eq!(
        bar.restore_state(br#"{"unexpected": true}"#),
        Err(StateError::Malformed)
    );
}
