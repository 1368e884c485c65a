//! Distance picker demo.
//!
//! Drives a five-slot range bar through a simulated drag and prints the
//! resulting draw commands, the way a host backend would replay them.
//!
//! Run: `cargo run --example distance_picker`

use rangeslide_core::widget::Widget;
use rangeslide_core::{Constraints, Event, Point, Rect, RecordingCanvas, Size};
use rangeslide_widgets::RangeBar;

fn main() {
    let mut bar = RangeBar::new().with_labels(vec![
        "1km".to_string(),
        "2km".to_string(),
        "3km".to_string(),
        "4km".to_string(),
        "5km".to_string(),
    ]);
    bar.set_on_slide(|index, label| {
        println!("selected slot {index} ({label})");
    });

    let size = bar.measure(Constraints::loose(Size::new(420.0, 120.0)));
    bar.layout(Rect::from_size(size));
    println!("laid out at {}x{}", size.width, size.height);

    // Grab the thumb and drag it most of the way to the right.
    for event in [
        Event::PointerDown {
            position: Point::new(42.0, size.height / 2.0),
        },
        Event::PointerMove {
            position: Point::new(250.0, size.height / 2.0),
        },
        Event::PointerUp {
            position: Point::new(350.0, size.height / 2.0),
        },
    ] {
        bar.event(&event);
    }

    let mut canvas = RecordingCanvas::new();
    bar.paint(&mut canvas);
    println!("\ndraw commands:");
    for command in canvas.commands() {
        println!("  {command:?}");
    }
}
