//! The fixed drawing: one canvas, nine items.

use easel_canvas::prelude::*;

pub const TITLE: &str = "Basic Graphical Primitives";
pub const GEOMETRY: &str = "450x300";

pub const CANVAS_WIDTH: f32 = 450.0;
pub const CANVAS_HEIGHT: f32 = 300.0;

pub fn build_canvas() -> Result<Canvas, ColorParseError> {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT, Color::white());

    // Line
    canvas.create_line(30.0, 30.0, 130.0, 30.0, LineOptions::default().width(2.0));

    // Rectangle and square
    canvas.create_rectangle(
        30.0, 60.0, 130.0, 110.0,
        ShapeOptions::default().outline(Color::parse("blue")?).width(2.0),
    );
    canvas.create_rectangle(
        30.0, 140.0, 90.0, 200.0,
        ShapeOptions::default().outline(Color::parse("black")?).width(2.0),
    );

    // Circle
    canvas.create_oval(
        170.0, 60.0, 250.0, 140.0,
        ShapeOptions::default().outline(Color::parse("green")?).width(2.0),
    );

    // Semicircle: upper half arc closed by its diameter
    canvas.create_arc(
        170.0, 150.0, 250.0, 230.0,
        ArcOptions::default().start(0.0).extent(180.0).style(ArcStyle::Arc).width(2.0),
    );
    canvas.create_line(170.0, 190.0, 250.0, 190.0, LineOptions::default().width(2.0));

    // Chord
    canvas.create_arc(
        190.0, 210.0, 240.0, 270.0,
        ArcOptions::default().style(ArcStyle::Chord).fill(Color::parse("orange")?).width(2.0),
    );

    // Pie slice
    canvas.create_arc(
        280.0, 260.0, 330.0, 200.0,
        ArcOptions::default().style(ArcStyle::PieSlice).fill(Color::parse("blue")?).width(2.0),
    );

    canvas.create_text(230.0, 30.0, "Basic Graphics", TextOptions::default());

    Ok(canvas)
}
