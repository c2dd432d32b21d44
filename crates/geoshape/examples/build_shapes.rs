//! Example: Building shapes directly
//!
//! This example shows how to construct shapes in code, without a shape
//! document, and how a renderer dispatches on them.

use geoshape::{
    ShapeSummary,
    color::Color,
    geo::{LatLong, Length, LengthUnit, Vector2d},
    paint::{Paint, PaintLayer},
    shape::{
        GeoCircle, GeoPolyline, GeoRelativeCircle, GeoRelativePolygon, Shape,
    },
};

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::GeoCircle(circle) => format!(
            "circle of {} around {}",
            circle.radius(),
            circle.centre()
        ),
        Shape::GeoPolygon(polygon) => {
            format!("polygon with {} vertices", polygon.vertices().len())
        }
        Shape::GeoPolyline(line) => format!("line through {} points", line.points().len()),
        Shape::GeoRelativeCircle(circle) => format!(
            "{}px circle near {}",
            circle.radius(),
            circle.centre_ref()
        ),
        Shape::GeoRelativePolygon(polygon) => format!(
            "{}-vertex pixel polygon at {}",
            polygon.vertices().len(),
            polygon.reference()
        ),
        Shape::GeoRelativePolyline(line) => format!(
            "{}-point pixel line at {}",
            line.points().len(),
            line.reference()
        ),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let london = LatLong::new(51.5074, -0.1278);
    let black = Color::new("black")?;
    let amber = Color::new("#ffbf00")?;

    let shapes: Vec<Shape> = vec![
        GeoCircle::new(
            london,
            Length::new(2.5, LengthUnit::Kilometers),
            Paint::fill_only(amber.with_alpha(0.3)),
        )?
        .into(),
        GeoRelativeCircle::new(london, Vector2d::new(0.0, -16.0), 6.0, Paint::complete(black, amber))?
            .into(),
        GeoRelativePolygon::new(
            london,
            [
                Vector2d::new(-6.0, -10.0),
                Vector2d::new(6.0, -10.0),
                Vector2d::new(0.0, 0.0),
            ],
            Paint::fill_only(black),
        )?
        .into(),
        GeoPolyline::new(
            [london, LatLong::new(51.4700, -0.4543)],
            Color::new("steelblue")?,
        )?
        .into(),
    ];

    for shape in &shapes {
        println!("{}", describe(shape));
        if let Some(paint) = shape.paint() {
            for layer in paint.layers() {
                match layer {
                    PaintLayer::Fill(color) => println!("  fill   {color}"),
                    PaintLayer::Stroke(color) => println!("  stroke {color}"),
                }
            }
        }
    }

    println!("\n{}", ShapeSummary::from_shapes(&shapes));
    Ok(())
}
