//! Construction round-trip properties for every shape variant.

use proptest::prelude::*;

use geoshape_core::{
    color::Color,
    error::InvalidGeometryError,
    geo::{LatLong, Length, LengthUnit, Vector2d},
    paint::Paint,
    shape::{
        GeoCircle, GeoPolygon, GeoPolyline, GeoRelativeCircle, GeoRelativePolygon,
        GeoRelativePolyline, Shape, ShapeType,
    },
};

// ===================
// Strategies
// ===================

fn latlong_strategy() -> impl Strategy<Value = LatLong> {
    (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, long)| LatLong::new(lat, long))
}

fn vector_strategy() -> impl Strategy<Value = Vector2d> {
    (-500.0f64..500.0, -500.0f64..500.0).prop_map(|(x, y)| Vector2d::new(x, y))
}

fn color_strategy() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8, u8)>().prop_map(|(r, g, b, a)| Color::from_rgba8(r, g, b, a))
}

fn unit_strategy() -> impl Strategy<Value = LengthUnit> {
    prop_oneof![
        Just(LengthUnit::Meters),
        Just(LengthUnit::Kilometers),
        Just(LengthUnit::Feet),
        Just(LengthUnit::NauticalMiles),
    ]
}

fn paint_strategy() -> impl Strategy<Value = Paint> {
    prop_oneof![
        color_strategy().prop_map(Paint::stroke_only),
        color_strategy().prop_map(Paint::fill_only),
        (color_strategy(), color_strategy()).prop_map(|(s, f)| Paint::complete(s, f)),
    ]
}

// ===================
// Property Test Functions
// ===================

fn check_geo_circle(
    centre: LatLong,
    radius: f64,
    unit: LengthUnit,
    paint: Paint,
) -> Result<(), TestCaseError> {
    let length = Length::new(radius, unit);
    let circle = GeoCircle::new(centre, length, paint).expect("valid circle");

    prop_assert_eq!(circle.centre(), centre);
    prop_assert_eq!(circle.radius(), length);
    prop_assert_eq!(circle.paint(), &paint);
    prop_assert_eq!(Shape::from(circle).shape_type(), ShapeType::GeoCircle);
    Ok(())
}

fn check_relative_polygon(
    reference: LatLong,
    vertices: Vec<Vector2d>,
    paint: Paint,
) -> Result<(), TestCaseError> {
    let polygon =
        GeoRelativePolygon::new(reference, vertices.clone(), paint).expect("valid polygon");

    prop_assert_eq!(polygon.reference(), reference);
    prop_assert_eq!(polygon.vertices(), vertices.as_slice());
    prop_assert_eq!(polygon.paint(), &paint);

    let shape = Shape::from(polygon);
    prop_assert_eq!(shape.shape_type(), ShapeType::GeoRelativePolygon);
    prop_assert_eq!(shape.reference(), Some(reference));
    prop_assert_eq!(shape.vertex_count(), vertices.len());
    Ok(())
}

fn check_negative_radius_rejected(radius: f64) -> Result<(), TestCaseError> {
    let paint = Paint::stroke_only(Color::default());

    let absolute = GeoCircle::new(LatLong::default(), Length::meters(radius), paint);
    prop_assert_eq!(
        absolute,
        Err(InvalidGeometryError::NegativeRadius {
            shape: ShapeType::GeoCircle,
            radius
        })
    );

    let relative = GeoRelativeCircle::new(LatLong::default(), Vector2d::default(), radius, paint);
    prop_assert_eq!(
        relative,
        Err(InvalidGeometryError::NegativeRadius {
            shape: ShapeType::GeoRelativeCircle,
            radius
        })
    );
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn geo_circle_round_trips(
        centre in latlong_strategy(),
        radius in 0.0f64..10_000.0,
        unit in unit_strategy(),
        paint in paint_strategy(),
    ) {
        check_geo_circle(centre, radius, unit, paint)?;
    }

    #[test]
    fn geo_relative_polygon_round_trips(
        reference in latlong_strategy(),
        vertices in prop::collection::vec(vector_strategy(), 1..16),
        paint in paint_strategy(),
    ) {
        check_relative_polygon(reference, vertices, paint)?;
    }

    #[test]
    fn negative_radius_rejected(radius in -10_000.0f64..-0.001) {
        check_negative_radius_rejected(radius)?;
    }

    #[test]
    fn polylines_keep_points(
        points in prop::collection::vec(latlong_strategy(), 1..16),
        offsets in prop::collection::vec(vector_strategy(), 1..16),
        reference in latlong_strategy(),
        colour in color_strategy(),
    ) {
        let line = GeoPolyline::new(points.clone(), colour).expect("valid polyline");
        prop_assert_eq!(line.points(), points.as_slice());
        prop_assert_eq!(line.colour(), colour);

        let relative = GeoRelativePolyline::new(reference, offsets.clone(), colour)
            .expect("valid relative polyline");
        prop_assert_eq!(relative.points(), offsets.as_slice());
        prop_assert_eq!(Shape::from(relative).colour(), Some(colour));
    }
}

// ===================
// Scenarios
// ===================

#[test]
fn test_circle_with_fill_paint() {
    let blue = Color::new("blue").unwrap();
    let circle = GeoCircle::new(
        LatLong::new(51.5, -0.12),
        Length::new(100.0, LengthUnit::Meters),
        Paint::fill_only(blue),
    )
    .unwrap();

    assert_eq!(circle.centre(), LatLong::new(51.5, -0.12));
    assert_eq!(circle.radius(), Length::new(100.0, LengthUnit::Meters));
    assert_eq!(circle.paint().fill(), Some(blue));
    assert_eq!(circle.paint().stroke(), None);
}

#[test]
fn test_relative_polygon_vertex_order() {
    let reference = LatLong::new(0.0, 0.0);
    let paint = Paint::stroke_only(Color::new("black").unwrap());
    let polygon = GeoRelativePolygon::new(
        reference,
        vec![
            Vector2d::new(0.0, 0.0),
            Vector2d::new(10.0, 0.0),
            Vector2d::new(10.0, 10.0),
        ],
        paint,
    )
    .unwrap();

    assert_eq!(
        polygon.vertices(),
        [
            Vector2d::new(0.0, 0.0),
            Vector2d::new(10.0, 0.0),
            Vector2d::new(10.0, 10.0)
        ]
    );
}

#[test]
fn test_polyline_has_colour_not_paint() {
    let green = Color::new("green").unwrap();
    let a = LatLong::new(1.0, 1.0);
    let b = LatLong::new(2.0, 2.0);
    let c = LatLong::new(3.0, 1.0);

    let shape = Shape::from(GeoPolyline::new(vec![a, b, c], green).unwrap());

    match &shape {
        Shape::GeoPolyline(line) => {
            assert_eq!(line.points(), [a, b, c]);
            assert_eq!(line.colour(), green);
        }
        _ => panic!("Expected GeoPolyline"),
    }
    assert!(shape.paint().is_none());
}

#[test]
fn test_polygon_vertices_can_repeat() {
    let a = LatLong::new(1.0, 1.0);
    let polygon = GeoPolygon::new(vec![a, a], Paint::fill_only(Color::default())).unwrap();
    assert_eq!(polygon.vertices().len(), 2);
}
