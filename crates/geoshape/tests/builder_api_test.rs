//! Integration tests for the ShapeBuilder API
//!
//! These tests verify that the public API works and is usable.

use float_cmp::assert_approx_eq;

use geoshape::{
    GeoshapeError, InvalidGeometryError, ShapeBuilder,
    color::Color,
    config::{AppConfig, StyleConfig},
    geo::{LatLong, Length, LengthUnit, Vector2d},
    paint::PaintLayer,
    shape::{Shape, ShapeType},
};

const CITY_MARKERS: &str = r#"
    [[shapes]]
    type = "geo_circle"
    centre = [51.5, -0.12]
    radius = { value = 100.0, unit = "meters" }
    fill = "blue"

    [[shapes]]
    type = "geo_relative_polygon"
    reference = [51.5, -0.12]
    vertices = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]
    stroke = "black"
    fill = "white"

    [[shapes]]
    type = "geo_polyline"
    points = [[51.5, -0.12], [51.6, -0.10], [51.7, -0.08]]
    colour = "green"
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = ShapeBuilder::default();
}

#[test]
fn test_parse_preserves_order_and_values() {
    let builder = ShapeBuilder::default();
    let shapes = builder.parse(CITY_MARKERS).expect("Failed to parse document");

    let types: Vec<_> = shapes.iter().map(Shape::shape_type).collect();
    assert_eq!(
        types,
        [
            ShapeType::GeoCircle,
            ShapeType::GeoRelativePolygon,
            ShapeType::GeoPolyline
        ]
    );

    match &shapes[0] {
        Shape::GeoCircle(circle) => {
            assert_eq!(circle.centre(), LatLong::new(51.5, -0.12));
            assert_eq!(circle.radius(), Length::new(100.0, LengthUnit::Meters));
            assert_eq!(circle.paint().fill(), Some(Color::new("blue").unwrap()));
        }
        _ => panic!("Expected GeoCircle"),
    }

    match &shapes[1] {
        Shape::GeoRelativePolygon(polygon) => {
            assert_eq!(
                polygon.vertices(),
                [
                    Vector2d::new(0.0, 0.0),
                    Vector2d::new(10.0, 0.0),
                    Vector2d::new(10.0, 10.0)
                ]
            );
            let layers: Vec<_> = polygon.paint().layers().collect();
            assert_eq!(
                layers,
                [
                    PaintLayer::Fill(Color::new("white").unwrap()),
                    PaintLayer::Stroke(Color::new("black").unwrap())
                ]
            );
        }
        _ => panic!("Expected GeoRelativePolygon"),
    }

    match &shapes[2] {
        Shape::GeoPolyline(line) => {
            assert_eq!(line.points().len(), 3);
            assert_eq!(line.colour(), Color::new("green").unwrap());
        }
        _ => panic!("Expected GeoPolyline"),
    }
}

#[test]
fn test_summarize() {
    let builder = ShapeBuilder::default();
    let shapes = builder.parse(CITY_MARKERS).unwrap();
    let summary = builder.summarize(&shapes);

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.relative(), 1);
    assert_eq!(summary.count(ShapeType::GeoRelativePolyline), 0);
}

#[test]
fn test_builder_with_default_style() {
    let source = r#"
        [[shapes]]
        type = "geo_polygon"
        vertices = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
    "#;

    let style = StyleConfig::new(Some("red".to_string()), Some("pink".to_string()));
    let builder = ShapeBuilder::new(AppConfig::new(style));
    let shapes = builder.parse(source).expect("Default paint should apply");

    let paint = shapes[0].paint().unwrap();
    assert_eq!(paint.stroke(), Some(Color::new("red").unwrap()));
    assert_eq!(paint.fill(), Some(Color::new("pink").unwrap()));
}

#[test]
fn test_parse_invalid_syntax_returns_document_error() {
    let builder = ShapeBuilder::default();
    let err = builder.parse("[[shapes]\ntype = ").unwrap_err();

    match err {
        GeoshapeError::Document { span, src, .. } => {
            assert!(span.is_some());
            assert_eq!(src, "[[shapes]\ntype = ");
        }
        other => panic!("Expected Document error, got {other:?}"),
    }
}

#[test]
fn test_negative_radius_is_rejected_with_index() {
    let source = r#"
        [[shapes]]
        type = "geo_polyline"
        points = [[0.0, 0.0]]
        colour = "black"

        [[shapes]]
        type = "geo_relative_circle"
        centre_ref = [0.0, 0.0]
        radius = -4.0
        fill = "black"
    "#;

    let err = ShapeBuilder::default().parse(source).unwrap_err();
    assert_eq!(err.shape_index(), Some(1));
    match err {
        GeoshapeError::Geometry { source, .. } => assert_eq!(
            source,
            InvalidGeometryError::NegativeRadius {
                shape: ShapeType::GeoRelativeCircle,
                radius: -4.0
            }
        ),
        other => panic!("Expected Geometry error, got {other:?}"),
    }
}

#[test]
fn test_empty_document_builds_nothing() {
    let shapes = ShapeBuilder::default().parse("").unwrap();
    assert!(shapes.is_empty());
}

#[test]
fn test_invalid_config_colour() {
    let style = StyleConfig::new(None, Some("definitely-not-a-colour".to_string()));
    let builder = ShapeBuilder::new(AppConfig::new(style));

    let err = builder.parse(CITY_MARKERS).unwrap_err();
    assert!(matches!(err, GeoshapeError::Config(_)));
}

#[test]
fn test_radius_units_convert_to_meters() {
    let shapes = ShapeBuilder::default()
        .parse(
            r#"
            [[shapes]]
            type = "geo_circle"
            centre = [60.0, 5.0]
            radius = { value = 1.5, unit = "nautical_miles" }
            stroke = "red"
            "#,
        )
        .expect("Failed to parse document");

    let Shape::GeoCircle(circle) = &shapes[0] else {
        panic!("Expected GeoCircle");
    };
    assert_eq!(circle.radius().unit(), LengthUnit::NauticalMiles);
    assert_approx_eq!(f64, circle.radius().to_meters(), 2778.0, epsilon = 1e-9);
}

#[test]
fn test_misspelled_style_key_is_document_error() {
    let config = AppConfig::new(StyleConfig::new(Some("black".to_string()), None));
    let builder = ShapeBuilder::new(config);

    let err = builder
        .parse(
            r#"
            [[shapes]]
            type = "geo_polyline"
            points = [[51.5, -0.12], [51.6, -0.10]]
            stroke = "red"
            "#,
        )
        .unwrap_err();

    match err {
        GeoshapeError::Document { message, .. } => assert!(message.contains("stroke")),
        other => panic!("Expected Document error, got {other:?}"),
    }
}
