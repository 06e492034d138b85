use brush_line::core::{ScaleSpec, Series, compute_xy_scales};
use brush_line::extensions::{CartesianMarker, MarkerAxis, place_markers};
use brush_line::render::Color;

fn scales() -> brush_line::core::XyScales {
    let series = vec![Series::from_xy("a", &[(0.0, 0.0), (10.0, 100.0)])];
    compute_xy_scales(&series, &ScaleSpec::linear(), &ScaleSpec::linear(), 200.0, 100.0)
        .expect("scales")
}

#[test]
fn x_marker_is_a_vertical_rule_with_legend_to_the_right() {
    let scales = scales();
    let markers = vec![CartesianMarker::new(MarkerAxis::X, 5.0).with_legend("mid")];
    let placed = place_markers(
        &markers,
        (&ScaleSpec::linear(), &scales.x_scale),
        (&ScaleSpec::linear(), &scales.y_scale),
        200.0,
        100.0,
    );

    assert_eq!(placed.len(), 1);
    let rule = &placed[0];
    assert_eq!((rule.x1, rule.y1, rule.x2, rule.y2), (100.0, 0.0, 100.0, 100.0));
    assert_eq!((rule.legend_x, rule.legend_y), (114.0, 14.0));
    assert_eq!(rule.legend_anchor, "start");
}

#[test]
fn y_marker_is_a_horizontal_rule_with_legend_at_the_end() {
    let scales = scales();
    let markers = vec![CartesianMarker::new(MarkerAxis::Y, 25.0)];
    let placed = place_markers(
        &markers,
        (&ScaleSpec::linear(), &scales.x_scale),
        (&ScaleSpec::linear(), &scales.y_scale),
        200.0,
        100.0,
    );

    let rule = &placed[0];
    assert_eq!((rule.x1, rule.y1, rule.x2, rule.y2), (0.0, 75.0, 200.0, 75.0));
    assert_eq!((rule.legend_x, rule.legend_y), (186.0, 61.0));
    assert_eq!(rule.legend_anchor, "end");
}

#[test]
fn markers_outside_the_scale_kind_are_skipped() {
    let scales = scales();
    let markers = vec![
        CartesianMarker::new(MarkerAxis::X, "not a number"),
        CartesianMarker::new(MarkerAxis::Y, "40"),
    ];
    let placed = place_markers(
        &markers,
        (&ScaleSpec::linear(), &scales.x_scale),
        (&ScaleSpec::linear(), &scales.y_scale),
        200.0,
        100.0,
    );

    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].marker.axis, MarkerAxis::Y);
    assert_eq!(placed[0].y1, 60.0);
}

#[test]
fn marker_validation_checks_line_style() {
    let mut marker = CartesianMarker::new(MarkerAxis::X, 1.0)
        .with_line_color(Color::rgb8(0xf4, 0x75, 0x60));
    assert!(marker.validate().is_ok());

    marker.line_width = -2.0;
    assert!(marker.validate().is_err());

    marker.line_width = 1.0;
    marker.line_color = Color::rgba(2.0, 0.0, 0.0, 1.0);
    assert!(marker.validate().is_err());
}
