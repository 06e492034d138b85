use std::cell::RefCell;
use std::rc::Rc;

use brush_line::api::{ChartHandlers, LineChart, LineChartConfig, Tooltip};
use brush_line::core::{Margin, Series, SliceAxis, Viewport};
use brush_line::render::{LayerKind, NullRenderer};

type Events = Rc<RefCell<Vec<String>>>;

fn sample_series() -> Vec<Series> {
    vec![
        Series::from_xy("a", &[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0), (4.0, 4.0)]),
        Series::from_xy("b", &[(0.0, 2.0), (2.0, 1.5), (4.0, 3.0)]),
    ]
}

fn base_config() -> LineChartConfig {
    LineChartConfig::new(Viewport::new(440, 240)).with_margin(Margin::new(20.0, 20.0, 20.0, 20.0))
}

fn recording_chart(config: LineChartConfig) -> (LineChart<NullRenderer>, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let (enter, moved, leave, click) = (
        Rc::clone(&events),
        Rc::clone(&events),
        Rc::clone(&events),
        Rc::clone(&events),
    );
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_handlers(
        ChartHandlers::default()
            .with_on_mouse_enter(move |point, _| enter.borrow_mut().push(format!("enter:{}", point.id)))
            .with_on_mouse_move(move |point, _| moved.borrow_mut().push(format!("move:{}", point.id)))
            .with_on_mouse_leave(move |point, _| leave.borrow_mut().push(format!("leave:{}", point.id)))
            .with_on_click(move |point, position| {
                click
                    .borrow_mut()
                    .push(format!("click:{}@{},{}", point.id, position.x, position.y));
            }),
    );
    chart
        .set_data(vec![sample_series().remove(0)])
        .expect("set data");
    (chart, events)
}

fn take(events: &Events) -> Vec<String> {
    events.borrow_mut().drain(..).collect()
}

#[test]
fn mesh_reports_enter_move_and_leave_for_the_nearest_point() {
    let (mut chart, events) = recording_chart(base_config().with_mesh(true));

    chart.pointer_move(120.0, 130.0).expect("move");
    assert_eq!(take(&events), vec!["enter:a.1", "move:a.1"]);

    chart.pointer_move(125.0, 125.0).expect("move");
    assert_eq!(take(&events), vec!["move:a.1"]);

    chart.pointer_move(320.0, 30.0).expect("move");
    assert_eq!(take(&events), vec!["leave:a.1", "enter:a.3", "move:a.3"]);

    chart.pointer_leave();
    assert_eq!(take(&events), vec!["leave:a.3"]);
    assert!(chart.current_point().is_none());
}

#[test]
fn pointer_outside_the_inner_area_leaves_the_point() {
    let (mut chart, events) = recording_chart(base_config().with_mesh(true));

    chart.pointer_move(120.0, 130.0).expect("move");
    take(&events);
    chart.pointer_move(5.0, 5.0).expect("move");

    assert_eq!(take(&events), vec!["leave:a.1"]);
    assert!(chart.current_point().is_none());
}

#[test]
fn click_targets_the_nearest_point_in_inner_coordinates() {
    let (mut chart, events) = recording_chart(base_config().with_mesh(true));

    chart.click(410.0, 80.0).expect("click");
    assert_eq!(take(&events), vec!["click:a.4@390,60"]);
}

#[test]
fn mesh_events_are_ignored_without_mesh() {
    let (mut chart, events) = recording_chart(base_config());
    chart.pointer_move(120.0, 130.0).expect("move");
    chart.click(120.0, 130.0).expect("click");
    assert!(take(&events).is_empty());

    let (mut chart, events) = recording_chart(
        base_config()
            .with_mesh(true)
            .with_slices(Some(SliceAxis::X)),
    );
    chart.pointer_move(120.0, 130.0).expect("move");
    assert!(take(&events).is_empty());
    assert_eq!(chart.current_slice().map(|slice| slice.x), Some(100.0));
}

#[test]
fn point_tooltip_uses_formatted_values() {
    let (mut chart, _events) = recording_chart(base_config().with_mesh(true));
    assert!(chart.tooltip().is_none());

    chart.pointer_move(120.0, 130.0).expect("move");
    let Some(Tooltip::Point(tooltip)) = chart.tooltip() else {
        panic!("expected a point tooltip");
    };
    assert_eq!(tooltip.point_id, "a.1");
    assert_eq!(tooltip.serie_id, "a");
    assert_eq!(tooltip.x, "1");
    assert_eq!(tooltip.y, "3");
}

#[test]
fn slice_tooltip_lists_points_last_series_first() {
    let mut chart = LineChart::new(
        NullRenderer::default(),
        base_config().with_slices(Some(SliceAxis::X)),
    )
    .expect("chart init");
    chart.set_data(sample_series()).expect("set data");

    chart.pointer_move(220.0, 120.0).expect("move");
    let Some(Tooltip::Slice { axis, rows }) = chart.tooltip() else {
        panic!("expected a slice tooltip");
    };
    assert_eq!(axis, SliceAxis::X);
    let series: Vec<&str> = rows.iter().map(|row| row.serie_id.as_str()).collect();
    assert_eq!(series, vec!["b", "a"]);
    assert_eq!(rows[0].y, "1.5");

    chart.slice_pointer_leave();
    assert!(chart.tooltip().is_none());
}

#[test]
fn mesh_crosshair_uses_the_configured_type() {
    let (mut chart, _events) = recording_chart(base_config().with_mesh(true));
    chart.pointer_move(120.0, 130.0).expect("move");

    let crosshair = chart.build_layer(LayerKind::Crosshair).expect("crosshair");
    let lines: Vec<_> = crosshair.element_children().collect();
    assert_eq!(lines.len(), 2);
    // Bottom-left: down from the point, then left to the y axis.
    assert_eq!(lines[0].get_attr("x1"), Some("100"));
    assert_eq!(lines[0].get_attr("y1"), Some("100"));
    assert_eq!(lines[0].get_attr("y2"), Some("200"));
    assert_eq!(lines[1].get_attr("x1"), Some("0"));
    assert_eq!(lines[1].get_attr("x2"), Some("100"));
    assert_eq!(lines[1].get_attr("y1"), Some("100"));
}

#[test]
fn slice_hover_tracks_the_pointer() {
    let mut chart = LineChart::new(
        NullRenderer::default(),
        base_config().with_slices(Some(SliceAxis::X)),
    )
    .expect("chart init");
    chart.set_data(sample_series()).expect("set data");

    chart.pointer_move(20.0, 50.0).expect("move");
    assert_eq!(chart.interaction_state().current_slice(), Some(0));
    chart.pointer_move(420.0, 50.0).expect("move");
    assert_eq!(chart.interaction_state().current_slice(), Some(4));
    chart.pointer_move(220.0, 300.0).expect("move");
    assert_eq!(chart.interaction_state().current_slice(), None);

    chart.slice_pointer_enter(2).expect("enter");
    assert_eq!(chart.current_slice().map(|slice| slice.x), Some(200.0));
    assert!(chart.slice_pointer_enter(9).is_err());
}

#[test]
fn non_finite_pointer_positions_are_rejected() {
    let (mut chart, events) = recording_chart(base_config().with_mesh(true));

    assert!(chart.pointer_move(f64::NAN, 10.0).is_err());
    assert!(chart.pointer_down(10.0, f64::INFINITY).is_err());
    assert!(chart.click(f64::NEG_INFINITY, 0.0).is_err());
    assert!(take(&events).is_empty());
}

#[test]
fn new_data_clears_hover_state() {
    let (mut chart, _events) = recording_chart(base_config().with_mesh(true));
    chart.pointer_move(120.0, 130.0).expect("move");
    assert!(chart.current_point().is_some());

    chart.set_data(sample_series()).expect("set data");
    assert!(chart.current_point().is_none());
    assert_eq!(chart.interaction_state().cursor(), None);
}
