use std::cell::RefCell;
use std::rc::Rc;

use brush_line::api::{ChartHandlers, LineChart, LineChartConfig};
use brush_line::core::{
    Datum, DatumValue, Margin, ScaleBound, ScaleSpec, Series, SliceAxis, Viewport,
};
use brush_line::interaction::BrushPhase;
use brush_line::render::NullRenderer;

type Calls = Rc<RefCell<Vec<Vec<Series>>>>;

fn sample_series() -> Series {
    Series::from_xy(
        "a",
        &[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0), (4.0, 4.0)],
    )
}

fn brush_config() -> LineChartConfig {
    LineChartConfig::new(Viewport::new(440, 240))
        .with_margin(Margin::new(20.0, 20.0, 20.0, 20.0))
        .with_slices(Some(SliceAxis::X))
        .with_brush(true)
}

fn brush_chart(config: LineChartConfig, series: Vec<Series>) -> (LineChart<NullRenderer>, Calls) {
    let calls: Calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_handlers(
        ChartHandlers::default()
            .with_on_brush_change(move |series| sink.borrow_mut().push(series.to_vec())),
    );
    chart.set_data(series).expect("set data");
    (chart, calls)
}

fn x_values(series: &Series) -> Vec<f64> {
    series
        .data
        .iter()
        .filter_map(|datum| datum.x.as_ref().and_then(DatumValue::as_f64))
        .collect()
}

#[test]
fn drag_from_second_to_fourth_slice_filters_inclusive_range() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(1).expect("down");
    assert_eq!(chart.brush_state().phase(), BrushPhase::Dragging);
    chart.slice_pointer_move(2).expect("move");
    chart.slice_pointer_move(3).expect("move");
    chart.slice_pointer_up(3).expect("up");

    let expected = vec![Datum::xy(1.0, 3.0), Datum::xy(2.0, 2.0), Datum::xy(3.0, 5.0)];
    assert_eq!(chart.displayed_data()[0].data, expected);
    assert!(chart.is_brushed());
    assert_eq!(chart.original_data()[0].len(), 5);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0][0].data, expected);
}

#[test]
fn reverse_drag_yields_the_same_filter() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(3).expect("down");
    chart.slice_pointer_move(1).expect("move");
    chart.slice_pointer_up(1).expect("up");

    assert_eq!(x_values(&chart.displayed_data()[0]), vec![1.0, 2.0, 3.0]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn pointer_coordinates_are_routed_to_slices() {
    let (mut chart, _calls) = brush_chart(brush_config(), vec![sample_series()]);

    // Outer coordinates; the margin is 20px on every side.
    chart.pointer_down(120.0, 70.0).expect("down");
    chart.pointer_move(220.0, 70.0).expect("move");
    chart.pointer_move(320.0, 70.0).expect("move");
    chart.pointer_up(320.0, 70.0).expect("up");

    assert_eq!(x_values(&chart.displayed_data()[0]), vec![1.0, 2.0, 3.0]);
}

#[test]
fn zero_width_drag_restores_original_data() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(3).expect("up");
    assert_eq!(chart.displayed_data()[0].len(), 3);

    // Slices are rebuilt over the filtered data: 1, 2, 3.
    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(1).expect("up");

    assert!(!chart.is_brushed());
    assert_eq!(chart.displayed_data(), chart.original_data());
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], vec![sample_series()]);
}

#[test]
fn selection_is_cleared_after_each_drag() {
    let (mut chart, _calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(0).expect("down");
    chart.slice_pointer_move(2).expect("move");
    chart.slice_pointer_up(2).expect("up");

    let brush = chart.brush_state();
    assert_eq!(brush.phase(), BrushPhase::Idle);
    assert!(brush.start().is_none());
    assert!(brush.end().is_none());
    assert!(chart.brush_rectangle().is_none());
}

#[test]
fn pointer_up_without_drag_is_ignored() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_up(2).expect("up");

    assert!(!chart.is_brushed());
    assert!(calls.borrow().is_empty());
    assert_eq!(chart.displayed_data()[0].len(), 5);
}

#[test]
fn second_pointer_down_restarts_the_drag() {
    let (mut chart, _calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(0).expect("down");
    chart.slice_pointer_move(1).expect("move");
    chart.slice_pointer_down(3).expect("restart");
    assert!(chart.brush_state().end().is_none());
    chart.slice_pointer_move(4).expect("move");
    chart.slice_pointer_up(4).expect("up");

    assert_eq!(x_values(&chart.displayed_data()[0]), vec![3.0, 4.0]);
}

#[test]
fn rectangle_tracks_the_drag_in_progress() {
    let (mut chart, _calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(3).expect("down");
    assert!(chart.brush_rectangle().is_none());
    chart.slice_pointer_move(1).expect("move");

    let rect = chart.brush_rectangle().expect("rectangle while dragging");
    assert_eq!(rect.x, 100.0);
    assert_eq!(rect.width, 200.0);
    assert_eq!(rect.height, 200.0);
}

#[test]
fn reset_restores_original_data_and_notifies() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(2).expect("up");
    assert_eq!(chart.displayed_data()[0].len(), 2);

    chart.reset_brush().expect("reset");

    assert!(!chart.is_brushed());
    assert_eq!(chart.displayed_data()[0].len(), 5);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], vec![sample_series()]);
}

#[test]
fn every_series_is_filtered_by_the_same_range() {
    let other = Series::from_xy("b", &[(0.0, 2.0), (2.0, 1.0), (4.0, 3.0)]);
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series(), other]);

    chart.slice_pointer_down(2).expect("down");
    chart.slice_pointer_up(4).expect("up");

    let displayed = chart.displayed_data();
    assert_eq!(x_values(&displayed[0]), vec![2.0, 3.0, 4.0]);
    assert_eq!(x_values(&displayed[1]), vec![2.0, 4.0]);
    assert_eq!(calls.borrow()[0].len(), 2);
}

#[test]
fn filtered_data_is_downsampled_for_display_only() {
    let config = brush_config().with_max_number_of_points(Some(2));
    let (mut chart, calls) = brush_chart(config, vec![sample_series()]);
    assert_eq!(x_values(&chart.displayed_data()[0]), vec![0.0, 3.0, 4.0]);

    // Slices follow the displayed points: x = 0, 3, 4.
    chart.slice_pointer_down(0).expect("down");
    chart.slice_pointer_up(1).expect("up");

    let calls = calls.borrow();
    assert_eq!(x_values(&calls[0][0]), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(x_values(&chart.displayed_data()[0]), vec![0.0, 2.0, 3.0]);
}

#[test]
fn brush_needs_slices_and_interactivity() {
    let config = brush_config().with_slices(None);
    let (mut chart, calls) = brush_chart(config, vec![sample_series()]);
    chart.pointer_down(120.0, 70.0).expect("down");
    chart.pointer_up(320.0, 70.0).expect("up");
    assert!(chart.slice_pointer_down(0).is_err());
    assert!(calls.borrow().is_empty());

    let config = brush_config().with_interactive(false);
    let (mut chart, calls) = brush_chart(config, vec![sample_series()]);
    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(3).expect("up");
    assert!(!chart.is_brushed());
    assert!(calls.borrow().is_empty());
}

#[test]
fn out_of_range_slice_index_is_rejected() {
    let (mut chart, _calls) = brush_chart(brush_config(), vec![sample_series()]);
    assert!(chart.slice_pointer_down(5).is_err());
    assert_eq!(chart.brush_state().phase(), BrushPhase::Idle);
}

#[test]
fn y_slices_filter_on_y_values() {
    let config = brush_config().with_slices(Some(SliceAxis::Y));
    let (mut chart, _calls) = brush_chart(config, vec![sample_series()]);

    // y slices ascend in pixels: values 5, 4, 3, 2, 1.
    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(3).expect("up");

    let y_values: Vec<f64> = chart.displayed_data()[0]
        .data
        .iter()
        .filter_map(|datum| datum.y.as_ref().and_then(DatumValue::as_f64))
        .collect();
    assert_eq!(y_values, vec![3.0, 2.0, 4.0]);
}

#[test]
fn temporal_x_values_are_filtered_as_instants() {
    let config = brush_config().with_x_scale(ScaleSpec::time(Some("%Y-%m-%d")));
    let series = Series::new(
        "visits",
        vec![
            Datum::new("2024-01-01", 4.0),
            Datum::new("2024-01-02", 6.0),
            Datum::new("2024-01-05", 5.0),
            Datum::new("2024-01-09", 9.0),
        ],
    );
    let (mut chart, _calls) = brush_chart(config, vec![series]);

    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_up(2).expect("up");

    let kept: Vec<&Datum> = chart.displayed_data()[0].data.iter().collect();
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].x, Some(DatumValue::from("2024-01-02")));
    assert_eq!(kept[1].x, Some(DatumValue::from("2024-01-05")));
}

#[test]
fn programmatic_range_matches_a_drag() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);
    chart
        .brush_to_range(&DatumValue::Number(3.0), &DatumValue::Number(1.0))
        .expect("brush");
    assert_eq!(x_values(&chart.displayed_data()[0]), vec![1.0, 2.0, 3.0]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn categories_are_brushed_in_axis_order() {
    let months = ["jan", "feb", "mar", "apr"];
    let data = months
        .iter()
        .enumerate()
        .map(|(index, month)| Datum::new(*month, index as i32))
        .collect();
    let (mut chart, calls) = brush_chart(brush_config(), vec![Series::new("a", data)]);

    chart.slice_pointer_down(1).expect("down");
    chart.slice_pointer_move(2).expect("move");
    chart.slice_pointer_up(2).expect("up");

    let kept: Vec<String> = chart.displayed_data()[0]
        .data
        .iter()
        .filter_map(|datum| datum.x.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(kept, vec!["feb", "mar"]);
    assert_eq!(calls.borrow()[0][0].len(), 2);
}

#[test]
fn stacked_y_slices_do_not_brush() {
    let config = brush_config()
        .with_slices(Some(SliceAxis::Y))
        .with_x_scale(ScaleSpec::linear())
        .with_y_scale(ScaleSpec::Linear {
            min: ScaleBound::Auto,
            max: ScaleBound::Auto,
            stacked: true,
            reverse: false,
        });
    assert!(!config.brush_active());
    let series = vec![
        Series::from_xy("a", &[(0.0, 1.0), (1.0, 2.0)]),
        Series::from_xy("b", &[(0.0, 1.0), (1.0, 2.0)]),
    ];
    let (mut chart, calls) = brush_chart(config, series);

    chart.slice_pointer_down(0).expect("down");
    chart.slice_pointer_move(1).expect("move");
    chart.slice_pointer_up(1).expect("up");

    assert_eq!(chart.brush_state().phase(), BrushPhase::Idle);
    assert!(!chart.is_brushed());
    assert!(calls.borrow().is_empty());
    assert!(
        chart
            .brush_to_range(&DatumValue::Number(2.0), &DatumValue::Number(4.0))
            .is_err()
    );
}

#[test]
fn release_outside_the_slices_ends_the_drag_at_the_last_slice() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.pointer_down(120.0, 70.0).expect("down");
    chart.pointer_move(320.0, 70.0).expect("move");
    chart.pointer_move(435.0, 70.0).expect("move past the inner area");
    chart.pointer_up(435.0, 70.0).expect("up past the inner area");

    assert_eq!(chart.brush_state().phase(), BrushPhase::Idle);
    assert!(chart.brush_rectangle().is_none());
    assert_eq!(x_values(&chart.displayed_data()[0]), vec![1.0, 2.0, 3.0]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn release_outside_without_moving_restores() {
    let (mut chart, calls) = brush_chart(brush_config(), vec![sample_series()]);

    chart.pointer_down(120.0, 70.0).expect("down");
    chart.pointer_up(435.0, 70.0).expect("up past the inner area");

    assert_eq!(chart.brush_state().phase(), BrushPhase::Idle);
    assert!(!chart.is_brushed());
    assert_eq!(calls.borrow()[0][0].len(), 5);
}
