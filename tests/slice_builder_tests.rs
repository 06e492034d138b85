use brush_line::api::{LineChart, LineChartConfig};
use brush_line::core::{Margin, Series, SliceAxis, Viewport, slice_index_at};
use brush_line::render::NullRenderer;

fn chart_with_slices(axis: SliceAxis, series: Vec<Series>) -> LineChart<NullRenderer> {
    let config = LineChartConfig::new(Viewport::new(440, 240))
        .with_margin(Margin::new(20.0, 20.0, 20.0, 20.0))
        .with_slices(Some(axis));
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(series).expect("set data");
    chart
}

fn sample_series() -> Series {
    Series::from_xy(
        "a",
        &[(0.0, 1.0), (1.0, 3.0), (2.0, 2.0), (3.0, 5.0), (4.0, 4.0)],
    )
}

#[test]
fn x_slices_use_midpoint_bands_reaching_both_edges() {
    let chart = chart_with_slices(SliceAxis::X, vec![sample_series()]);
    let slices = &chart.model().slices;
    assert_eq!(slices.len(), 5);

    let bands: Vec<(f64, f64)> = slices.iter().map(|slice| (slice.x0, slice.width)).collect();
    assert_eq!(
        bands,
        vec![
            (0.0, 50.0),
            (50.0, 100.0),
            (150.0, 100.0),
            (250.0, 100.0),
            (350.0, 50.0)
        ]
    );
    for slice in slices {
        assert_eq!(slice.y0, 0.0);
        assert_eq!(slice.height, 200.0);
    }
}

#[test]
fn slices_list_points_last_series_first() {
    let chart = chart_with_slices(
        SliceAxis::X,
        vec![
            Series::from_xy("a", &[(0.0, 1.0), (1.0, 2.0)]),
            Series::from_xy("b", &[(0.0, 3.0), (1.0, 4.0)]),
        ],
    );
    let first = &chart.model().slices[0];
    let ids: Vec<&str> = first.points.iter().map(|point| point.id.as_str()).collect();
    assert_eq!(ids, vec!["b.0", "a.0"]);
}

#[test]
fn y_slices_span_the_full_width() {
    let chart = chart_with_slices(SliceAxis::Y, vec![sample_series()]);
    let slices = &chart.model().slices;
    assert_eq!(slices.len(), 5);

    // y pixels ascend: values 5, 4, 3, 2, 1 -> 0, 50, 100, 150, 200.
    let coordinates: Vec<f64> = slices.iter().map(|slice| slice.y).collect();
    assert_eq!(coordinates, vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    assert_eq!(slices[0].y0, 0.0);
    assert_eq!(slices[0].height, 25.0);
    assert_eq!(slices[4].y0 + slices[4].height, 200.0);
    for slice in slices {
        assert_eq!(slice.x0, 0.0);
        assert_eq!(slice.width, 400.0);
    }
}

#[test]
fn single_coordinate_slice_covers_the_whole_axis() {
    let chart = chart_with_slices(
        SliceAxis::X,
        vec![
            Series::from_xy("a", &[(7.0, 1.0)]),
            Series::from_xy("b", &[(7.0, 2.0)]),
        ],
    );
    let slices = &chart.model().slices;
    assert_eq!(slices.len(), 1);
    assert_eq!((slices[0].x0, slices[0].width), (0.0, 400.0));
    assert_eq!(slices[0].points.len(), 2);
}

#[test]
fn hit_testing_resolves_shared_edges_to_the_lower_slice() {
    let chart = chart_with_slices(SliceAxis::X, vec![sample_series()]);
    let slices = &chart.model().slices;
    assert_eq!(slice_index_at(slices, 0.0, 10.0), Some(0));
    assert_eq!(slice_index_at(slices, 50.0, 10.0), Some(0));
    assert_eq!(slice_index_at(slices, 50.5, 10.0), Some(1));
    assert_eq!(slice_index_at(slices, 400.0, 10.0), Some(4));
    assert_eq!(slice_index_at(slices, 401.0, 10.0), None);
    assert_eq!(slice_index_at(slices, 10.0, -1.0), None);
}

#[test]
fn slices_are_not_built_when_disabled() {
    let config = LineChartConfig::new(Viewport::new(400, 200));
    let mut chart = LineChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_data(vec![sample_series()]).expect("set data");
    assert!(chart.model().slices.is_empty());
    assert_eq!(chart.model().points.len(), 5);
}
