//! Click-to-fill scenarios through the full resolve, sample, fill, notify path.

use pixfill::prelude::*;
use pixfill_test_utils::fixtures;
use pixfill_test_utils::{CountingRaster, MockCanvas, MockView};
use proptest::prelude::*;

fn click<R: RasterMut>(
    raster: &mut R,
    canvas: &MockCanvas,
    view: &MockView,
    options: &mut ChannelOptions,
    connectivity: Connectivity,
    at: (i32, i32),
) -> bool {
    let mut tool = FloodFillTool::new(FloodFillConfig {
        connectivity,
        ..Default::default()
    })
    .unwrap();
    let mut target = ToolTarget::new(canvas, view, options).with_raster(raster);
    tool.on_seed_click(ScreenPoint::new(at.0, at.1), false, &mut target)
        .unwrap()
}

fn gray_options(value: f64) -> ChannelOptions {
    ChannelOptions::new(
        ChannelVector::scalar(value, true),
        ChannelVector::scalar(0.0, true),
    )
}

#[test]
fn uniform_raster_fills_completely() {
    let mut r = fixtures::uniform(10, 10, 0.0);
    let mut opts = gray_options(255.0);
    click(
        &mut r,
        &MockCanvas::new(10, 10),
        &MockView::origin(2),
        &mut opts,
        Connectivity::Four,
        (5, 5),
    );
    assert!(r.samples().iter().all(|&v| v == 255.0));
}

#[test]
fn wall_bounds_the_region() {
    let mut r = fixtures::wall(10, 10, 5);
    let mut opts = gray_options(9.0);
    click(
        &mut r,
        &MockCanvas::new(10, 10),
        &MockView::origin(2),
        &mut opts,
        Connectivity::Four,
        (2, 2),
    );
    for y in 0..10 {
        for x in 0..10 {
            let expected = match x {
                0..=4 => 9.0,
                5 => 1.0,
                _ => 0.0,
            };
            assert_eq!(r.get(&[x, y]).unwrap(), expected);
        }
    }
}

#[test]
fn same_color_fill_writes_nothing() {
    let mut r = CountingRaster::new(fixtures::rgb(5, 5, [1.0, 2.0, 3.0]));
    let mut opts = ChannelOptions::new(
        ChannelVector::new([1.0, 2.0, 3.0], true),
        ChannelVector::new([0.0, 0.0, 0.0], true),
    );
    assert!(click(
        &mut r,
        &MockCanvas::new(5, 5),
        &MockView::origin(3),
        &mut opts,
        Connectivity::Eight,
        (2, 2),
    ));
    assert_eq!(r.writes(), 0);
    assert_eq!(r.reads(), 3);
}

#[test]
fn checkerboard_connectivity() {
    let canvas = MockCanvas::new(4, 4);
    let view = MockView::origin(2);

    let mut four = fixtures::checkerboard(4, 4);
    let before = four.clone();
    click(&mut four, &canvas, &view, &mut gray_options(7.0), Connectivity::Four, (0, 0));
    assert_eq!(fixtures::diff(&before, &four).len(), 1);

    let mut eight = fixtures::checkerboard(4, 4);
    click(&mut eight, &canvas, &view, &mut gray_options(7.0), Connectivity::Eight, (0, 0));
    let changed = fixtures::diff(&before, &eight);
    assert_eq!(changed.len(), 8);
    assert!(changed.iter().all(|p| (p[0] + p[1]) % 2 == 0));
}

#[test]
fn outside_click_reads_nothing() {
    let mut r = CountingRaster::new(fixtures::uniform(10, 10, 0.0));
    let mut opts = gray_options(255.0);
    let consumed = click(
        &mut r,
        &MockCanvas::new(10, 10),
        &MockView::origin(2),
        &mut opts,
        Connectivity::Eight,
        (10, 4),
    );
    assert!(consumed);
    assert_eq!(r.reads(), 0);
    assert_eq!(r.writes(), 0);
}

#[test]
fn shuffled_axes_fill_one_slice() {
    let mut r = fixtures::shuffled(3, 3, 2, 4);
    let before = r.clone();
    let mut opts = ChannelOptions::default();
    click(
        &mut r,
        &MockCanvas::new(3, 3),
        &MockView::new([0, 1, 0, 0]),
        &mut opts,
        Connectivity::Eight,
        (1, 1),
    );
    let changed = fixtures::diff(&before, &r);
    // 3x3 plane times 4 channels, Z = 1 only, foreground padded to 255.
    assert_eq!(changed.len(), 36);
    for p in &changed {
        assert_eq!(p[1], 1);
        assert_eq!(r.get(p).unwrap(), 255.0);
    }
}

proptest! {
    #[test]
    fn fill_stays_on_the_clicked_slice(
        depth in 1u64..4,
        z in 0i64..4,
        x in 0i32..5,
        y in 0i32..5,
    ) {
        let z = z % depth as i64;
        let mut r = fixtures::shuffled(5, 5, depth, 2);
        let before = r.clone();
        let mut opts = ChannelOptions::default();
        click(
            &mut r,
            &MockCanvas::new(5, 5),
            &MockView::new([0, z, 0, 0]),
            &mut opts,
            Connectivity::Four,
            (x, y),
        );
        let changed = fixtures::diff(&before, &r);
        prop_assert_eq!(changed.len(), 50);
        prop_assert!(changed.iter().all(|p| p[1] == z));
    }
}
