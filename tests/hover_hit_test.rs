use depth_chart_wasm::domain::chart::{
    CanvasSize, DepthGeometry, HOVER_THRESHOLD_PX, HoverState, HoverTarget, ScreenPoint, TooltipLayout,
    hit_test, hit_test_points, nearest_point,
};
use depth_chart_wasm::domain::order_book::{PriceLevel, Side, sample::sample_book};
use quickcheck_macros::quickcheck;

fn level() -> PriceLevel {
    PriceLevel {
        price: "1".into(),
        quantity: "1".into(),
        cumulative_quantity: "1".into(),
        cumulative_ratio: 0.5,
    }
}

fn screen_points<'a>(xs: &[f64], level: &'a PriceLevel) -> Vec<ScreenPoint<'a>> {
    xs.iter().map(|&x| ScreenPoint { x, y: 0.0, level }).collect()
}

#[test]
fn picks_the_closest_point() {
    assert_eq!(nearest_point(52.0, [10.0, 50.0, 90.0]), Some((1, 2.0)));
    let level = level();
    let points = screen_points(&[10.0, 50.0, 90.0], &level);
    assert_eq!(hit_test_points(52.0, &points, 3), Some(HoverTarget::new(Side::Buy, 1)));
}

#[test]
fn far_pointer_hovers_nothing() {
    let level = level();
    let points = screen_points(&[10.0, 50.0, 90.0], &level);
    assert_eq!(hit_test_points(10_000.0, &points, 3), None);
    assert_eq!(hit_test_points(90.0 + HOVER_THRESHOLD_PX, &points, 3), None);
}

#[test]
fn equidistant_points_resolve_to_lower_index() {
    let level = level();
    let points = screen_points(&[40.0, 60.0], &level);
    assert_eq!(hit_test_points(50.0, &points, 1), Some(HoverTarget::new(Side::Buy, 0)));
}

#[test]
fn sell_points_use_their_own_index() {
    let book = sample_book().unwrap();
    let geometry = DepthGeometry::build(&book, CanvasSize::new(600.0, 300.0));
    // gap is 20px: buy #0 at 280, sell #0 at 320
    assert_eq!(hit_test(281.0, &geometry), Some(HoverTarget::new(Side::Buy, 0)));
    assert_eq!(hit_test(319.0, &geometry), Some(HoverTarget::new(Side::Sell, 0)));
    assert_eq!(hit_test(381.0, &geometry), Some(HoverTarget::new(Side::Sell, 3)));
}

#[test]
fn center_gap_is_outside_the_threshold() {
    let book = sample_book().unwrap();
    let geometry = DepthGeometry::build(&book, CanvasSize::new(600.0, 300.0));
    assert_eq!(hit_test(300.0, &geometry), None);
}

#[test]
fn repeated_target_does_not_request_redraw() {
    let book = sample_book().unwrap();
    let geometry = DepthGeometry::build(&book, CanvasSize::new(600.0, 300.0));
    let layout = TooltipLayout::default();

    let mut state = HoverState::default();
    assert!(state.update(HoverState::resolve(281.0, &geometry, &book, &layout)));
    assert!(!state.update(HoverState::resolve(279.0, &geometry, &book, &layout)));
    assert!(state.update(HoverState::resolve(300.0, &geometry, &book, &layout)));
    assert!(!state.is_active());
    assert!(!state.clear());
}

#[quickcheck]
fn hover_is_always_within_threshold(pointer: i16) -> bool {
    let book = sample_book().unwrap();
    let geometry = DepthGeometry::build(&book, CanvasSize::new(600.0, 300.0));
    let pointer = pointer as f64 / 10.0;
    match hit_test(pointer, &geometry) {
        Some(target) => {
            let point = geometry.point(target.side, target.index).unwrap();
            (point.x - pointer).abs() < HOVER_THRESHOLD_PX
        }
        None => geometry.points().all(|p| (p.x - pointer).abs() >= HOVER_THRESHOLD_PX),
    }
}
