use depth_chart_wasm::domain::chart::{CanvasSize, HoverTarget, Point, Tooltip, TooltipLayout};
use depth_chart_wasm::domain::order_book::{DepthBook, RawLevel, Side, sample::sample_book};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

#[test]
fn anchor_uses_padded_coordinates() {
    let book = sample_book().unwrap();
    let layout = TooltipLayout::default();
    let anchor = layout.anchor(HoverTarget::new(Side::Buy, 0), &book, CanvasSize::new(600.0, 300.0)).unwrap();

    // half width 295, gap 295 / 15
    let expected_x = 300.0 - 295.0 / 15.0;
    let expected_y = 10.0 + 290.0 * (1.0 - 0.2 / 18.0) - 30.0;
    assert!(close(anchor, Point::new(expected_x, expected_y)), "{anchor:?}");
}

#[test]
fn anchor_is_clamped_horizontally() {
    let book = sample_book().unwrap();
    let layout = TooltipLayout::default();
    let size = CanvasSize::new(600.0, 300.0);

    let deepest_buy = layout.anchor(HoverTarget::new(Side::Buy, 14), &book, size).unwrap();
    assert_eq!(deepest_buy.x, 30.0);

    let deepest_sell = layout.anchor(HoverTarget::new(Side::Sell, 14), &book, size).unwrap();
    assert_eq!(deepest_sell.x, 540.0);
}

#[test]
fn narrow_canvas_pins_to_the_right_margin() {
    let book = sample_book().unwrap();
    let anchor = TooltipLayout::default()
        .anchor(HoverTarget::new(Side::Buy, 0), &book, CanvasSize::new(50.0, 300.0))
        .unwrap();
    assert_eq!(anchor.x, -10.0);
}

#[test]
fn anchor_never_goes_above_the_top() {
    let book = DepthBook::from_raw(&[RawLevel::new("10", "1")], &[]).unwrap();
    let anchor = TooltipLayout::default()
        .anchor(HoverTarget::new(Side::Buy, 0), &book, CanvasSize::new(600.0, 300.0))
        .unwrap();
    assert_eq!(anchor.y, 0.0);
}

#[test]
fn out_of_range_target_has_no_anchor() {
    let book = sample_book().unwrap();
    let layout = TooltipLayout::default();
    assert_eq!(layout.anchor(HoverTarget::new(Side::Sell, 15), &book, CanvasSize::new(600.0, 300.0)), None);
}

#[test]
fn tooltip_lines_are_formatted() {
    let book = sample_book().unwrap();
    let tooltip = Tooltip::describe(HoverTarget::new(Side::Buy, 2), Point::new(0.0, 0.0), &book).unwrap();
    insta::assert_snapshot!(tooltip.lines().join("\n"), @r"
    Side: buy
    Index: 2
    Price: $95,300.00
    Quantity: 0.4000
    Total: 0.9000
    ");
}

#[test]
fn tooltip_reads_the_sell_side_by_its_own_index() {
    let book = sample_book().unwrap();
    let tooltip = Tooltip::describe(HoverTarget::new(Side::Sell, 2), Point::new(0.0, 0.0), &book).unwrap();
    assert_eq!(tooltip.price, "$95,800.00");
    assert_eq!(tooltip.total, "0.6000");
}
