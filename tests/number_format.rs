use depth_chart_wasm::domain::number_format::{NumberFormat, PLACEHOLDER, RoundingMode, format_number};

#[test]
fn price_and_volume_presets() {
    insta::assert_snapshot!(format_number("1234.56789", &NumberFormat::price()), @"$1,234.56");
    insta::assert_snapshot!(format_number("0.4", &NumberFormat::volume()), @"0.4000");
    insta::assert_snapshot!(format_number(95550.0, &NumberFormat::price().decimals(0)), @"$95,550");
}

#[test]
fn signs() {
    let signed = NumberFormat::default().decimals(2).signed();
    insta::assert_snapshot!(format_number(-1234.5, &signed), @"-1,234.50");
    insta::assert_snapshot!(format_number(0.5, &signed), @"+0.50");
    insta::assert_snapshot!(format_number("0", &NumberFormat::default().signed()), @"0");
}

#[test]
fn natural_precision_trims_trailing_zeros() {
    insta::assert_snapshot!(format_number("12.3400", &NumberFormat::default()), @"12.34");
    insta::assert_snapshot!(format_number("1000000", &NumberFormat::default()), @"1,000,000");
}

#[test]
fn separators_and_affixes() {
    let plain = NumberFormat::default().decimals(2).without_separator();
    insta::assert_snapshot!(format_number("1234567.891", &plain), @"1234567.89");
    let btc = NumberFormat::default().decimals(1).suffix(" BTC");
    insta::assert_snapshot!(format_number("0.55", &btc), @"0.5 BTC");
    insta::assert_snapshot!(format_number("1,234.5", &NumberFormat::default()), @"1,234.5");
}

#[test]
fn rounding_modes() {
    let half_up = NumberFormat::default().decimals(2).rounding(RoundingMode::HalfUp);
    insta::assert_snapshot!(format_number(2.345, &half_up), @"2.35");
    insta::assert_snapshot!(format_number("-0.001", &NumberFormat::default().decimals(2)), @"-0.01");
}

#[test]
fn unusable_input_becomes_placeholder() {
    let opts = NumberFormat::price();
    assert_eq!(format_number(None::<&str>, &opts), PLACEHOLDER);
    assert_eq!(format_number("", &opts), PLACEHOLDER);
    assert_eq!(format_number("n/a", &opts), PLACEHOLDER);
    assert_eq!(format_number(f64::NAN, &opts), PLACEHOLDER);
    assert_eq!(format_number(f64::NEG_INFINITY, &opts), PLACEHOLDER);
}

#[test]
fn exponent_notation_past_the_digit_bounds_becomes_placeholder() {
    let volume = NumberFormat::volume();
    assert_eq!(format_number("1e2000000", &volume), PLACEHOLDER);
    assert_eq!(format_number("-1e-2000000", &volume), PLACEHOLDER);
    assert_eq!(format_number(1e300, &volume), PLACEHOLDER);
    assert_eq!(format_number("2.5e2", &volume), "250.0000");
}
