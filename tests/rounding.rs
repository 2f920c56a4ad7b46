use meteogram::stats::round_half_up;

#[test]
fn halves_round_away_from_zero() {
    assert_eq!(round_half_up(0.25, 1), 0.3);
    assert_eq!(round_half_up(-0.25, 1), -0.3);
    assert_eq!(round_half_up(2.5, 0), 3.0);
    assert_eq!(round_half_up(-2.5, 0), -3.0);
}

#[test]
fn rounds_on_printed_digits_not_binary_neighbors() {
    // 8.45 stores as slightly less than 8.45 but still rounds up.
    assert_eq!(round_half_up(8.45, 1), 8.5);
    assert_eq!(round_half_up(2.675, 2), 2.68);
    // 0.1 + 0.2 prints as 0.30000000000000004.
    assert_eq!(round_half_up(0.1 + 0.2, 1), 0.3);
}

#[test]
fn carry_propagates_through_all_digits() {
    assert_eq!(round_half_up(0.999, 1), 1.0);
    assert_eq!(round_half_up(9.99, 1), 10.0);
    assert_eq!(round_half_up(99.95, 1), 100.0);
}

#[test]
fn short_fractions_pass_through() {
    assert_eq!(round_half_up(1.0, 2), 1.0);
    assert_eq!(round_half_up(3.1, 2), 3.1);
    assert_eq!(round_half_up(-7.0, 1), -7.0);
}

#[test]
fn precision_zero_gives_integers() {
    assert_eq!(round_half_up(123.456, 0), 123.0);
    assert_eq!(round_half_up(123.5, 0), 124.0);
    assert_eq!(round_half_up(0.4, 0), 0.0);
}

#[test]
fn ordinary_cases() {
    assert_eq!(round_half_up(12.34, 1), 12.3);
    assert_eq!(round_half_up(12.36, 1), 12.4);
    assert_eq!(round_half_up(0.04, 1), 0.0);
    assert_eq!(round_half_up(-12.36, 1), -12.4);
}

#[test]
fn non_finite_values_pass_through() {
    assert!(round_half_up(f64::NAN, 1).is_nan());
    assert_eq!(round_half_up(f64::INFINITY, 1), f64::INFINITY);
    assert_eq!(round_half_up(f64::NEG_INFINITY, 1), f64::NEG_INFINITY);
}
