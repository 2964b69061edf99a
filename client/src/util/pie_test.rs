use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn slices_cover_full_circle_in_order() {
    let slices = pie_slices(&[("a", "#111", 1), ("b", "#222", 1), ("c", "#333", 2)]);
    assert_eq!(slices.len(), 3);
    assert!(approx(slices[0].start_deg, 0.0));
    assert!(approx(slices[0].end_deg, 90.0));
    assert!(approx(slices[1].start_deg, 90.0));
    assert!(approx(slices[2].end_deg, 360.0));
    let sum: f64 = slices.iter().map(|s| s.end_deg - s.start_deg).sum();
    assert!(approx(sum, 360.0));
}

#[test]
fn zero_values_are_skipped() {
    let slices = pie_slices(&[("a", "#111", 0), ("b", "#222", 3)]);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "b");
}

#[test]
fn zero_total_yields_no_slices() {
    assert!(pie_slices(&[("a", "#111", 0)]).is_empty());
    assert!(pie_slices(&[]).is_empty());
}

#[test]
fn single_slice_is_full_circle_path() {
    let slices = pie_slices(&[("only", "#111", 5)]);
    assert_eq!(slices.len(), 1);
    assert!(approx(slices[0].fraction, 1.0));
    assert_eq!(slices[0].path.matches(" A ").count(), 2);
    assert!(!slices[0].path.contains(" L "));
}

#[test]
fn large_arc_flag_set_past_half_circle() {
    let small = describe_arc(60.0, 60.0, 50.0, 0.0, 90.0);
    let large = describe_arc(60.0, 60.0, 50.0, 0.0, 270.0);
    assert!(small.contains(" 0 0 1 "));
    assert!(large.contains(" 0 1 1 "));
}

#[test]
fn polar_zero_degrees_is_top_center() {
    let (x, y) = polar_to_cartesian(60.0, 60.0, 50.0, 0.0);
    assert!(approx(x, 60.0));
    assert!(approx(y, 10.0));
}

#[test]
fn percent_label_rounds() {
    assert_eq!(percent_label(0.333), "33%");
    assert_eq!(percent_label(1.0), "100%");
}
