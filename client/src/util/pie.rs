//! Pie-chart geometry rendered as plain SVG paths.

#[cfg(test)]
#[path = "pie_test.rs"]
mod pie_test;

pub const PIE_CENTER: f64 = 60.0;
pub const PIE_RADIUS: f64 = 50.0;

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub color: String,
    pub value: usize,
    pub fraction: f64,
    pub start_deg: f64,
    pub end_deg: f64,
    pub path: String,
}

/// Point on the circle at `deg`, measured clockwise from 12 o'clock.
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = (deg - 90.0).to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path for a wedge from `start_deg` to `end_deg`. A full sweep is drawn
/// as two half arcs since a single arc with equal endpoints renders nothing.
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_deg: f64, end_deg: f64) -> String {
    let sweep = end_deg - start_deg;
    if sweep >= 360.0 - f64::EPSILON {
        let top = cy - r;
        let bottom = cy + r;
        return format!("M {cx:.3} {top:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {bottom:.3} A {r:.3} {r:.3} 0 1 1 {cx:.3} {top:.3} Z");
    }
    let (sx, sy) = polar_to_cartesian(cx, cy, r, start_deg);
    let (ex, ey) = polar_to_cartesian(cx, cy, r, end_deg);
    let large = u8::from(sweep > 180.0);
    format!("M {cx:.3} {cy:.3} L {sx:.3} {sy:.3} A {r:.3} {r:.3} 0 {large} 1 {ex:.3} {ey:.3} Z")
}

/// Build slices for `(label, color, value)` entries. Zero values are skipped;
/// an all-zero input yields no slices.
pub fn pie_slices(entries: &[(&str, &str, usize)]) -> Vec<PieSlice> {
    let total: usize = entries.iter().map(|(_, _, v)| v).sum();
    if total == 0 {
        return Vec::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let total_f = total as f64;
    let mut cursor = 0.0;
    entries
        .iter()
        .filter(|(_, _, v)| *v > 0)
        .map(|&(label, color, value)| {
            #[allow(clippy::cast_precision_loss)]
            let fraction = value as f64 / total_f;
            let start_deg = cursor;
            let end_deg = start_deg + fraction * 360.0;
            cursor = end_deg;
            PieSlice {
                label: label.to_owned(),
                color: color.to_owned(),
                value,
                fraction,
                start_deg,
                end_deg,
                path: describe_arc(PIE_CENTER, PIE_CENTER, PIE_RADIUS, start_deg, end_deg),
            }
        })
        .collect()
}

/// Whole-number percentage label.
pub fn percent_label(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}
