// src/report/pie.rs

//! Two-slice SVG pie geometry
//!
//! Slices are filled arc paths from the center. Angles are measured from
//! twelve o'clock, clockwise, so the OK slice starts at the top.

/// Point on a circle at `angle_deg` (0 = top, clockwise).
fn polar(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let a = (angle_deg - 90.0).to_radians();
    (cx + r * a.cos(), cy + r * a.sin())
}

/// Filled pie-slice path from `start_deg` sweeping `sweep_deg` degrees.
fn arc_path(cx: f64, cy: f64, r: f64, start_deg: f64, sweep_deg: f64) -> String {
    let (x1, y1) = polar(cx, cy, r, start_deg);
    let (x2, y2) = polar(cx, cy, r, start_deg + sweep_deg);
    let large_arc = if sweep_deg.abs() > 180.0 { 1 } else { 0 };
    let sweep_flag = if sweep_deg >= 0.0 { 1 } else { 0 };
    format!("M {cx},{cy} L {x1:.3},{y1:.3} A {r},{r} 0 {large_arc} {sweep_flag} {x2:.3},{y2:.3} Z")
}

/// Render an OK-vs-Blocked pie as an inline SVG.
///
/// A zero-count slice is omitted entirely; a zero total renders an empty
/// ring rather than dividing by zero.
pub fn pie_svg(ok: usize, blocked: usize, size: f64) -> String {
    let total = (ok + blocked).max(1) as f64;
    let cx = size / 2.0;
    let cy = size / 2.0;
    let r = size * 0.48;

    let ok_sweep = ok as f64 / total * 360.0;
    let blocked_sweep = 360.0 - ok_sweep;

    let mut parts = String::new();
    let mut start = 0.0;
    if ok > 0 {
        parts.push_str(&format!(
            "<path d='{}' fill='var(--blue)'/>",
            arc_path(cx, cy, r, start, ok_sweep)
        ));
        start += ok_sweep;
    }
    if blocked > 0 {
        parts.push_str(&format!(
            "<path d='{}' fill='var(--red)'/>",
            arc_path(cx, cy, r, start, blocked_sweep)
        ));
    }

    format!(
        "<svg viewBox='0 0 {size} {size}' class='pie'>{parts}\
         <circle cx='{cx}' cy='{cy}' r='{r}' fill='none' stroke='#ffffff' stroke-width='1'/></svg>"
    )
}
