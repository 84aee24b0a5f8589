//! Horizontal-line ∩ Bézier-segment intersection (§4.8), implemented
//! literally from the quadratic formula and cubic subdivision rather than
//! via `kurbo`'s own `intersect_line` convenience method — see DESIGN.md for
//! why this is a deliberate divergence from the teacher's `deco.rs`.

use kurbo::Point;

use crate::provider::PathSegment;

/// Below this, two y-coordinates are treated as equal and a segment as
/// degenerate (horizontal, zero-length, etc).
const EPS: f64 = 1e-9;

/// Flatness threshold for cubic subdivision, in font-design units.
const FLATNESS_TOL: f64 = 0.5;

/// Maximum cubic subdivision depth.
const MAX_DEPTH: u32 = 10;

/// The x-coordinates at which `segment` crosses the horizontal line `y = line_y`.
pub fn intersect_horizontal(segment: &PathSegment, line_y: f64) -> Vec<f64> {
    match *segment {
        PathSegment::Line(l) => intersect_line(l.p0, l.p1, line_y),
        PathSegment::Quad(q) => intersect_quad(q.p0, q.p1, q.p2, line_y)
            .into_iter()
            .map(|(_, x)| x)
            .collect(),
        PathSegment::Cubic(c) => {
            let mut out = Vec::new();
            intersect_cubic(c.p0, c.p1, c.p2, c.p3, line_y, MAX_DEPTH, &mut out);
            out
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Parametric interpolation at the clamped y, per §4.8's "Line" rule.
fn intersect_line(p0: Point, p1: Point, y: f64) -> Vec<f64> {
    let d0 = p0.y - y;
    let d1 = p1.y - y;
    if d0.abs() < EPS && d1.abs() < EPS {
        return Vec::new();
    }
    if d0 * d1 > 0.0 {
        return Vec::new();
    }
    let denom = p1.y - p0.y;
    if denom.abs() < EPS {
        return Vec::new();
    }
    let t = ((y - p0.y) / denom).clamp(0.0, 1.0);
    vec![lerp(p0.x, p1.x, t)]
}

/// Solves `(y0 - 2*y1 + y2)*t^2 + 2*(y1 - y0)*t + (y0 - y) = 0` for roots in
/// `[0, 1]`, returning `(t, x)` pairs.
fn intersect_quad(p0: Point, p1: Point, p2: Point, y: f64) -> Vec<(f64, f64)> {
    let a = p0.y - 2.0 * p1.y + p2.y;
    let b = 2.0 * (p1.y - p0.y);
    let c = p0.y - y;

    let mut roots = Vec::new();
    if a.abs() < EPS {
        if b.abs() >= EPS {
            roots.push(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sqrt_d = disc.sqrt();
            roots.push((-b + sqrt_d) / (2.0 * a));
            roots.push((-b - sqrt_d) / (2.0 * a));
        }
    }

    roots
        .into_iter()
        .filter(|t| (-EPS..=1.0 + EPS).contains(t))
        .map(|t| t.clamp(0.0, 1.0))
        .map(|t| {
            let u = 1.0 - t;
            let x = u * u * p0.x + 2.0 * u * t * p1.x + t * t * p2.x;
            (t, x)
        })
        .collect()
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Perpendicular distance from `point` to the line through `a` and `b`.
fn perpendicular_distance(point: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len = (abx * abx + aby * aby).sqrt();
    let apx = point.x - a.x;
    let apy = point.y - a.y;
    if len < EPS {
        return (apx * apx + apy * apy).sqrt();
    }
    (abx * apy - aby * apx).abs() / len
}

/// Recursive De Casteljau subdivision (§4.8's "Cubic Bézier" rule): splits
/// until the control points are within `FLATNESS_TOL` of the chord, or
/// `depth` is exhausted, then treats the (sub)segment as a line.
fn intersect_cubic(p0: Point, p1: Point, p2: Point, p3: Point, y: f64, depth: u32, out: &mut Vec<f64>) {
    let flat = depth == 0
        || (perpendicular_distance(p1, p0, p3) < FLATNESS_TOL
            && perpendicular_distance(p2, p0, p3) < FLATNESS_TOL);

    if flat {
        out.extend(intersect_line(p0, p3, y));
        return;
    }

    let p01 = midpoint(p0, p1);
    let p12 = midpoint(p1, p2);
    let p23 = midpoint(p2, p3);
    let p012 = midpoint(p01, p12);
    let p123 = midpoint(p12, p23);
    let p0123 = midpoint(p012, p123);

    intersect_cubic(p0, p01, p012, p0123, y, depth - 1, out);
    intersect_cubic(p0123, p123, p23, p3, y, depth - 1, out);
}
