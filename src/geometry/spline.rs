use egui::Pos2;

/// Curve tension used for every stroke
pub const DEFAULT_TENSION: f32 = 0.5;

/// Target distance between samples when flattening a curve, in pixels
const FLATTEN_STEP: f32 = 2.0;
const MAX_CURVE_SAMPLES: usize = 64;

/// An interior point with its incoming and outgoing control points
#[derive(Debug, Clone, Copy)]
struct Anchor {
    control_in: Pos2,
    point: Pos2,
    control_out: Pos2,
}

/// Flatten `points` into a smooth polyline passing through every input point.
///
/// Each interior point gets control points along the chord of its neighbours,
/// split in proportion to the two adjacent segment lengths and scaled by
/// `tension`. The curve enters the first interior point and leaves the last
/// one with quadratic segments and uses cubic segments in between. Fewer than
/// three points, or zero tension, yield the input unchanged.
pub fn smooth_path(points: &[Pos2], tension: f32) -> Vec<Pos2> {
    if points.len() < 3 || tension == 0.0 {
        return points.to_vec();
    }

    let anchors: Vec<Anchor> = points
        .windows(3)
        .filter_map(|w| {
            control_points(w[0], w[1], w[2], tension).map(|(control_in, control_out)| Anchor {
                control_in,
                point: w[1],
                control_out,
            })
        })
        .collect();

    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return points.to_vec();
    };

    let start = points[0];
    let end = points[points.len() - 1];

    let mut path = vec![start];
    push_quadratic(&mut path, start, first.control_in, first.point);
    for pair in anchors.windows(2) {
        push_cubic(
            &mut path,
            pair[0].point,
            pair[0].control_out,
            pair[1].control_in,
            pair[1].point,
        );
    }
    push_quadratic(&mut path, last.point, last.control_out, end);
    path
}

/// Control points around `p1`, or `None` when both neighbours coincide with it
fn control_points(p0: Pos2, p1: Pos2, p2: Pos2, tension: f32) -> Option<(Pos2, Pos2)> {
    let d01 = p0.distance(p1);
    let d12 = p1.distance(p2);
    let total = d01 + d12;
    if total == 0.0 {
        return None;
    }

    let fa = tension * d01 / total;
    let fb = tension * d12 / total;
    let chord = p2 - p0;
    Some((p1 - chord * fa, p1 + chord * fb))
}

fn sample_count(hull_length: f32) -> usize {
    ((hull_length / FLATTEN_STEP).ceil() as usize).clamp(1, MAX_CURVE_SAMPLES)
}

// The start point is already on the path; only the samples after it are pushed.
fn push_quadratic(path: &mut Vec<Pos2>, a: Pos2, c: Pos2, b: Pos2) {
    let n = sample_count(a.distance(c) + c.distance(b));
    for i in 1..=n {
        let t = i as f32 / n as f32;
        let u = 1.0 - t;
        let x = u * u * a.x + 2.0 * u * t * c.x + t * t * b.x;
        let y = u * u * a.y + 2.0 * u * t * c.y + t * t * b.y;
        path.push(Pos2::new(x, y));
    }
}

fn push_cubic(path: &mut Vec<Pos2>, a: Pos2, c1: Pos2, c2: Pos2, b: Pos2) {
    let n = sample_count(a.distance(c1) + c1.distance(c2) + c2.distance(b));
    for i in 1..=n {
        let t = i as f32 / n as f32;
        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * u * u * t;
        let w2 = 3.0 * u * t * t;
        let w3 = t * t * t;
        let x = w0 * a.x + w1 * c1.x + w2 * c2.x + w3 * b.x;
        let y = w0 * a.y + w1 * c1.y + w2 * c2.y + w3 * b.y;
        path.push(Pos2::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_short_paths_unchanged() {
        assert!(smooth_path(&[], DEFAULT_TENSION).is_empty());
        let one = [pos2(1.0, 1.0)];
        assert_eq!(smooth_path(&one, DEFAULT_TENSION), one.to_vec());
        let two = [pos2(1.0, 1.0), pos2(9.0, 4.0)];
        assert_eq!(smooth_path(&two, DEFAULT_TENSION), two.to_vec());
    }

    #[test]
    fn test_passes_through_every_point() {
        let points = [
            pos2(0.0, 0.0),
            pos2(20.0, 10.0),
            pos2(40.0, -5.0),
            pos2(60.0, 30.0),
        ];
        let path = smooth_path(&points, DEFAULT_TENSION);
        assert_eq!(path.first(), Some(&points[0]));
        assert_eq!(path.last(), Some(&points[3]));
        for point in &points {
            assert!(path.contains(point), "{point:?} missing from smoothed path");
        }
        assert!(path.len() > points.len());
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 0.0)];
        let path = smooth_path(&points, DEFAULT_TENSION);
        assert!(path.iter().all(|p| p.y == 0.0));
        assert!(path.iter().all(|p| (0.0..=20.0).contains(&p.x)));
    }

    #[test]
    fn test_control_points_split_by_segment_length() {
        let (c_in, c_out) =
            control_points(pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(20.0, 0.0), 0.5).unwrap();
        assert_eq!(c_in, pos2(5.0, 0.0));
        assert_eq!(c_out, pos2(15.0, 0.0));

        let p = pos2(3.0, 3.0);
        assert!(control_points(p, p, p, 0.5).is_none());
    }

    #[test]
    fn test_repeated_points_do_not_produce_nan() {
        let p = pos2(5.0, 5.0);
        let path = smooth_path(&[p, p, p, pos2(10.0, 10.0)], DEFAULT_TENSION);
        assert!(path.iter().all(|q| q.x.is_finite() && q.y.is_finite()));
    }
}
