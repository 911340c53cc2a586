//! Linear referencing on line strings in planar (native) coordinates

use geo::{
    Closest, ClosestPoint, Coord, Distance, Euclidean, Length, Line, LineLocatePoint, LineString,
    Point,
};

/// Position of the point on a line string closest to some query point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLocation {
    /// Index of the segment holding the closest point
    pub segment: usize,
    /// Position within that segment, 0 at its start and 1 at its end
    pub segment_fraction: f64,
    /// Position along the whole line, 0 at its start and 1 at its end
    pub fraction: f64,
    /// Planar distance between the query point and the closest point
    pub distance: f64,
    /// The closest point itself
    pub point: Coord<f64>,
}

/// Closest point of one segment and its position as a fraction of the segment
fn closest_on_segment(segment: &Line<f64>, query: Point<f64>) -> (Point<f64>, f64) {
    let point = match segment.closest_point(&query) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => p,
        // zero-length segment
        Closest::Indeterminate => segment.start_point(),
    };
    let t = segment.line_locate_point(&point).unwrap_or(0.0);
    (point, t)
}

/// Locate the point of `line` closest to `point`.
///
/// On equal distances the earliest position along the line wins.
/// Returns `None` for empty line strings.
pub fn locate_point(line: &LineString<f64>, point: Coord<f64>) -> Option<LineLocation> {
    let query = Point::from(point);

    if line.0.len() == 1 {
        let only = line.0[0];
        return Some(LineLocation {
            segment: 0,
            segment_fraction: 0.0,
            fraction: 0.0,
            distance: Euclidean.distance(Point::from(only), query),
            point: only,
        });
    }

    let total = Euclidean.length(line);
    let mut best: Option<LineLocation> = None;
    let mut travelled = 0.0;

    for (idx, segment) in line.lines().enumerate() {
        let (closest, t) = closest_on_segment(&segment, query);
        let distance = Euclidean.distance(closest, query);
        let seg_len = Euclidean.length(&segment);

        if best.is_none_or(|b| distance < b.distance) {
            let fraction = if total > 0.0 {
                ((travelled + t * seg_len) / total).clamp(0.0, 1.0)
            } else {
                0.0
            };
            best = Some(LineLocation {
                segment: idx,
                segment_fraction: t,
                fraction,
                distance,
                point: closest.0,
            });
        }
        travelled += seg_len;
    }

    best
}

/// Split a line string at a location obtained from [`locate_point`].
///
/// The first part runs from the line start to the location, the second from
/// the location to the line end; both share the location as a boundary.
/// A part collapsed onto a single coordinate is returned as a degenerate
/// two-coordinate line so that it stays a valid line string.
pub fn split_at_location(
    line: &LineString<f64>,
    location: &LineLocation,
) -> (LineString<f64>, LineString<f64>) {
    let coords = &line.0;
    if coords.is_empty() {
        return (LineString::new(vec![]), LineString::new(vec![]));
    }

    let segment = location.segment.min(coords.len().saturating_sub(2));
    let split = location.point;

    let mut head: Vec<Coord<f64>> = coords[..=segment].to_vec();
    if head.last() != Some(&split) {
        head.push(split);
    }

    let mut tail = vec![split];
    tail.extend(
        coords[(segment + 1).min(coords.len())..]
            .iter()
            .copied()
            .skip_while(|c| *c == split),
    );

    (degenerate_if_needed(head), degenerate_if_needed(tail))
}

/// Split a line string at a normalized position along its length
pub fn split_at_fraction(
    line: &LineString<f64>,
    fraction: f64,
) -> (LineString<f64>, LineString<f64>) {
    let fraction = fraction.clamp(0.0, 1.0);
    let target = fraction * Euclidean.length(line);
    let segment_count = line.lines().len();

    let mut travelled = 0.0;
    let mut location = LineLocation {
        segment: 0,
        segment_fraction: 0.0,
        fraction,
        distance: 0.0,
        point: line.0.first().copied().unwrap_or(Coord { x: 0.0, y: 0.0 }),
    };

    for (idx, segment) in line.lines().enumerate() {
        let seg_len = Euclidean.length(&segment);
        if travelled + seg_len >= target || idx + 1 == segment_count {
            let t = if seg_len > 0.0 {
                ((target - travelled) / seg_len).clamp(0.0, 1.0)
            } else {
                0.0
            };
            location.segment = idx;
            location.segment_fraction = t;
            location.point = segment.start + segment.delta() * t;
            break;
        }
        travelled += seg_len;
    }

    split_at_location(line, &location)
}

fn degenerate_if_needed(mut coords: Vec<Coord<f64>>) -> LineString<f64> {
    if coords.len() == 1 {
        coords.push(coords[0]);
    }
    LineString::new(coords)
}
