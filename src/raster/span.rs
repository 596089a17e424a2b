use std::collections::BTreeMap;

use crate::geometry::Point;

/// Fill a closed outline by scanline spans.
///
/// Outline points are grouped by row and sorted by column; every gap wider than
/// one pixel between neighbours on the same row is filled. The result contains
/// the outline itself plus the interior, sorted by row then column.
///
/// This is only correct for outlines that are convex along each row, such as
/// ellipses and convex polygon edges.
pub fn fill_spans(outline: &[Point]) -> Vec<Point> {
    let mut rows: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for p in outline {
        rows.entry(p.y).or_default().push(p.x);
    }

    let mut points = Vec::with_capacity(outline.len());
    for (y, mut xs) in rows {
        xs.sort_unstable();
        xs.dedup();
        for pair in xs.windows(2) {
            points.push(Point::new(pair[0], y));
            for x in (pair[0] + 1)..pair[1] {
                points.push(Point::new(x, y));
            }
        }
        if let Some(&last) = xs.last() {
            points.push(Point::new(last, y));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_between_row_endpoints() {
        let outline = [Point::new(0, 0), Point::new(4, 0), Point::new(2, 1)];
        let filled = fill_spans(&outline);
        assert_eq!(
            filled,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn test_adjacent_points_are_not_duplicated() {
        let outline = [Point::new(1, 3), Point::new(2, 3), Point::new(2, 3)];
        assert_eq!(fill_spans(&outline), vec![Point::new(1, 3), Point::new(2, 3)]);
    }

    #[test]
    fn test_empty_outline() {
        assert!(fill_spans(&[]).is_empty());
    }
}
