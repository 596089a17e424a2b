use crate::geometry::{Point, normalize_box};

/// Every pixel of the box spanned by two corners, inclusive.
pub fn rect_filled(a: Point, b: Point) -> Vec<Point> {
    let (min, max) = normalize_box(a, b);
    let mut points = Vec::with_capacity(((max.x - min.x + 1) * (max.y - min.y + 1)) as usize);
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            points.push(Point::new(x, y));
        }
    }
    points
}

/// The four boundary edges of the box spanned by two corners, each pixel once.
pub fn rect_outline(a: Point, b: Point) -> Vec<Point> {
    let (min, max) = normalize_box(a, b);
    let mut points = Vec::new();

    for x in min.x..=max.x {
        points.push(Point::new(x, min.y));
    }
    if max.y > min.y {
        for x in min.x..=max.x {
            points.push(Point::new(x, max.y));
        }
    }
    for y in (min.y + 1)..max.y {
        points.push(Point::new(min.x, y));
        if max.x > min.x {
            points.push(Point::new(max.x, y));
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_filled_three_by_three() {
        let points = rect_filled(Point::new(3, 3), Point::new(1, 1));
        assert_eq!(points.len(), 9);
        assert!(points.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_outline_skips_interior() {
        let points = rect_outline(Point::new(1, 1), Point::new(3, 3));
        let unique: HashSet<Point> = points.iter().copied().collect();
        assert_eq!(points.len(), 8);
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&Point::new(2, 2)));
    }

    #[test]
    fn test_degenerate_outlines_have_no_duplicates() {
        assert_eq!(rect_outline(Point::new(2, 2), Point::new(2, 2)), vec![Point::new(2, 2)]);
        assert_eq!(rect_outline(Point::new(0, 0), Point::new(3, 0)).len(), 4);
        assert_eq!(rect_outline(Point::new(0, 0), Point::new(0, 3)).len(), 4);
        assert_eq!(rect_outline(Point::new(0, 0), Point::new(1, 1)).len(), 4);
    }
}
