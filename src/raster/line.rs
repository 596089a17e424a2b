use crate::geometry::Point;

/// Rasterize the segment between `a` and `b` with Bresenham's midpoint algorithm.
///
/// Points come back in increasing order along the major axis, whichever way the
/// endpoints were given, so `line(a, b)` and `line(b, a)` cover the same pixels.
pub fn line(a: Point, b: Point) -> Vec<Point> {
    let (mut x0, mut y0, mut x1, mut y1) = (a.x, a.y, b.x, b.y);

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let delta_major = x1 - x0;
    let delta_minor = (y1 - y0).abs();
    let step = if y0 < y1 { 1 } else { -1 };

    let mut error = delta_major / 2;
    let mut minor = y0;
    let mut points = Vec::with_capacity(delta_major as usize + 1);

    for major in x0..=x1 {
        points.push(if steep {
            Point::new(minor, major)
        } else {
            Point::new(major, minor)
        });
        error -= delta_minor;
        if error < 0 {
            minor += step;
            error += delta_major;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pts(list: &[(i32, i32)]) -> Vec<Point> {
        list.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn test_diagonal() {
        let result = line(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(result, pts(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn test_single_point() {
        assert_eq!(line(Point::new(4, 7), Point::new(4, 7)), pts(&[(4, 7)]));
    }

    #[test]
    fn test_horizontal_and_vertical() {
        assert_eq!(
            line(Point::new(3, 1), Point::new(0, 1)),
            pts(&[(0, 1), (1, 1), (2, 1), (3, 1)])
        );
        assert_eq!(
            line(Point::new(2, 0), Point::new(2, 2)),
            pts(&[(2, 0), (2, 1), (2, 2)])
        );
    }

    #[test]
    fn test_shallow_line_steps_minor_axis_once() {
        let result = line(Point::new(0, 0), Point::new(4, 1));
        assert_eq!(result.len(), 5);
        assert_eq!(result.first(), Some(&Point::new(0, 0)));
        assert_eq!(result.last(), Some(&Point::new(4, 1)));
        let ys: HashSet<i32> = result.iter().map(|p| p.y).collect();
        assert_eq!(ys.len(), 2);
    }

    #[test]
    fn test_steep_negative_line_iterates_major_axis_upwards() {
        let result = line(Point::new(1, 5), Point::new(0, 0));
        let ys: Vec<i32> = result.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0, 1, 2, 3, 4, 5]);
    }
}
