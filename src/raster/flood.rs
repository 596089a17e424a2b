use std::collections::VecDeque;

use crate::canvas::Canvas;
use crate::geometry::Point;

/// The 4-connected region of pixels sharing the seed's color.
///
/// The color to replace is captured once from the seed before the search, and
/// the canvas is only read, so the caller decides what to write afterwards.
/// A seed outside the canvas yields an empty region.
pub fn flood_region(canvas: &Canvas, seed: Point) -> Vec<Point> {
    if !canvas.contains(seed.x, seed.y) {
        return Vec::new();
    }

    let target = canvas.get(seed);
    let width = canvas.width();
    let mut admitted = vec![false; width * canvas.height()];
    let mut region = Vec::new();
    let mut frontier = VecDeque::from([seed]);
    admitted[seed.y as usize * width + seed.x as usize] = true;

    while let Some(p) = frontier.pop_front() {
        region.push(p);
        for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let n = Point::new(p.x + dx, p.y + dy);
            if !canvas.contains(n.x, n.y) {
                continue;
            }
            let idx = n.y as usize * width + n.x as usize;
            if admitted[idx] || canvas.get(n) != target {
                continue;
            }
            admitted[idx] = true;
            frontier.push_back(n);
        }
    }

    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_fills_whole_blank_canvas() {
        let canvas = Canvas::new(5, 4);
        assert_eq!(flood_region(&canvas, Point::new(2, 2)).len(), 20);
    }

    #[test]
    fn test_stops_at_walls() {
        let mut canvas = Canvas::new(5, 5);
        for y in 0..5 {
            canvas.set_pixel(2, y, Color::BLACK);
        }
        let region = flood_region(&canvas, Point::new(0, 0));
        assert_eq!(region.len(), 10);
        assert!(region.iter().all(|p| p.x < 2));
    }

    #[test]
    fn test_diagonal_neighbours_are_not_connected() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_pixel(1, 0, Color::BLACK);
        canvas.set_pixel(0, 1, Color::BLACK);
        let region = flood_region(&canvas, Point::new(0, 0));
        assert_eq!(region, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_seed_off_canvas() {
        let canvas = Canvas::new(3, 3);
        assert!(flood_region(&canvas, Point::new(-1, 1)).is_empty());
        assert!(flood_region(&canvas, Point::new(3, 0)).is_empty());
    }
}
