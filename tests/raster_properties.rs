use std::collections::BTreeSet;

use pixel_slammer::raster::{flood_region, line};
use pixel_slammer::{Canvas, Color, Point};

const ENDPOINTS: [(i32, i32); 9] = [(0, 0), (7, 2), (-3, 5), (4, -6), (0, 9), (9, 0), (-5, -5), (2, 11), (13, 1)];

#[test]
fn test_line_is_symmetric() {
    for &a in &ENDPOINTS {
        for &b in &ENDPOINTS {
            let forward: BTreeSet<_> = line(a.into(), b.into()).into_iter().collect();
            let backward: BTreeSet<_> = line(b.into(), a.into()).into_iter().collect();
            assert_eq!(forward, backward, "{:?} -> {:?}", a, b);
        }
    }
}

#[test]
fn test_line_is_connected() {
    for &a in &ENDPOINTS {
        for &b in &ENDPOINTS {
            let points = line(a.into(), b.into());
            let (dx, dy) = ((b.0 - a.0).abs(), (b.1 - a.1).abs());
            assert_eq!(points.len() as i32, dx.max(dy) + 1);
            for pair in points.windows(2) {
                let (sx, sy) = ((pair[1].x - pair[0].x).abs(), (pair[1].y - pair[0].y).abs());
                if dx >= dy {
                    assert_eq!(sx, 1);
                    assert!(sy <= 1);
                } else {
                    assert_eq!(sy, 1);
                    assert!(sx <= 1);
                }
            }
        }
    }
}

fn checkered() -> Canvas {
    let mut canvas = Canvas::new(9, 9);
    for y in 0..9 {
        for x in 0..9 {
            if (x / 3 + y / 3) % 2 == 0 {
                canvas.set_pixel(x, y, Color::BLUE);
            }
        }
    }
    canvas
}

#[test]
fn test_flood_fill_is_idempotent() {
    let mut canvas = checkered();
    let seed = Point::new(4, 4);
    canvas.plot(flood_region(&canvas, seed), Color::RED);
    let once = canvas.clone();
    canvas.plot(flood_region(&canvas, seed), Color::RED);
    assert_eq!(canvas, once);
}

#[test]
fn test_flood_fill_respects_four_connectivity() {
    let canvas = checkered();
    // Blue blocks only touch diagonally, so the centre block is isolated.
    let region: BTreeSet<Point> = flood_region(&canvas, Point::new(4, 4)).into_iter().collect();
    assert_eq!(region.len(), 9);
    assert!(region.iter().all(|p| (3..6).contains(&p.x) && (3..6).contains(&p.y)));
}

#[test]
fn test_out_of_range_access() {
    let mut canvas = Canvas::filled(3, 3, Color::RED);
    let before = canvas.clone();
    for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
        canvas.set_pixel(x, y, Color::BLUE);
        assert_eq!(canvas.get_pixel(x, y), Color::TRANSPARENT);
    }
    assert_eq!(canvas, before);
}
