use crate::geometry::{Point, normalize_box};

use super::span::fill_spans;

/// Outline of the ellipse inscribed in the box spanned by two corners.
///
/// One quadrant is walked with an incremental integer error term; each step
/// moves in x, in y, or diagonally, so the dominant axis switches on its own at
/// the slope-1 crossover. Every step emits the four mirrored points.
///
/// Guarantees: all points lie inside the box, the set is mirror-symmetric about
/// both center lines of the box, and it is 8-connected. The four extreme
/// rows and columns of the box are always touched. A box of zero width or
/// height collapses to a straight run, and a zero-sized box to one point.
/// Points may repeat where quadrants meet.
pub fn ellipse_outline(a: Point, b: Point) -> Vec<Point> {
    let (min, max) = normalize_box(a, b);
    let (mut x0, mut x1) = (min.x as i64, max.x as i64);
    let mut y0 = min.y as i64;

    let width = x1 - x0;
    let height = max.y as i64 - y0;
    let odd_height = height & 1;

    let mut dx = 4 * (1 - width) * height * height;
    let mut dy = 4 * (odd_height + 1) * width * width;
    let mut err = dx + dy + odd_height * width * width;

    y0 += (height + 1) / 2;
    let mut y1 = y0 - odd_height;
    let step_x = 8 * width * width;
    let step_y = 8 * height * height;

    let mut points = Vec::new();
    let mut emit = |x: i64, y: i64| points.push(Point::new(x as i32, y as i32));

    loop {
        emit(x1, y0);
        emit(x0, y0);
        emit(x0, y1);
        emit(x1, y1);

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += step_x;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += step_y;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    // Flat ellipses stop before reaching the top and bottom rows.
    while y0 - y1 <= height {
        emit(x0 - 1, y0);
        emit(x1 + 1, y0);
        y0 += 1;
        emit(x0 - 1, y1);
        emit(x1 + 1, y1);
        y1 -= 1;
    }

    points
}

/// Solid ellipse: the outline plus its interior, filled by scanline spans.
pub fn ellipse_filled(a: Point, b: Point) -> Vec<Point> {
    fill_spans(&ellipse_outline(a, b))
}
