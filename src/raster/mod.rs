//! Pure rasterization routines.
//!
//! Every function here maps geometric input to pixel coordinates and never
//! touches a canvas, except [`flood_region`] which only reads one.

mod ellipse;
mod flood;
mod line;
mod rect;
mod span;

pub use ellipse::{ellipse_filled, ellipse_outline};
pub use flood::flood_region;
pub use line::line;
pub use rect::{rect_filled, rect_outline};
pub use span::fill_spans;
