use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::raster;
use crate::tool::trait_def::{Tool, ToolState};
use crate::tool::ColorPick;

use super::click::Click;

/// Bucket fill of the 4-connected region under the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodFill {
    color: Color,
    click: Click,
}

impl FloodFill {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            click: Click::default(),
        }
    }
}

fn fill_from(canvas: &mut Canvas, seed: Option<Point>, color: Color) {
    if let Some(seed) = seed {
        let region = raster::flood_region(canvas, seed);
        log::debug!("flood fill from {:?} covers {} pixels", seed, region.len());
        canvas.plot(region, color);
    }
}

impl Tool for FloodFill {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn state(&self) -> ToolState {
        self.click.state()
    }

    fn press(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.click.press(self.name(), at)
    }

    fn drag(&mut self, _from: Point, _to: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.click.drag(self.name())
    }

    fn release(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()> {
        self.click.release(self.name(), at, buttons)
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        fill_from(canvas, self.click.at(), self.color);
        None
    }
}

/// Wipes the whole 4-connected region under the click back to transparent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KillEraser {
    click: Click,
}

impl KillEraser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for KillEraser {
    fn name(&self) -> &'static str {
        "Kill Eraser"
    }

    fn state(&self) -> ToolState {
        self.click.state()
    }

    fn press(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.click.press(self.name(), at)
    }

    fn drag(&mut self, _from: Point, _to: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.click.drag(self.name())
    }

    fn release(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()> {
        self.click.release(self.name(), at, buttons)
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        fill_from(canvas, self.click.at(), Color::TRANSPARENT);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click<T: Tool>(tool: &mut T, at: Point) {
        tool.press(at, PointerButtons::PRIMARY).unwrap();
        tool.release(at, PointerButtons::PRIMARY).unwrap();
    }

    #[test]
    fn test_fill_same_color_is_idempotent() {
        let mut canvas = Canvas::filled(6, 6, Color::BLUE);
        canvas.set_pixel(3, 3, Color::RED);
        let before = canvas.clone();
        let mut fill = FloodFill::new(Color::BLUE);
        click(&mut fill, Point::new(0, 0));
        fill.commit(&mut canvas).unwrap();
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_kill_eraser_clears_region_only() {
        let mut canvas = Canvas::filled(4, 1, Color::RED);
        canvas.set_pixel(2, 0, Color::BLACK);
        let mut kill = KillEraser::new();
        click(&mut kill, Point::new(0, 0));
        kill.commit(&mut canvas).unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Color::TRANSPARENT);
        assert_eq!(canvas.get_pixel(1, 0), Color::TRANSPARENT);
        assert_eq!(canvas.get_pixel(2, 0), Color::BLACK);
        assert_eq!(canvas.get_pixel(3, 0), Color::RED);
    }

    #[test]
    fn test_commit_before_release_fails() {
        let mut canvas = Canvas::new(2, 2);
        let mut fill = FloodFill::new(Color::RED);
        fill.press(Point::new(0, 0), PointerButtons::PRIMARY).unwrap();
        assert!(fill.commit(&mut canvas).is_err());
        assert_eq!(canvas, Canvas::new(2, 2));
    }
}
