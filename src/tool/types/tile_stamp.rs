use std::sync::Arc;

use crate::canvas::Canvas;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::trait_def::{Tool, ToolState};
use crate::tool::ColorPick;

use super::click::Click;

/// Places the current tile image into the grid cell under the click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileStamp {
    tile: Option<Arc<Canvas>>,
    tile_size: usize,
    click: Click,
}

impl TileStamp {
    pub fn new(tile: Option<Arc<Canvas>>, tile_size: usize) -> Self {
        Self {
            tile,
            tile_size: tile_size.max(1),
            click: Click::default(),
        }
    }

    /// Top-left corner of the grid cell containing `p`.
    pub fn snap(&self, p: Point) -> Point {
        let size = self.tile_size as i32;
        Point::new(p.x.div_euclid(size) * size, p.y.div_euclid(size) * size)
    }
}

impl Tool for TileStamp {
    fn name(&self) -> &'static str {
        "Tile Stamp"
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
        if let (Some(tile), Some(at)) = (&self.tile, self.click.at()) {
            canvas.blit(tile, self.snap(at));
        }
        None
    }
}
