use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::trait_def::{Tool, ToolState};
use crate::tool::ColorPick;

use super::pencil::Pencil;

/// Freehand stroke that clears pixels back to transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eraser {
    stroke: Pencil,
}

impl Default for Eraser {
    fn default() -> Self {
        Self {
            stroke: Pencil::new(Color::TRANSPARENT),
        }
    }
}

impl Eraser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.stroke.points()
    }
}

impl Tool for Eraser {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn state(&self) -> ToolState {
        self.stroke.state()
    }

    fn press(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.stroke.add_point(self.name(), at, "press")
    }

    fn drag(&mut self, from: Point, to: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.stroke.add_segment(self.name(), from, to)
    }

    fn release(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.stroke.finish(self.name(), at)
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        self.stroke.apply(canvas)
    }
}
