use std::collections::BTreeSet;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::raster;
use crate::tool::trait_def::{Tool, ToolState, ensure_accepting};
use crate::tool::ColorPick;

/// Freehand stroke: every point the pointer visits during one gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pencil {
    color: Color,
    points: BTreeSet<Point>,
    state: ToolState,
}

impl Pencil {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            points: BTreeSet::new(),
            state: ToolState::Empty,
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    pub(crate) fn add_point(&mut self, tool: &'static str, p: Point, event: &'static str) -> ToolResult<()> {
        ensure_accepting(tool, self.state, event)?;
        self.points.insert(p);
        self.state = ToolState::Accumulating;
        Ok(())
    }

    // Pointer motion arrives in jumps; join them so the stroke has no holes.
    pub(crate) fn add_segment(&mut self, tool: &'static str, from: Point, to: Point) -> ToolResult<()> {
        ensure_accepting(tool, self.state, "drag")?;
        self.points.extend(raster::line(from, to));
        self.state = ToolState::Accumulating;
        Ok(())
    }

    pub(crate) fn finish(&mut self, tool: &'static str, p: Point) -> ToolResult<()> {
        self.add_point(tool, p, "release")?;
        self.state = ToolState::Ready;
        Ok(())
    }
}

impl Tool for Pencil {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn state(&self) -> ToolState {
        self.state
    }

    fn press(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.add_point(self.name(), at, "press")
    }

    fn drag(&mut self, from: Point, to: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.add_segment(self.name(), from, to)
    }

    fn release(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        self.finish(self.name(), at)
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        canvas.plot(self.points(), self.color);
        None
    }
}
