use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::raster;
use crate::tool::trait_def::{Tool, ToolState, ensure_accepting};
use crate::tool::ColorPick;

/// Geometry drawn between the press point and the release point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    HollowRectangle,
    Ellipse,
    HollowEllipse,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::HollowRectangle => "Hollow Rectangle",
            Self::Ellipse => "Ellipse",
            Self::HollowEllipse => "Hollow Ellipse",
        }
    }

    pub fn rasterize(&self, start: Point, end: Point) -> Vec<Point> {
        match self {
            Self::Line => raster::line(start, end),
            Self::Rectangle => raster::rect_filled(start, end),
            Self::HollowRectangle => raster::rect_outline(start, end),
            Self::Ellipse => raster::ellipse_filled(start, end),
            Self::HollowEllipse => raster::ellipse_outline(start, end),
        }
    }
}

/// Press-drag-release tool: keeps the first press as `start` and follows the
/// pointer with `end` until release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeTool {
    shape: ShapeKind,
    color: Color,
    start: Option<Point>,
    end: Option<Point>,
    state: ToolState,
}

impl ShapeTool {
    pub fn new(shape: ShapeKind, color: Color) -> Self {
        Self {
            shape,
            color,
            start: None,
            end: None,
            state: ToolState::Empty,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Pixels the shape covers, or nothing if the gesture has no extent yet.
    pub fn points(&self) -> Vec<Point> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => self.shape.rasterize(start, end),
            _ => Vec::new(),
        }
    }

    fn track(&mut self, start: Point, end: Point) {
        self.start.get_or_insert(start);
        self.end = Some(end);
        self.state = ToolState::Accumulating;
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        self.shape.name()
    }

    fn state(&self) -> ToolState {
        self.state
    }

    fn press(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        ensure_accepting(self.name(), self.state, "press")?;
        self.track(at, at);
        Ok(())
    }

    fn drag(&mut self, from: Point, to: Point, _buttons: PointerButtons) -> ToolResult<()> {
        ensure_accepting(self.name(), self.state, "drag")?;
        self.track(from, to);
        Ok(())
    }

    fn release(&mut self, at: Point, _buttons: PointerButtons) -> ToolResult<()> {
        ensure_accepting(self.name(), self.state, "release")?;
        self.track(at, at);
        self.state = ToolState::Ready;
        Ok(())
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        canvas.plot(self.points(), self.color);
        None
    }
}
