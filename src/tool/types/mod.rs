pub mod click;
pub mod eraser;
pub mod eye_dropper;
pub mod fill;
pub mod pencil;
pub mod shape;
pub mod tile_stamp;

pub use eraser::Eraser;
pub use eye_dropper::EyeDropper;
pub use fill::{FloodFill, KillEraser};
pub use pencil::Pencil;
pub use shape::{ShapeKind, ShapeTool};
pub use tile_stamp::TileStamp;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::trait_def::{Tool, ToolState};
use crate::tool::{ColorPick, ToolSettings};

/// The tools offered in the toolbox.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Line,
    Rectangle,
    HollowRectangle,
    Ellipse,
    HollowEllipse,
    FloodFill,
    KillEraser,
    EyeDropper,
    TileStamp,
}

impl ToolKind {
    pub const ALL: [ToolKind; 11] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::HollowRectangle,
        ToolKind::Ellipse,
        ToolKind::HollowEllipse,
        ToolKind::FloodFill,
        ToolKind::KillEraser,
        ToolKind::EyeDropper,
        ToolKind::TileStamp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Line => ShapeKind::Line.name(),
            Self::Rectangle => ShapeKind::Rectangle.name(),
            Self::HollowRectangle => ShapeKind::HollowRectangle.name(),
            Self::Ellipse => ShapeKind::Ellipse.name(),
            Self::HollowEllipse => ShapeKind::HollowEllipse.name(),
            Self::FloodFill => "Fill",
            Self::KillEraser => "Kill Eraser",
            Self::EyeDropper => "Eye Dropper",
            Self::TileStamp => "Tile Stamp",
        }
    }
}

/// A live tool of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolInstance {
    Pencil(Pencil),
    Eraser(Eraser),
    Shape(ShapeTool),
    FloodFill(FloodFill),
    KillEraser(KillEraser),
    EyeDropper(EyeDropper),
    TileStamp(TileStamp),
}

impl ToolInstance {
    /// Start a fresh tool for a gesture begun with `buttons`.
    pub fn new(kind: ToolKind, buttons: PointerButtons, settings: &ToolSettings) -> Self {
        let color = settings.colors.for_buttons(buttons);
        let shape = |shape| Self::Shape(ShapeTool::new(shape, color));
        match kind {
            ToolKind::Pencil => Self::Pencil(Pencil::new(color)),
            ToolKind::Eraser => Self::Eraser(Eraser::new()),
            ToolKind::Line => shape(ShapeKind::Line),
            ToolKind::Rectangle => shape(ShapeKind::Rectangle),
            ToolKind::HollowRectangle => shape(ShapeKind::HollowRectangle),
            ToolKind::Ellipse => shape(ShapeKind::Ellipse),
            ToolKind::HollowEllipse => shape(ShapeKind::HollowEllipse),
            ToolKind::FloodFill => Self::FloodFill(FloodFill::new(color)),
            ToolKind::KillEraser => Self::KillEraser(KillEraser::new()),
            ToolKind::EyeDropper => Self::EyeDropper(EyeDropper::new(settings.colors.background)),
            ToolKind::TileStamp => {
                Self::TileStamp(TileStamp::new(settings.tile.clone(), settings.tile_size))
            }
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            Self::Pencil(t) => t,
            Self::Eraser(t) => t,
            Self::Shape(t) => t,
            Self::FloodFill(t) => t,
            Self::KillEraser(t) => t,
            Self::EyeDropper(t) => t,
            Self::TileStamp(t) => t,
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            Self::Pencil(t) => t,
            Self::Eraser(t) => t,
            Self::Shape(t) => t,
            Self::FloodFill(t) => t,
            Self::KillEraser(t) => t,
            Self::EyeDropper(t) => t,
            Self::TileStamp(t) => t,
        }
    }
}

impl Tool for ToolInstance {
    fn name(&self) -> &'static str {
        self.as_tool().name()
    }

    fn state(&self) -> ToolState {
        self.as_tool().state()
    }

    fn press(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()> {
        self.as_tool_mut().press(at, buttons)
    }

    fn drag(&mut self, from: Point, to: Point, buttons: PointerButtons) -> ToolResult<()> {
        self.as_tool_mut().drag(from, to, buttons)
    }

    fn release(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()> {
        self.as_tool_mut().release(at, buttons)
    }

    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick> {
        self.as_tool().apply(canvas)
    }
}
