pub mod settings;
pub mod types;
mod trait_def;

pub use trait_def::{Tool, ToolState};
pub use settings::{ColorPick, ColorSlot, ToolSettings, WorkingColors};
pub use types::{ToolInstance, ToolKind};

// Re-export specific tool implementations
pub use types::click::Click;
pub use types::eraser::Eraser;
pub use types::eye_dropper::EyeDropper;
pub use types::fill::{FloodFill, KillEraser};
pub use types::pencil::Pencil;
pub use types::shape::{ShapeKind, ShapeTool};
pub use types::tile_stamp::TileStamp;
