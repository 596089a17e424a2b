#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod raster;
pub mod texture_manager;
pub mod tool;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use color::Color;
pub use config::EditorConfig;
pub use controller::{Controller, EventOutcome};
pub use error::{ConfigError, ToolError};
pub use geometry::Point;
pub use history::ActionHistory;
pub use input::{CanvasEvent, InputHandler, PointerButtons};
pub use tool::{ColorPick, ColorSlot, Tool, ToolInstance, ToolKind, ToolSettings, ToolState, WorkingColors};
