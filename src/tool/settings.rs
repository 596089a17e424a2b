use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::input::PointerButtons;

/// Which working color an eye-dropper pick replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSlot {
    Left,
    Right,
}

/// A color sampled by the eye-dropper, handed back to whoever owns the
/// working colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPick {
    pub slot: ColorSlot,
    pub color: Color,
}

/// The colors the presentation layer currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingColors {
    /// Painted with the primary button
    pub left: Color,
    /// Painted with the secondary button
    pub right: Color,
    /// Shown behind transparent pixels
    pub background: Color,
}

impl Default for WorkingColors {
    fn default() -> Self {
        Self {
            left: Color::BLACK,
            right: Color::WHITE,
            background: Color::WHITE,
        }
    }
}

impl WorkingColors {
    /// The color a gesture started with `buttons` paints with.
    pub fn for_buttons(&self, buttons: PointerButtons) -> Color {
        if buttons.is_secondary() { self.right } else { self.left }
    }

    pub fn get(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Left => self.left,
            ColorSlot::Right => self.right,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, color: Color) {
        match slot {
            ColorSlot::Left => self.left = color,
            ColorSlot::Right => self.right = color,
        }
    }

    pub fn apply_pick(&mut self, pick: ColorPick) {
        self.set(pick.slot, pick.color);
    }
}

/// Everything a new tool instance needs from presentation state.
///
/// Values are copied into the tool when its gesture starts, so changing them
/// later never alters an action already in the history.
#[derive(Debug, Clone)]
pub struct ToolSettings {
    pub colors: WorkingColors,
    /// Image placed by the tile stamp
    pub tile: Option<Arc<Canvas>>,
    /// Grid the tile stamp snaps to
    pub tile_size: usize,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            colors: WorkingColors::default(),
            tile: None,
            tile_size: 16,
        }
    }
}
