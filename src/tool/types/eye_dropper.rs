use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::trait_def::{Tool, ToolState};
use crate::tool::{ColorPick, ColorSlot};

use super::click::Click;

/// Samples the pixel under the click into one of the working colors.
///
/// Never writes to the canvas. Releasing with the fine modifier targets the
/// right color instead of the left one. Unpainted (alpha 0) pixels yield the
/// background color, since that is what the user sees there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EyeDropper {
    background: Color,
    click: Click,
}

impl EyeDropper {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            click: Click::default(),
        }
    }

    pub fn target(&self) -> ColorSlot {
        if self.click.released_with().is_fine() {
            ColorSlot::Right
        } else {
            ColorSlot::Left
        }
    }

    pub fn sample(&self, canvas: &Canvas) -> Option<ColorPick> {
        let at = self.click.at()?;
        let color = match canvas.get(at) {
            c if c.is_transparent() => self.background,
            c => c,
        };
        Some(ColorPick {
            slot: self.target(),
            color,
        })
    }
}

impl Tool for EyeDropper {
    fn name(&self) -> &'static str {
        "Eye Dropper"
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
        self.sample(canvas)
    }
}
