use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{ToolError, ToolResult};
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::ColorPick;

/// Lifecycle of a single tool instance.
///
/// `Ready` is terminal: the gesture is over and the tool only gets committed
/// (possibly many times, during undo replay) from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolState {
    Empty,
    Accumulating,
    Ready,
}

/// One gesture's worth of a drawing tool.
///
/// A tool accumulates press/drag/release input into its own geometry and
/// turns that geometry into pixel writes on whatever canvas it is given.
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    fn state(&self) -> ToolState;

    fn is_ready(&self) -> bool {
        self.state() == ToolState::Ready
    }

    /// Handle pointer press on the canvas.
    fn press(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()>;

    /// Handle pointer motion from `from` to `to` while a button is held.
    fn drag(&mut self, from: Point, to: Point, buttons: PointerButtons) -> ToolResult<()>;

    /// Handle pointer release. Finishes the gesture.
    fn release(&mut self, at: Point, buttons: PointerButtons) -> ToolResult<()>;

    /// Draw whatever has been accumulated so far. Never fails; a tool with no
    /// geometry yet leaves the canvas alone. Used directly for previews.
    fn apply(&self, canvas: &mut Canvas) -> Option<ColorPick>;

    /// Apply the finished gesture. Calling this repeatedly on equal canvases
    /// gives equal results.
    fn commit(&self, canvas: &mut Canvas) -> ToolResult<Option<ColorPick>> {
        let state = self.state();
        if state != ToolState::Ready {
            return Err(ToolError::NotReady {
                tool: self.name(),
                state,
            });
        }
        Ok(self.apply(canvas))
    }
}

/// Reject input once a tool has finished its gesture.
pub(crate) fn ensure_accepting(tool: &'static str, state: ToolState, event: &'static str) -> ToolResult<()> {
    if state == ToolState::Ready {
        log::debug!("{} ignored {} after release", tool, event);
        return Err(ToolError::AlreadyReady { tool, event });
    }
    Ok(())
}
