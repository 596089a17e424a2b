use crate::error::ToolResult;
use crate::geometry::Point;
use crate::input::PointerButtons;
use crate::tool::trait_def::{ToolState, ensure_accepting};

/// Input bookkeeping shared by tools that act on a single click.
///
/// The press position wins; a release without a press uses its own position.
/// Modifiers are captured at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    at: Option<Point>,
    released_with: PointerButtons,
    state: ToolState,
}

impl Default for Click {
    fn default() -> Self {
        Self {
            at: None,
            released_with: PointerButtons::NONE,
            state: ToolState::Empty,
        }
    }
}

impl Click {
    pub fn at(&self) -> Option<Point> {
        self.at
    }

    pub fn released_with(&self) -> PointerButtons {
        self.released_with
    }

    pub fn state(&self) -> ToolState {
        self.state
    }

    pub fn press(&mut self, tool: &'static str, at: Point) -> ToolResult<()> {
        ensure_accepting(tool, self.state, "press")?;
        self.at.get_or_insert(at);
        self.state = ToolState::Accumulating;
        Ok(())
    }

    pub fn drag(&mut self, tool: &'static str) -> ToolResult<()> {
        ensure_accepting(tool, self.state, "drag")
    }

    pub fn release(&mut self, tool: &'static str, at: Point, buttons: PointerButtons) -> ToolResult<()> {
        ensure_accepting(tool, self.state, "release")?;
        self.at.get_or_insert(at);
        self.released_with = buttons;
        self.state = ToolState::Ready;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_position_wins_over_release() {
        let mut click = Click::default();
        click.press("test", Point::new(1, 2)).unwrap();
        click.drag("test").unwrap();
        click.release("test", Point::new(5, 5), PointerButtons::FINE).unwrap();
        assert_eq!(click.at(), Some(Point::new(1, 2)));
        assert!(click.released_with().is_fine());
        assert_eq!(click.state(), ToolState::Ready);
    }

    #[test]
    fn test_ready_click_rejects_input() {
        let mut click = Click::default();
        click.release("test", Point::new(0, 0), PointerButtons::PRIMARY).unwrap();
        assert!(click.press("test", Point::new(1, 1)).is_err());
        assert_eq!(click.at(), Some(Point::new(0, 0)));
    }
}
