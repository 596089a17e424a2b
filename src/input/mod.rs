use std::ops::BitOr;

use egui::{Context, PointerButton, Pos2, Rect};

use crate::geometry::Point;

/// Pointer buttons and modifiers held during an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(1 << 1);
    /// Precision modifier (Shift)
    pub const FINE: Self = Self(1 << 2);

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_primary(&self) -> bool {
        self.contains(Self::PRIMARY)
    }

    pub fn is_secondary(&self) -> bool {
        self.contains(Self::SECONDARY)
    }

    pub fn is_fine(&self) -> bool {
        self.contains(Self::FINE)
    }

    pub fn with_fine(self, fine: bool) -> Self {
        if fine { self | Self::FINE } else { Self(self.0 & !Self::FINE.0) }
    }
}

impl BitOr for PointerButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Pointer input already mapped to canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasEvent {
    Press {
        at: Point,
        buttons: PointerButtons,
    },
    /// Motion while a button is held
    Drag {
        from: Point,
        to: Point,
        buttons: PointerButtons,
    },
    Release {
        at: Point,
        buttons: PointerButtons,
    },
}

impl CanvasEvent {
    pub fn buttons(&self) -> PointerButtons {
        match self {
            Self::Press { buttons, .. } | Self::Drag { buttons, .. } | Self::Release { buttons, .. } => *buttons,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Press { .. } => "press",
            Self::Drag { .. } => "drag",
            Self::Release { .. } => "release",
        }
    }
}

/// Map a screen position to the canvas pixel under it.
pub fn to_canvas_point(pos: Pos2, origin: Pos2, scale: f32) -> Point {
    Point::new(
        ((pos.x - origin.x) / scale).floor() as i32,
        ((pos.y - origin.y) / scale).floor() as i32,
    )
}

/// Handles converting raw egui pointer input into canvas events.
///
/// A gesture only starts from a press on the visible part of the canvas;
/// once started, drags and the release are reported wherever the pointer goes.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Option<Rect>,
    /// Part of the canvas rect that is on screen and under no other widget
    visible: Rect,
    scale: f32,
    held: Option<PointerButtons>,
    last: Option<Point>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl InputHandler {
    pub fn new(scale: f32) -> Self {
        Self {
            canvas_rect: None,
            visible: Rect::NOTHING,
            scale,
            held: None,
            last: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Update the screen rectangle the canvas is laid out in, and the part of
    /// it presses may start a gesture from.
    ///
    /// Inside a scroll area the layout rect can reach under neighbouring
    /// panels and scroll bars; pass the clipped, hovered area as `visible`.
    pub fn set_canvas_rect(&mut self, rect: Rect, visible: Rect) {
        self.canvas_rect = Some(rect);
        self.visible = rect.intersect(visible);
    }

    pub fn is_dragging(&self) -> bool {
        self.held.is_some()
    }

    fn map(&self, pos: Pos2) -> Option<Point> {
        self.canvas_rect
            .map(|rect| to_canvas_point(pos, rect.min, self.scale))
    }

    pub fn pointer_down(&mut self, pos: Pos2, buttons: PointerButtons) -> Option<CanvasEvent> {
        if self.held.is_some() || !self.visible.contains(pos) {
            return None;
        }
        let at = self.map(pos)?;
        self.held = Some(buttons);
        self.last = Some(at);
        Some(CanvasEvent::Press { at, buttons })
    }

    pub fn pointer_moved(&mut self, pos: Pos2, fine: bool) -> Option<CanvasEvent> {
        let buttons = self.held?.with_fine(fine);
        let to = self.map(pos)?;
        let from = self.last.replace(to)?;
        (from != to).then_some(CanvasEvent::Drag { from, to, buttons })
    }

    pub fn pointer_up(&mut self, pos: Option<Pos2>, fine: bool) -> Option<CanvasEvent> {
        let buttons = self.held.take()?.with_fine(fine);
        let last = self.last.take();
        let at = pos.and_then(|p| self.map(p)).or(last)?;
        Some(CanvasEvent::Release { at, buttons })
    }

    /// Process raw egui input and generate canvas events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let fine = input.modifiers.shift;
            let pos = input.pointer.interact_pos();

            for (button, flag) in [
                (PointerButton::Primary, PointerButtons::PRIMARY),
                (PointerButton::Secondary, PointerButtons::SECONDARY),
            ] {
                if input.pointer.button_pressed(button) {
                    if let Some(pos) = pos {
                        let buttons = flag.with_fine(fine);
                        events.extend(self.pointer_down(pos, buttons));
                    }
                }
            }

            if let Some(pos) = pos {
                events.extend(self.pointer_moved(pos, fine));
            }

            let released = [PointerButton::Primary, PointerButton::Secondary]
                .into_iter()
                .any(|b| input.pointer.button_released(b));
            if released || (self.held.is_some() && !input.pointer.any_down()) {
                events.extend(self.pointer_up(pos, fine));
            }
        });

        for event in &events {
            log::trace!("canvas input: {:?}", event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn handler() -> InputHandler {
        let mut handler = InputHandler::new(4.0);
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), vec2(40.0, 40.0));
        handler.set_canvas_rect(rect, rect);
        handler
    }

    #[test]
    fn test_to_canvas_point_divides_by_scale() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(to_canvas_point(Pos2::new(10.0, 20.0), origin, 4.0), Point::new(0, 0));
        assert_eq!(to_canvas_point(Pos2::new(17.9, 28.0), origin, 4.0), Point::new(1, 2));
        assert_eq!(to_canvas_point(Pos2::new(9.0, 19.0), origin, 4.0), Point::new(-1, -1));
    }

    #[test]
    fn test_gesture_sequence() {
        let mut handler = handler();
        let press = handler.pointer_down(Pos2::new(101.0, 51.0), PointerButtons::PRIMARY);
        assert_eq!(
            press,
            Some(CanvasEvent::Press {
                at: Point::new(0, 0),
                buttons: PointerButtons::PRIMARY
            })
        );
        // Same pixel, no drag
        assert_eq!(handler.pointer_moved(Pos2::new(102.0, 52.0), false), None);
        assert_eq!(
            handler.pointer_moved(Pos2::new(113.0, 51.0), false),
            Some(CanvasEvent::Drag {
                from: Point::new(0, 0),
                to: Point::new(3, 0),
                buttons: PointerButtons::PRIMARY
            })
        );
        let release = handler.pointer_up(Some(Pos2::new(113.0, 51.0)), true).unwrap();
        assert_eq!(release.kind(), "release");
        assert!(release.buttons().is_fine());
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = handler();
        assert_eq!(handler.pointer_down(Pos2::new(10.0, 10.0), PointerButtons::PRIMARY), None);
        assert_eq!(handler.pointer_moved(Pos2::new(110.0, 60.0), false), None);
        assert_eq!(handler.pointer_up(Some(Pos2::new(110.0, 60.0)), false), None);
    }

    #[test]
    fn test_press_on_scrolled_off_canvas_is_ignored() {
        let mut handler = InputHandler::new(8.0);
        // Scrolled so the canvas starts left of the window, under the tools panel.
        let canvas = Rect::from_min_size(Pos2::new(-220.0, 0.0), vec2(1600.0, 400.0));
        let viewport = Rect::from_min_max(Pos2::new(180.0, 0.0), Pos2::new(800.0, 400.0));
        handler.set_canvas_rect(canvas, viewport);

        assert_eq!(handler.pointer_down(Pos2::new(60.0, 20.0), PointerButtons::PRIMARY), None);
        assert!(!handler.is_dragging());
        assert_eq!(
            handler.pointer_down(Pos2::new(188.0, 20.0), PointerButtons::PRIMARY),
            Some(CanvasEvent::Press {
                at: Point::new(51, 2),
                buttons: PointerButtons::PRIMARY
            })
        );
    }

    #[test]
    fn test_press_when_canvas_not_hovered_is_ignored() {
        let mut handler = InputHandler::new(4.0);
        let rect = Rect::from_min_size(Pos2::new(0.0, 0.0), vec2(40.0, 40.0));
        handler.set_canvas_rect(rect, Rect::NOTHING);
        assert_eq!(handler.pointer_down(Pos2::new(10.0, 10.0), PointerButtons::PRIMARY), None);
    }

    #[test]
    fn test_release_off_window_uses_last_point() {
        let mut handler = handler();
        handler.pointer_down(Pos2::new(108.0, 58.0), PointerButtons::SECONDARY);
        assert_eq!(
            handler.pointer_up(None, false),
            Some(CanvasEvent::Release {
                at: Point::new(2, 2),
                buttons: PointerButtons::SECONDARY
            })
        );
    }

    #[test]
    fn test_button_flags() {
        let buttons = PointerButtons::SECONDARY | PointerButtons::FINE;
        assert!(buttons.is_secondary());
        assert!(buttons.is_fine());
        assert!(!buttons.is_primary());
        assert!(!buttons.with_fine(false).is_fine());
    }
}
