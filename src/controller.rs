use crate::canvas::Canvas;
use crate::history::ActionHistory;
use crate::input::CanvasEvent;
use crate::tool::{ColorPick, Tool, ToolInstance, ToolKind, ToolSettings, ToolState};

/// What handling one pointer event did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// A gesture finished and was committed to the live canvas
    pub committed: bool,
    /// Color sampled by a committed eye-dropper
    pub picked: Option<ColorPick>,
}

/// Routes pointer events to tools and owns every canvas the editor shows.
#[derive(Debug, Clone)]
pub struct Controller {
    history: ActionHistory,
    live: Canvas,
    preview: Option<Canvas>,
    selected: ToolKind,
}

impl Controller {
    pub fn new(base: Canvas) -> Self {
        Self {
            live: base.clone(),
            history: ActionHistory::new(base),
            preview: None,
            selected: ToolKind::default(),
        }
    }

    pub fn with_tool(base: Canvas, kind: ToolKind) -> Self {
        let mut controller = Self::new(base);
        controller.selected = kind;
        controller
    }

    /// Switch tools. A gesture still in progress is abandoned.
    pub fn select_tool(&mut self, kind: ToolKind) {
        if self.gesture_state().is_some() {
            if let Some(cancelled) = self.history.pop() {
                log::debug!("{} gesture cancelled by tool change", cancelled.name());
            }
            self.preview = None;
        }
        if kind != self.selected {
            log::info!("Tool changed: {} -> {}", self.selected.label(), kind.label());
        }
        self.selected = kind;
    }

    pub fn selected_tool(&self) -> ToolKind {
        self.selected
    }

    /// The canvas to show: the preview while a gesture is in progress,
    /// otherwise the live canvas.
    pub fn display(&self) -> &Canvas {
        self.preview.as_ref().unwrap_or(&self.live)
    }

    pub fn live(&self) -> &Canvas {
        &self.live
    }

    pub fn preview(&self) -> Option<&Canvas> {
        self.preview.as_ref()
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// State of the gesture in progress, if there is one.
    pub fn gesture_state(&self) -> Option<ToolState> {
        self.history
            .top()
            .map(|tool| tool.state())
            .filter(|state| *state != ToolState::Ready)
    }

    /// Start over on a new base canvas with an empty history.
    pub fn reset(&mut self, base: Canvas) {
        log::info!("Canvas reset to {}x{}", base.width(), base.height());
        self.live = base.clone();
        self.history.reset(base);
        self.preview = None;
    }

    /// Feed one pointer event through the active tool.
    ///
    /// Starts a tool of the selected kind when no gesture is in progress,
    /// forwards the event, commits the tool to the live canvas if the event
    /// finished it, and refreshes the preview otherwise.
    pub fn handle(&mut self, event: CanvasEvent, settings: &ToolSettings) -> EventOutcome {
        if self.gesture_state().is_none() {
            let tool = ToolInstance::new(self.selected, event.buttons(), settings);
            log::debug!("{} gesture started by {}", tool.name(), event.kind());
            self.history.push(tool);
        }

        let Some(tool) = self.history.top_mut() else {
            log::error!("no active tool for {} event", event.kind());
            return EventOutcome::default();
        };

        let result = match event {
            CanvasEvent::Press { at, buttons } => tool.press(at, buttons),
            CanvasEvent::Drag { from, to, buttons } => tool.drag(from, to, buttons),
            CanvasEvent::Release { at, buttons } => tool.release(at, buttons),
        };
        if let Err(e) = result {
            log::error!("{} rejected {} event: {}", tool.name(), event.kind(), e);
            debug_assert!(false, "tool rejected event: {e}");
            return EventOutcome::default();
        }

        if !tool.is_ready() {
            let mut preview = self.live.clone();
            tool.apply(&mut preview);
            self.preview = Some(preview);
            return EventOutcome::default();
        }

        self.preview = None;
        let name = tool.name();
        match tool.commit(&mut self.live) {
            Ok(picked) => {
                log::debug!("{} committed ({} actions)", name, self.history.len());
                EventOutcome {
                    committed: true,
                    picked,
                }
            }
            Err(e) => {
                log::error!("commit failed: {}", e);
                debug_assert!(false, "commit of ready tool failed: {e}");
                EventOutcome::default()
            }
        }
    }

    /// Drop the newest action and rebuild the live canvas from the rest.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(undone) = self.history.pop() else {
            log::warn!("Nothing to undo");
            return false;
        };
        self.live = self.history.replay();
        self.preview = None;
        log::info!("Undid {} ({} actions left)", undone.name(), self.history.len());
        true
    }
}
