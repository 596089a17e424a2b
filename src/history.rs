use crate::canvas::Canvas;
use crate::tool::{Tool, ToolInstance};

/// The base canvas plus every tool applied on top of it, oldest first.
///
/// Only the newest entry may still be mid-gesture. Replaying the finished
/// entries over the base reproduces the controller's live canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionHistory {
    base: Canvas,
    actions: Vec<ToolInstance>,
}

impl ActionHistory {
    pub fn new(base: Canvas) -> Self {
        Self {
            base,
            actions: Vec::new(),
        }
    }

    pub fn base(&self) -> &Canvas {
        &self.base
    }

    pub fn push(&mut self, action: ToolInstance) {
        self.actions.push(action);
    }

    /// Remove the newest entry
    pub fn pop(&mut self) -> Option<ToolInstance> {
        self.actions.pop()
    }

    pub fn top(&self) -> Option<&ToolInstance> {
        self.actions.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut ToolInstance> {
        self.actions.last_mut()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolInstance> {
        self.actions.iter()
    }

    /// Drop every entry and start over from `base`
    pub fn reset(&mut self, base: Canvas) {
        self.base = base;
        self.actions.clear();
    }

    /// Rebuild a canvas from the base by committing every finished entry in
    /// order. Color picks are not re-delivered.
    pub fn replay(&self) -> Canvas {
        let mut canvas = self.base.clone();
        for action in self.actions.iter().filter(|a| a.is_ready()) {
            if let Err(e) = action.commit(&mut canvas) {
                log::error!("replay skipped {}: {}", action.name(), e);
            }
        }
        canvas
    }
}
