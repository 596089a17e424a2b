use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;

/// Keeps the GPU copy of the displayed canvas, re-uploading only after it
/// has been invalidated.
#[derive(Default)]
pub struct TextureManager {
    handle: Option<TextureHandle>,
    dirty: bool,
    uploads: u64,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the texture stale; the next call to `texture` re-uploads.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Texture showing `canvas`, uploaded with nearest filtering so pixels
    /// stay square when scaled up.
    pub fn texture(&mut self, ctx: &Context, canvas: &Canvas) -> TextureId {
        let id = if let Some(handle) = self.handle.as_mut() {
            if self.dirty {
                handle.set(canvas.to_color_image(), TextureOptions::NEAREST);
                self.uploads += 1;
            }
            handle.id()
        } else {
            let handle = ctx.load_texture("canvas", canvas.to_color_image(), TextureOptions::NEAREST);
            self.uploads += 1;
            let id = handle.id();
            self.handle = Some(handle);
            id
        };
        self.dirty = false;
        id
    }

    /// Number of uploads so far
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}
