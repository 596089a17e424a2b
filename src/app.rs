use std::sync::Arc;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::EditorConfig;
use crate::controller::Controller;
use crate::geometry::Point;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::texture_manager::TextureManager;
use crate::tool::{ToolKind, ToolSettings};

/// The editor window: owns the controller plus everything the toolbox and
/// palette select.
pub struct PaintApp {
    config: EditorConfig,
    controller: Controller,
    settings: ToolSettings,
    input: InputHandler,
    textures: TextureManager,
    /// Grid cell the next tile capture copies from
    pub(crate) tile_cell: (usize, usize),
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        Self::from_config(config)
    }

    pub fn from_config(config: EditorConfig) -> Self {
        let controller = Controller::with_tool(config.new_canvas(), config.initial_tool);
        let mut textures = TextureManager::new();
        textures.invalidate();
        Self {
            settings: config.tool_settings(),
            input: InputHandler::new(config.display_scale),
            controller,
            textures,
            tile_cell: (0, 0),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        self.controller.select_tool(kind);
        self.textures.invalidate();
    }

    pub fn undo(&mut self) {
        if self.controller.undo() {
            self.textures.invalidate();
        }
    }

    /// Throw the drawing away and start on a blank canvas.
    pub fn new_canvas(&mut self) {
        self.controller.reset(self.config.new_canvas());
        self.textures.invalidate();
    }

    /// Copy the grid cell `tile_cell` of the live canvas into the tile stamp.
    pub fn capture_tile(&mut self) {
        let size = self.settings.tile_size;
        let (col, row) = self.tile_cell;
        let origin = Point::new((col * size) as i32, (row * size) as i32);
        let mut tile = Canvas::new(size, size);
        tile.blit(self.controller.live(), Point::new(-origin.x, -origin.y));
        log::info!("Captured {}x{} tile at {:?}", size, size, origin);
        self.settings.tile = Some(Arc::new(tile));
    }

    pub fn set_tile_from_image(&mut self, image: &image::RgbaImage) {
        self.settings.tile = Some(Arc::new(Canvas::from_image(image)));
    }

    /// Route this frame's pointer input over `rect` to the controller.
    /// Gestures only start inside `visible`.
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, rect: egui::Rect, visible: egui::Rect) {
        self.input.set_canvas_rect(rect, visible);
        for event in self.input.process_input(ctx) {
            let outcome = self.controller.handle(event, &self.settings);
            if let Some(pick) = outcome.picked {
                log::info!("Picked {:?} into {:?}", pick.color, pick.slot);
                self.settings.colors.apply_pick(pick);
            }
            self.textures.invalidate();
        }
    }

    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.textures.texture(ctx, self.controller.display())
    }

    pub(crate) fn display_scale(&self) -> f32 {
        self.input.scale()
    }

    pub(crate) fn background(&self) -> Color {
        self.settings.colors.background
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.undo();
        }

        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
