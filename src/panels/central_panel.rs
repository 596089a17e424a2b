use egui::{Color32, Rect, Sense, Stroke};

use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let scale = app.display_scale();
        let (width, height) = {
            let canvas = app.controller().display();
            (canvas.width() as f32 * scale, canvas.height() as f32 * scale)
        };

        egui::ScrollArea::both().drag_to_scroll(false).show(ui, |ui| {
            let (canvas_rect, response) =
                ui.allocate_exact_size(egui::vec2(width, height), Sense::drag());

            // Scroll bars and side panels sit on top of the scrolled canvas.
            let visible = if response.hovered() {
                ui.clip_rect()
            } else {
                Rect::NOTHING
            };
            app.handle_input(ctx, canvas_rect, visible);

            let texture = app.canvas_texture(ctx);
            let painter = ui.painter_at(canvas_rect);
            painter.rect_filled(canvas_rect, 0.0, Color32::from(app.background()));
            painter.image(
                texture,
                canvas_rect,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::DARK_GRAY));
        });
    });
}
