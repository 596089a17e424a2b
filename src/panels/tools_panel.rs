use egui::{Color32, Sense};

use crate::PaintApp;
use crate::tool::{ColorSlot, ToolKind};

const SWATCH: f32 = 18.0;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let selected = app.controller().selected_tool();
            for kind in ToolKind::ALL {
                if ui.selectable_label(selected == kind, kind.label()).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    app.select_tool(kind);
                }
            }
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.controller().can_undo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.button("New").clicked() {
                    app.new_canvas();
                }
            });
            ui.label(format!("Actions: {}", app.controller().history().len()));
            ui.separator();

            ui.heading("Colors");
            let colors = &mut app.settings_mut().colors;
            for (label, color) in [
                ("Left", &mut colors.left),
                ("Right", &mut colors.right),
                ("Background", &mut colors.background),
            ] {
                ui.horizontal(|ui| {
                    let mut c32 = Color32::from(*color);
                    if ui.color_edit_button_srgba(&mut c32).changed() {
                        *color = c32.into();
                    }
                    ui.label(label);
                });
            }

            // Left click sets the left color, right click the right one.
            let palette = app.config().palette.clone();
            ui.horizontal_wrapped(|ui| {
                for color in palette {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(SWATCH, SWATCH), Sense::click());
                    ui.painter().rect_filled(rect, 2.0, Color32::from(color));
                    let slot = if response.clicked() {
                        Some(ColorSlot::Left)
                    } else if response.secondary_clicked() {
                        Some(ColorSlot::Right)
                    } else {
                        None
                    };
                    if let Some(slot) = slot {
                        app.settings_mut().colors.set(slot, color);
                    }
                }
            });
            ui.separator();

            ui.heading("Tile");
            ui.horizontal(|ui| {
                ui.label("Cell");
                ui.add(egui::DragValue::new(&mut app.tile_cell.0).range(0..=255));
                ui.add(egui::DragValue::new(&mut app.tile_cell.1).range(0..=255));
                if ui.button("Capture").clicked() {
                    app.capture_tile();
                }
            });
            match &app.settings().tile {
                Some(tile) => ui.label(format!("{}x{} tile ready", tile.width(), tile.height())),
                None => ui.label("No tile captured"),
            };
        });
}
