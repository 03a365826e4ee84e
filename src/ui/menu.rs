//! Top-Menü (Datei, Ansicht, Kurve).

use crate::app::{AppIntent, AppState, EditMode};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
                if ui.button("Näher").clicked() {
                    events.push(AppIntent::CameraDolly {
                        factor: 1.0 / state.options.camera_dolly_step,
                    });
                    ui.close();
                }
                if ui.button("Weiter weg").clicked() {
                    events.push(AppIntent::CameraDolly {
                        factor: state.options.camera_dolly_step,
                    });
                    ui.close();
                }
            });

            ui.menu_button("Kurve", |ui| {
                for mode in EditMode::ALL {
                    if ui
                        .add(egui::Button::new(mode.label()).selected(state.editor.mode == mode))
                        .clicked()
                    {
                        events.push(AppIntent::SetEditModeRequested { mode });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Punkte zurücksetzen").clicked() {
                    events.push(AppIntent::ResetControlPointsRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
