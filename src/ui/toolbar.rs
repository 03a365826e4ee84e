//! Toolbar für die Modus-Auswahl.

use crate::app::{AppIntent, AppState, EditMode};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            for (shortcut, mode) in EditMode::ALL.into_iter().enumerate() {
                let label = format!("{} ({})", mode.label(), shortcut + 1);
                if ui
                    .add(egui::Button::new(label).selected(active == mode))
                    .clicked()
                    && active != mode
                {
                    events.push(AppIntent::SetEditModeRequested { mode });
                }
            }

            ui.separator();

            if ui.button("Kamera zurücksetzen").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
        });
    });

    events
}
