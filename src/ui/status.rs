//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Kontrollpunkte: {} | Grad: {}",
                state.control_point_count(),
                state.control_point_count().saturating_sub(1)
            ));

            ui.separator();

            ui.label(format!(
                "Unterteilungen: {} | Gewicht: {:.3}",
                state.curve.sample_count, state.curve.rationality_weight
            ));

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Kamera: ({:.1}, {:.1}, {:.1})",
                camera.position.x, camera.position.y, camera.position.z
            ));

            ui.separator();

            ui.label(format!("Modus: {}", state.editor.mode.label()));
            if let Some(index) = state.editor.selected_index() {
                ui.label(format!("| Punkt {} gegriffen", index));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
