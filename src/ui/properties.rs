//! Properties-Panel (rechte Seitenleiste) für Kurvenparameter und Kontrollpunkte.

use crate::app::{AppIntent, AppState};

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
///
/// Die Textfelder schreiben in die Puffer in `state.ui`; geparst wird
/// nachsichtig im Intent-Mapping.
pub fn render_properties_panel(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.separator();

            egui::Grid::new("curve_params")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Unterteilungen:");
                    if ui
                        .text_edit_singleline(&mut state.ui.sample_count_input)
                        .changed()
                    {
                        events.push(AppIntent::SampleCountChanged {
                            input: state.ui.sample_count_input.clone(),
                        });
                    }
                    ui.end_row();

                    ui.label("Gewicht:");
                    if ui
                        .text_edit_singleline(&mut state.ui.weight_input)
                        .changed()
                    {
                        events.push(AppIntent::RationalityWeightChanged {
                            input: state.ui.weight_input.clone(),
                        });
                    }
                    ui.end_row();
                });

            ui.small(format!(
                "Aktiv: {} Unterteilungen, Gewicht {:.3}",
                state.curve.sample_count, state.curve.rationality_weight
            ));

            let mut show_samples = state.curve.show_sample_points;
            if ui
                .checkbox(&mut show_samples, "Abtastpunkte anzeigen")
                .changed()
            {
                events.push(AppIntent::ShowSamplePointsToggled {
                    visible: show_samples,
                });
            }

            ui.separator();
            ui.horizontal(|ui| {
                ui.heading("Kontrollpunkte");
                ui.label(format!("({})", state.control_point_count()));
            });

            if ui.button("Punkte zurücksetzen").clicked() {
                events.push(AppIntent::ResetControlPointsRequested);
            }

            let selected = state.editor.selected_index();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, point) in state.curve.control_points.as_slice().iter().enumerate() {
                    let text = format!(
                        "{}: ({:.2}, {:.2}, {:.2})",
                        index, point.x, point.y, point.z
                    );
                    if selected == Some(index) {
                        ui.label(egui::RichText::new(text).strong());
                    } else {
                        ui.label(text);
                    }
                }
            });
        });

    events
}
