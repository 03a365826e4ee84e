//! Optionen-Dialog für Farben, Kamera und Kurven-Startwerte.

use crate::app::{AppIntent, AppState};
use crate::shared::MAX_SAMPLE_COUNT;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        changed |= color_edit(ui, "Kontrollpolygon:", &mut opts.polygon_color);
                        changed |= color_edit(ui, "Kontrollpunkte:", &mut opts.control_point_color);
                        changed |= color_edit(
                            ui,
                            "Gezogener Punkt:",
                            &mut opts.control_point_color_selected,
                        );
                        changed |= color_edit(ui, "Kurve:", &mut opts.curve_color);
                        ui.horizontal(|ui| {
                            ui.label("Punktgröße (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_size_px)
                                        .range(1.0..=30.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                    });

                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Kamera", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Öffnungswinkel (°):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_fov_y_degrees)
                                        .range(10.0..=120.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Dolly-Schritt (Scroll):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_dolly_step)
                                        .range(1.01..=2.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Abstand min:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_min_distance)
                                        .range(0.2..=20.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Abstand max:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.camera_max_distance)
                                        .range(1.0..=99.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                    });

                    // ── Kurve ───────────────────────────────────────
                    ui.collapsing("Kurve (Startwerte)", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Unterteilungen:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.default_sample_count)
                                        .range(1..=MAX_SAMPLE_COUNT),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Gewicht:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.default_rationality_weight)
                                        .range(0.0..=100.0)
                                        .speed(0.05),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(
                                &mut opts.default_show_sample_points,
                                "Abtastpunkte anzeigen",
                            )
                            .changed();
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.insert(0, AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = from_color32(c);
            changed = true;
        }
    });
    changed
}

/// RGBA `[0, 1]` → egui-Farbe (ungemischtes Alpha).
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn from_color32(c: egui::Color32) -> [f32; 4] {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ]
}
