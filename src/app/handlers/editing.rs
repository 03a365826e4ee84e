//! Handler für Modus-Wechsel und Kontrollpunkt-Bearbeitung.

use crate::app::use_cases;
use crate::app::{AppState, EditMode};

/// Wechselt den Bearbeitungsmodus. Ein laufender Drag bleibt bestehen,
/// Zeiger-Bewegungen werden außerhalb von Pan aber ignoriert.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode) {
    if state.editor.mode != mode {
        log::info!("Modus: {}", mode.label());
    }
    state.editor.mode = mode;
}

/// Hängt einen Kontrollpunkt an.
pub fn add_control_point(state: &mut AppState, position: glam::Vec3) {
    use_cases::control_points::add_control_point(state, position);
}

/// Wählt den nächstgelegenen Kontrollpunkt aus.
pub fn select_nearest(state: &mut AppState, device_pos: glam::Vec2) {
    use_cases::pick::select_nearest_control_point(state, device_pos);
}

/// Entfernt den ausgewählten Kontrollpunkt (sofern mehr als drei vorhanden).
pub fn remove_selected(state: &mut AppState) {
    use_cases::control_points::remove_selected_control_point(state);
}

/// Verschiebt den ausgewählten Kontrollpunkt.
pub fn move_selected(state: &mut AppState, position: glam::Vec3) {
    use_cases::control_points::move_selected_control_point(state, position);
}

/// Hebt die Auswahl auf.
pub fn clear_selection(state: &mut AppState) {
    use_cases::control_points::clear_selection(state);
}

/// Setzt die Kontrollpunkte zurück.
pub fn reset_control_points(state: &mut AppState) {
    use_cases::control_points::reset_control_points(state);
}
