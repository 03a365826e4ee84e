//! Use-Cases: Kontrollpunkte hinzufügen, entfernen, verschieben.

use crate::app::{AppState, PointerPhase};
use crate::core::ControlPointList;
use glam::Vec3;

/// Hängt einen Kontrollpunkt am Listenende an.
pub fn add_control_point(state: &mut AppState, position: Vec3) {
    state.curve.control_points.push(position);
    log::info!(
        "Kontrollpunkt {} hinzugefügt bei ({:.3}, {:.3}, {:.3})",
        state.curve.control_points.len() - 1,
        position.x,
        position.y,
        position.z
    );
}

/// Entfernt den ausgewählten Kontrollpunkt.
///
/// Bei höchstens drei Punkten oder ohne Auswahl passiert nichts.
pub fn remove_selected_control_point(state: &mut AppState) {
    let Some(index) = state.editor.selected_index() else {
        return;
    };

    match state.curve.control_points.remove(index) {
        Some(_) => log::info!("Kontrollpunkt {} entfernt", index),
        None => log::debug!(
            "Kontrollpunkt {} nicht entfernt: Minimum von {} Punkten",
            index,
            ControlPointList::MIN_POINTS
        ),
    }
}

/// Setzt den ausgewählten Kontrollpunkt auf eine neue Weltposition.
pub fn move_selected_control_point(state: &mut AppState, position: Vec3) {
    let Some(index) = state.editor.selected_index() else {
        return;
    };
    if !state.curve.control_points.set(index, position) {
        log::warn!("Ausgewählter Kontrollpunkt {} existiert nicht mehr", index);
        state.editor.phase = PointerPhase::Idle;
    }
}

/// Hebt die Auswahl auf (zurück nach `Idle`).
pub fn clear_selection(state: &mut AppState) {
    state.editor.phase = PointerPhase::Idle;
}

/// Setzt die Kontrollpunkte auf die Startkonfiguration zurück.
pub fn reset_control_points(state: &mut AppState) {
    state.curve.control_points = ControlPointList::initial();
    state.editor.phase = PointerPhase::Idle;
    log::info!("Kontrollpunkte zurückgesetzt");
}
