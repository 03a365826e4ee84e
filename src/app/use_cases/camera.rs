//! Use-Case-Funktionen für Kamera-Steuerung und Viewport.

use crate::app::AppState;

/// Setzt die Kamera auf die Startkonfiguration aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = state.options.initial_camera();
}

/// Fährt die Kamera entlang ihrer Blickachse, begrenzt auf den
/// konfigurierten Abstandsbereich.
pub fn dolly(state: &mut AppState, factor: f32) {
    state.view.camera.dolly_by(
        factor,
        state.options.camera_min_distance,
        state.options.camera_max_distance,
    );
}

/// Aktualisiert die Viewport-Größe. Negative oder nicht-endliche Werte werden zu 0.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
    state.view.viewport_size = [clean(size[0]), clean(size[1])];
}
