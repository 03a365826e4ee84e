//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::curve;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Kurve wird bei jedem Aufruf neu abgetastet, sodass Punkte und
/// Kurve immer aus demselben Zustand stammen.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let control_points = state.curve.control_points.as_slice().to_vec();
    let curve_samples = curve::sample(
        &control_points,
        state.curve.rationality_weight,
        state.curve.sample_count,
    );

    RenderScene {
        control_points,
        curve_samples,
        selected_index: state.editor.selected_index(),
        show_sample_points: state.curve.show_sample_points,
        camera: state.view.camera.clone(),
        viewport_size,
        options: state.options.clone(),
    }
}
