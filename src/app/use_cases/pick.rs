//! Use-Case: Kontrollpunkt-Auswahl per Klick (Nearest-Point-Pick).

use crate::app::{AppState, PointerPhase};
use crate::core::camera::project;
use crate::core::Camera3D;
use glam::{Vec2, Vec3};

/// Index des Kontrollpunkts, dessen Projektion der Geräte-Position am nächsten liegt.
///
/// Gemessen wird der 2D-Abstand in Pixeln. Es gibt keine Maximaldistanz:
/// solange ein Punkt projizierbar ist, wird einer gewählt. Bei Gleichstand
/// gewinnt der kleinere Index. Ein leerer Viewport liefert `None`.
pub fn nearest_control_point(
    points: &[Vec3],
    camera: &Camera3D,
    viewport_size: [f32; 2],
    device_pos: Vec2,
) -> Option<usize> {
    if viewport_size[0] <= 0.0 || viewport_size[1] <= 0.0 {
        return None;
    }
    let view_proj = camera.view_projection(viewport_size);
    let mut best: Option<(usize, f32)> = None;

    for (index, &point) in points.iter().enumerate() {
        let Some(device) = project(view_proj, point, viewport_size) else {
            continue;
        };
        let distance = device.truncate().distance_squared(device_pos);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}

/// Wählt den nächstgelegenen Kontrollpunkt aus und wechselt nach `Dragging`.
///
/// Ohne projizierbaren Punkt bleibt der Zustand `Idle`.
pub fn select_nearest_control_point(state: &mut AppState, device_pos: Vec2) {
    let picked = nearest_control_point(
        state.curve.control_points.as_slice(),
        &state.view.camera,
        state.view.viewport_size,
        device_pos,
    );

    state.editor.phase = match picked {
        Some(index) => {
            log::debug!("Kontrollpunkt {} ausgewählt", index);
            PointerPhase::Dragging { index }
        }
        None => PointerPhase::Idle,
    };
}
