//! Handler für Kurvenparameter.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Unterteilungsanzahl.
pub fn set_sample_count(state: &mut AppState, count: u32) {
    use_cases::curve::set_sample_count(state, count);
}

/// Setzt das Innengewicht.
pub fn set_rationality_weight(state: &mut AppState, weight: f32) {
    use_cases::curve::set_rationality_weight(state, weight);
}

/// Schaltet die Abtastpunkt-Anzeige.
pub fn set_show_sample_points(state: &mut AppState, visible: bool) {
    use_cases::curve::set_show_sample_points(state, visible);
}
