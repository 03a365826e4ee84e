//! Use-Cases für Kurvenparameter.

use crate::app::AppState;
use crate::shared::{clamp_sample_count, sanitize_weight};

/// Setzt die Anzahl der Unterteilungen (`1..=MAX_SAMPLE_COUNT`).
pub fn set_sample_count(state: &mut AppState, count: u32) {
    state.curve.sample_count = clamp_sample_count(count);
}

/// Setzt das gemeinsame Innengewicht (nicht-negativ, endlich).
pub fn set_rationality_weight(state: &mut AppState, weight: f32) {
    state.curve.rationality_weight = sanitize_weight(weight);
}

/// Schaltet die Anzeige der inneren Abtastpunkte.
pub fn set_show_sample_points(state: &mut AppState, visible: bool) {
    state.curve.show_sample_points = visible;
}
