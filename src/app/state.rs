//! Application State: zentrale Datenhaltung.

mod app_state;
mod curve;
mod editor;
mod view;

pub use app_state::AppState;
pub use curve::CurveState;
pub use editor::{EditMode, EditorState, PointerPhase};
pub use view::ViewState;

use crate::shared::{parse_rationality_weight, parse_sample_count, MAX_SAMPLE_COUNT};

/// Texteingabe-Puffer der Kurven-Eigenschaften.
///
/// Die Felder behalten den rohen Text, damit Zwischeneingaben wie `"1."`
/// nicht beim Tippen überschrieben werden.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Rohtext des Unterteilungsfelds
    pub sample_count_input: String,
    /// Rohtext des Gewichtsfelds
    pub weight_input: String,
}

impl UiState {
    /// Initialisiert die Puffer aus dem aktuellen Kurvenzustand.
    pub fn from_curve(curve: &CurveState) -> Self {
        Self {
            sample_count_input: curve.sample_count.to_string(),
            weight_input: curve.rationality_weight.to_string(),
        }
    }

    /// Gleicht die Puffer an den Kurvenzustand an.
    ///
    /// Ein Puffer bleibt unverändert, solange er geparst den aktiven Wert
    /// ergibt. Geklemmte oder von außen gesetzte Werte überschreiben ihn.
    pub fn sync_from_curve(&mut self, curve: &CurveState) {
        if !sample_text_matches(&self.sample_count_input, curve.sample_count) {
            self.sample_count_input = curve.sample_count.to_string();
        }
        if parse_rationality_weight(&self.weight_input) != curve.rationality_weight {
            self.weight_input = curve.rationality_weight.to_string();
        }
    }
}

fn sample_text_matches(text: &str, count: u32) -> bool {
    // An der Obergrenze zählt nur der exakte Text, sonst bliebe z.B. "1e12" stehen
    if count == MAX_SAMPLE_COUNT {
        return text.trim() == count.to_string();
    }
    parse_sample_count(text) == count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_keeps_partial_input_with_same_value() {
        let curve = CurveState {
            sample_count: 12,
            rationality_weight: 1.0,
            ..CurveState::default()
        };
        let mut ui = UiState {
            sample_count_input: "12.".to_string(),
            weight_input: "1.".to_string(),
        };

        ui.sync_from_curve(&curve);

        assert_eq!(ui.sample_count_input, "12.");
        assert_eq!(ui.weight_input, "1.");
    }

    #[test]
    fn test_sync_overwrites_diverging_input() {
        let curve = CurveState {
            sample_count: MAX_SAMPLE_COUNT,
            rationality_weight: 2.5,
            ..CurveState::default()
        };
        let mut ui = UiState {
            sample_count_input: "1e12".to_string(),
            weight_input: "7".to_string(),
        };

        ui.sync_from_curve(&curve);

        assert_eq!(ui.sample_count_input, MAX_SAMPLE_COUNT.to_string());
        assert_eq!(ui.weight_input, "2.5");
    }
}
