use crate::core::ControlPointList;
use crate::shared::EditorOptions;

/// Kurvenbezogener Anwendungszustand (Punkte + Auswertungsparameter)
#[derive(Debug, Clone)]
pub struct CurveState {
    /// Kontrollpunkte der Kurve (mindestens drei)
    pub control_points: ControlPointList,
    /// Anzahl der Unterteilungen pro Redraw (mindestens 1)
    pub sample_count: u32,
    /// Gemeinsames Gewicht aller inneren Kontrollpunkte (nicht negativ)
    pub rationality_weight: f32,
    /// Innere Abtastpunkte zusätzlich als Punkte zeichnen
    pub show_sample_points: bool,
}

impl CurveState {
    /// Erstellt den Kurvenzustand mit den Startwerten aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            control_points: ControlPointList::initial(),
            sample_count: crate::shared::clamp_sample_count(options.default_sample_count),
            rationality_weight: crate::shared::sanitize_weight(options.default_rationality_weight),
            show_sample_points: options.default_show_sample_points,
        }
    }
}

impl Default for CurveState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}
