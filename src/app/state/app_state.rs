use crate::app::CommandLog;
use crate::shared::EditorOptions;

use super::{CurveState, EditorState, UiState, ViewState};

/// Hauptzustand der Anwendung (Editier-Sitzung)
///
/// Besitzt Kontrollpunkte, Kurvenparameter, Modus und Kamera. Wird explizit
/// an Controller und Szene-Builder übergeben.
pub struct AppState {
    /// Kurvenzustand (Kontrollpunkte, Unterteilungen, Gewicht)
    pub curve: CurveState,
    /// Modus und Zeiger-Zustand
    pub editor: EditorState,
    /// View-State
    pub view: ViewState,
    /// Eingabepuffer der Panels
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Kamera, Startwerte)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        let curve = CurveState::from_options(&options);
        Self {
            ui: UiState::from_curve(&curve),
            curve,
            editor: EditorState::new(),
            view: ViewState::new(options.initial_camera()),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn control_point_count(&self) -> usize {
        self.curve.control_points.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
