//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen (bereinigt) in den laufenden Zustand.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options.sanitized();
}

/// Persistiert die aktuellen Optionen in der Konfigurationsdatei.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück.
pub fn reset_options(state: &mut AppState) {
    state.options = EditorOptions::default();
}
