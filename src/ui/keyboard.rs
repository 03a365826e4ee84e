//! Keyboard-Shortcuts für den Viewport.
//!
//! `1`/`2`/`3` wählen den Modus, `Home` setzt die Kamera zurück.

use crate::app::{AppIntent, EditMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, mode: EditMode) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder behalten ihre Ziffern
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (key_1, key_2, key_3, key_home) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
            i.key_pressed(egui::Key::Home),
        )
    });

    let requested = if key_1 {
        Some(EditMode::Pan)
    } else if key_2 {
        Some(EditMode::Add)
    } else if key_3 {
        Some(EditMode::Remove)
    } else {
        None
    };

    if let Some(requested) = requested.filter(|m| *m != mode) {
        events.push(AppIntent::SetEditModeRequested { mode: requested });
    }

    if key_home {
        events.push(AppIntent::ResetCameraRequested);
    }

    events
}
