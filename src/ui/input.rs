//! Viewport-Input-Handling: Maus-Events und Scroll → AppIntent.
//!
//! Zeiger-Positionen werden in Geräte-Koordinaten relativ zum Viewport
//! umgerechnet (Pixel, Ursprung unten links).

use super::keyboard;
use crate::app::{AppIntent, EditMode};
use crate::shared::EditorOptions;

/// Rechnet eine egui-Bildschirmposition in Geräte-Koordinaten des Viewports um.
///
/// egui misst y von oben, die Kamera von unten.
pub fn screen_to_device(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    glam::Vec2::new(pos.x - rect.min.x, rect.height() - (pos.y - rect.min.y))
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    pointer_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge: Resize, Tastatur, Drücken, Bewegen, Loslassen, Scroll.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        mode: EditMode,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let rect = response.rect;
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        }];

        events.extend(keyboard::collect_keyboard_intents(ui, mode));

        let (pressed, released, moving, press_pos, latest_pos, scroll) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.is_moving(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.smooth_scroll_delta.y,
            )
        });

        if pressed && response.hovered() {
            if let Some(pos) = press_pos.filter(|p| rect.contains(*p)) {
                self.pointer_down = true;
                events.push(AppIntent::PointerPressed {
                    device_pos: screen_to_device(pos, rect),
                });
            }
        }

        if moving && self.pointer_down {
            if let Some(pos) = latest_pos.filter(|p| rect.contains(*p)) {
                events.push(AppIntent::PointerMoved {
                    device_pos: screen_to_device(pos, rect),
                });
            }
        }

        if released && self.pointer_down {
            self.pointer_down = false;
            events.push(AppIntent::PointerReleased);
        }

        if scroll != 0.0 && response.hovered() {
            let step = options.camera_dolly_step;
            let factor = if scroll > 0.0 { 1.0 / step } else { step };
            events.push(AppIntent::CameraDolly { factor });
        }

        events
    }
}
