//! UI-Komponenten: Menü, Toolbar, Properties, Input-Handling, Dialoge.
//!
//! Panels und Dialoge erzeugen nur `AppIntent`s; Mutationen laufen
//! ausschließlich über den Controller.

pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use input::{screen_to_device, InputState};
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// RGBA `[0, 1]` → egui-Farbe, z.B. für den Viewport-Hintergrund.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    options_dialog::to_color32(color)
}
