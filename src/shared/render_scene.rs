//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::draw_list::SceneSink;
use super::options::EditorOptions;
use crate::core::Camera3D;
use glam::Vec3;

/// Read-only Daten für einen Render-Frame.
///
/// Kontrollpunkte und Kurvenabtastung stammen aus demselben Zustand,
/// die Szene ist damit ein konsistenter Schnappschuss.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Listenreihenfolge
    pub control_points: Vec<Vec3>,
    /// Abgetastete Kurvenpunkte (`sample_count + 1` Stück)
    pub curve_samples: Vec<Vec3>,
    /// Index des gerade gezogenen Kontrollpunkts
    pub selected_index: Option<usize>,
    /// Ob innere Abtastpunkte als Punkte gezeichnet werden
    pub show_sample_points: bool,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt die Szene in fester Reihenfolge an einen Zeichenempfänger aus:
    /// Kontrollpolygon, Kontrollpunkte, optionale Abtastpunkte, Kurve.
    pub fn emit(&self, sink: &mut impl SceneSink) {
        sink.clear();

        sink.set_color(self.options.polygon_color);
        for &point in &self.control_points {
            sink.add_point(point, None);
        }
        sink.draw_line_strip();

        sink.set_color(self.options.control_point_color);
        for (index, &point) in self.control_points.iter().enumerate() {
            let color = (self.selected_index == Some(index))
                .then_some(self.options.control_point_color_selected);
            sink.add_point(point, color);
        }
        sink.draw_point_strip();

        sink.set_color(self.options.curve_color);
        if self.show_sample_points && self.curve_samples.len() > 2 {
            for &sample in &self.curve_samples[1..self.curve_samples.len() - 1] {
                sink.add_point(sample, None);
            }
            sink.draw_point_strip();
        }

        for &sample in &self.curve_samples {
            sink.add_point(sample, None);
        }
        sink.draw_line_strip();
    }

    /// Gibt zurück, ob die Szene etwas Zeichenbares enthält.
    pub fn has_geometry(&self) -> bool {
        !self.control_points.is_empty()
    }
}
