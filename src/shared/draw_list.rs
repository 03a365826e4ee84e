//! Zeichenschnittstelle zwischen Szene und Renderer.
//!
//! `SceneSink` ist die schmale Schnittstelle, über die eine Szene ihre
//! Primitive ausgibt: Punkte sammeln, dann als Linienzug oder Punktmenge
//! zeichnen. `DrawList` zeichnet diese Aufrufe als Batches auf, die der
//! wgpu-Renderer anschließend hochlädt.

use glam::Vec3;

/// Empfänger für Zeichenaufrufe einer Szene.
pub trait SceneSink {
    /// Verwirft alle bisher aufgezeichneten Zeichenaufrufe.
    fn clear(&mut self);
    /// Setzt die Farbe für nachfolgend hinzugefügte Punkte.
    fn set_color(&mut self, rgba: [f32; 4]);
    /// Sammelt einen Punkt, optional mit eigener Farbe.
    fn add_point(&mut self, position: Vec3, color: Option<[f32; 4]>);
    /// Zeichnet die gesammelten Punkte als Linienzug und leert den Puffer.
    fn draw_line_strip(&mut self);
    /// Zeichnet die gesammelten Punkte als Einzelpunkte und leert den Puffer.
    fn draw_point_strip(&mut self);
}

/// Art eines aufgezeichneten Draw-Calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Verbundener Linienzug
    LineStrip,
    /// Einzelne Punkte
    Points,
}

/// Ein farbiger Punkt im Vertex-Puffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    /// Position in Weltkoordinaten
    pub position: Vec3,
    /// RGBA-Farbe
    pub color: [f32; 4],
}

/// Ein aufgezeichneter Draw-Call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    /// Primitiv-Typ
    pub kind: PrimitiveKind,
    /// Punkte in Zeichenreihenfolge
    pub points: Vec<ColoredPoint>,
}

/// Zeichnet Szene-Aufrufe in Batches auf.
#[derive(Debug, Clone)]
pub struct DrawList {
    color: [f32; 4],
    pending: Vec<ColoredPoint>,
    batches: Vec<DrawBatch>,
}

impl DrawList {
    /// Erstellt eine leere Liste. Standardfarbe ist das Inverse des Hintergrunds.
    pub fn new(background: [f32; 4]) -> Self {
        Self {
            color: [
                1.0 - background[0],
                1.0 - background[1],
                1.0 - background[2],
                1.0,
            ],
            pending: Vec::new(),
            batches: Vec::new(),
        }
    }

    /// Alle abgeschlossenen Draw-Calls in Reihenfolge.
    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    /// Aktuelle Zeichenfarbe.
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    fn flush(&mut self, kind: PrimitiveKind) {
        if self.pending.is_empty() {
            return;
        }
        let points = std::mem::take(&mut self.pending);
        self.batches.push(DrawBatch { kind, points });
    }
}

impl SceneSink for DrawList {
    fn clear(&mut self) {
        self.pending.clear();
        self.batches.clear();
    }

    fn set_color(&mut self, rgba: [f32; 4]) {
        self.color = rgba;
    }

    fn add_point(&mut self, position: Vec3, color: Option<[f32; 4]>) {
        self.pending.push(ColoredPoint {
            position,
            color: color.unwrap_or(self.color),
        });
    }

    fn draw_line_strip(&mut self) {
        self.flush(PrimitiveKind::LineStrip);
    }

    fn draw_point_strip(&mut self) {
        self.flush(PrimitiveKind::Points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_inverse_background() {
        let list = DrawList::new([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(list.color(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_draw_without_points_is_noop() {
        let mut list = DrawList::new([1.0; 4]);
        list.draw_line_strip();
        list.draw_point_strip();
        assert!(list.batches().is_empty());
    }

    #[test]
    fn test_draw_consumes_pending_points() {
        let mut list = DrawList::new([1.0; 4]);
        list.set_color([1.0, 0.0, 0.0, 1.0]);
        list.add_point(Vec3::ZERO, None);
        list.add_point(Vec3::X, Some([0.0, 1.0, 0.0, 1.0]));
        list.draw_line_strip();
        list.draw_point_strip();

        assert_eq!(list.batches().len(), 1);
        let batch = &list.batches()[0];
        assert_eq!(batch.kind, PrimitiveKind::LineStrip);
        assert_eq!(batch.points[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(batch.points[1].color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clear_drops_batches() {
        let mut list = DrawList::new([1.0; 4]);
        list.add_point(Vec3::ZERO, None);
        list.draw_point_strip();
        list.clear();
        assert!(list.batches().is_empty());
    }
}
