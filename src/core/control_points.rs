//! Geordnete Kontrollpunktliste mit Mindestlänge.

use glam::Vec3;
use thiserror::Error;

/// Fehler beim Aufbau einer Kontrollpunktliste.
#[derive(Debug, Error, PartialEq)]
pub enum ControlPointError {
    /// Weniger als [`ControlPointList::MIN_POINTS`] Punkte übergeben
    #[error("mindestens {min} Kontrollpunkte erforderlich, erhalten: {actual}")]
    TooFewPoints { min: usize, actual: usize },
}

/// Kontrollpunkte einer Kurve. Die Reihenfolge bestimmt den Bernstein-Index.
///
/// Die Liste enthält nie weniger als [`Self::MIN_POINTS`] Punkte;
/// [`Self::remove`] verweigert das Unterschreiten stillschweigend.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointList {
    points: Vec<Vec3>,
}

impl ControlPointList {
    /// Minimale Punktanzahl.
    pub const MIN_POINTS: usize = 3;

    /// Erstellt eine Liste aus mindestens drei Punkten.
    pub fn new(points: Vec<Vec3>) -> Result<Self, ControlPointError> {
        if points.len() < Self::MIN_POINTS {
            return Err(ControlPointError::TooFewPoints {
                min: Self::MIN_POINTS,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Startkonfiguration des Editors (quadratische Kurve).
    pub fn initial() -> Self {
        Self {
            points: vec![
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
            ],
        }
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false`, die Liste hat mindestens drei Punkte.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.points
    }

    /// Punkt an Index `index`.
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.points.get(index).copied()
    }

    /// Hängt einen Punkt am Ende an.
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Entfernt den Punkt an `index`, sofern danach noch genug Punkte bleiben.
    ///
    /// Gibt den entfernten Punkt zurück; `None` bei ungültigem Index oder
    /// wenn die Liste bereits die Mindestlänge hat.
    pub fn remove(&mut self, index: usize) -> Option<Vec3> {
        if self.points.len() <= Self::MIN_POINTS || index >= self.points.len() {
            return None;
        }
        Some(self.points.remove(index))
    }

    /// Überschreibt den Punkt an `index`. `false` bei ungültigem Index.
    pub fn set(&mut self, index: usize, point: Vec3) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                true
            }
            None => false,
        }
    }
}

impl Default for ControlPointList {
    fn default() -> Self {
        Self::initial()
    }
}

impl TryFrom<Vec<Vec3>> for ControlPointList {
    type Error = ControlPointError;

    fn try_from(points: Vec<Vec3>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}
