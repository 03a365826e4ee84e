//! Zentrale Konfiguration für den Bézier-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::Camera3D;
use glam::Vec3;
use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Startposition der Kamera (Blick aus +Z auf die Arbeitsebene).
pub const CAMERA_START_POSITION: [f32; 3] = [0.0, 0.0, 6.0];
/// Vertikaler Öffnungswinkel in Grad.
pub const CAMERA_FOV_Y_DEGREES: f32 = 45.0;
/// Near-Plane-Abstand.
pub const CAMERA_NEAR: f32 = 0.1;
/// Far-Plane-Abstand.
pub const CAMERA_FAR: f32 = 100.0;
/// Dolly-Faktor pro Mausrad-Schritt.
pub const CAMERA_DOLLY_STEP: f32 = 1.1;
/// Minimaler Kameraabstand zur Arbeitsebene.
pub const CAMERA_MIN_DISTANCE: f32 = 1.0;
/// Maximaler Kameraabstand zur Arbeitsebene.
pub const CAMERA_MAX_DISTANCE: f32 = 50.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Standard-Anzahl der Kurvenunterteilungen.
pub const DEFAULT_SAMPLE_COUNT: u32 = 20;
/// Obergrenze der Kurvenunterteilungen; größere Eingaben werden geklemmt.
pub const MAX_SAMPLE_COUNT: u32 = 10_000;
/// Standard-Gewicht der inneren Kontrollpunkte.
pub const DEFAULT_RATIONALITY_WEIGHT: f32 = 1.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe des Kontrollpolygons (RGBA: Schwarz).
pub const POLYGON_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe der Kontrollpunkte (RGBA: Schwarz).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des gerade gezogenen Kontrollpunkts (RGBA: Blau).
pub const CONTROL_POINT_COLOR_SELECTED: [f32; 4] = [0.1, 0.4, 1.0, 1.0];
/// Farbe der Kurve und ihrer Abtastpunkte (RGBA: Pink).
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.2, 0.6, 1.0];
/// Punktgröße in Pixeln.
pub const POINT_SIZE_PX: f32 = 5.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Darstellung ─────────────────────────────────────────────
    /// Hintergrundfarbe des Viewports
    pub background_color: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Farbe der Kontrollpunkte
    pub control_point_color: [f32; 4],
    /// Farbe des gezogenen Kontrollpunkts
    pub control_point_color_selected: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Punktgröße in Pixeln
    pub point_size_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Startposition der Kamera
    pub camera_start_position: [f32; 3],
    /// Vertikaler Öffnungswinkel in Grad
    pub camera_fov_y_degrees: f32,
    /// Near-Plane
    pub camera_near: f32,
    /// Far-Plane
    pub camera_far: f32,
    /// Dolly-Faktor pro Mausrad-Schritt
    pub camera_dolly_step: f32,
    /// Minimaler Kameraabstand
    pub camera_min_distance: f32,
    /// Maximaler Kameraabstand
    pub camera_max_distance: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Startwert der Kurvenunterteilungen
    pub default_sample_count: u32,
    /// Startwert des Innengewichts
    pub default_rationality_weight: f32,
    /// Ob Abtastpunkte beim Start angezeigt werden
    pub default_show_sample_points: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            background_color: BACKGROUND_COLOR,
            polygon_color: POLYGON_COLOR,
            control_point_color: CONTROL_POINT_COLOR,
            control_point_color_selected: CONTROL_POINT_COLOR_SELECTED,
            curve_color: CURVE_COLOR,
            point_size_px: POINT_SIZE_PX,

            camera_start_position: CAMERA_START_POSITION,
            camera_fov_y_degrees: CAMERA_FOV_Y_DEGREES,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_dolly_step: CAMERA_DOLLY_STEP,
            camera_min_distance: CAMERA_MIN_DISTANCE,
            camera_max_distance: CAMERA_MAX_DISTANCE,

            default_sample_count: DEFAULT_SAMPLE_COUNT,
            default_rationality_weight: DEFAULT_RATIONALITY_WEIGHT,
            default_show_sample_points: false,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_editor.toml")
    }

    /// Baut die Startkamera aus den Kamera-Optionen.
    pub fn initial_camera(&self) -> Camera3D {
        Camera3D {
            position: Vec3::from_array(self.camera_start_position),
            fov_y_degrees: self.camera_fov_y_degrees,
            near: self.camera_near,
            far: self.camera_far,
        }
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte bzw. klemmt sie.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !self.point_size_px.is_finite() || self.point_size_px <= 0.0 {
            self.point_size_px = defaults.point_size_px;
        }
        // Die Kamera blickt entlang -Z, muss also vor der Ebene (z > 0) stehen
        if !self.camera_start_position.iter().all(|v| v.is_finite())
            || self.camera_start_position[2] <= 0.0
        {
            self.camera_start_position = defaults.camera_start_position;
        }
        if !self.camera_fov_y_degrees.is_finite()
            || !(1.0..=170.0).contains(&self.camera_fov_y_degrees)
        {
            self.camera_fov_y_degrees = defaults.camera_fov_y_degrees;
        }
        if !self.camera_near.is_finite()
            || !self.camera_far.is_finite()
            || self.camera_near <= 0.0
            || self.camera_far <= self.camera_near
        {
            self.camera_near = defaults.camera_near;
            self.camera_far = defaults.camera_far;
        }
        if !self.camera_dolly_step.is_finite() || self.camera_dolly_step <= 1.0 {
            self.camera_dolly_step = defaults.camera_dolly_step;
        }
        if !self.camera_min_distance.is_finite()
            || !self.camera_max_distance.is_finite()
            || self.camera_min_distance <= 0.0
            || self.camera_max_distance < self.camera_min_distance
        {
            self.camera_min_distance = defaults.camera_min_distance;
            self.camera_max_distance = defaults.camera_max_distance;
        }

        self.default_sample_count = clamp_sample_count(self.default_sample_count);
        self.default_rationality_weight = sanitize_weight(self.default_rationality_weight);

        self
    }
}

/// Klemmt ein Innengewicht auf einen gültigen Wert.
///
/// Nicht-endlich → 1.0, negativ → 0.0.
pub fn sanitize_weight(weight: f32) -> f32 {
    if !weight.is_finite() {
        DEFAULT_RATIONALITY_WEIGHT
    } else {
        weight.max(0.0)
    }
}

/// Klemmt eine Unterteilungsanzahl auf `1..=MAX_SAMPLE_COUNT`.
pub fn clamp_sample_count(count: u32) -> u32 {
    count.clamp(1, MAX_SAMPLE_COUNT)
}

/// Liest die Unterteilungsanzahl aus einem Texteingabefeld.
///
/// Ganzzahlig abgeschnitten, mindestens 1, höchstens [`MAX_SAMPLE_COUNT`];
/// nicht-numerische Eingaben ergeben 1.
pub fn parse_sample_count(input: &str) -> u32 {
    let value = input.trim().parse::<f64>().unwrap_or(0.0);
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    value.trunc().min(MAX_SAMPLE_COUNT as f64) as u32
}

/// Liest das Innengewicht aus einem Texteingabefeld.
///
/// Nicht-numerisch → 1.0, sonst wie [`sanitize_weight`].
pub fn parse_rationality_weight(input: &str) -> f32 {
    match input.trim().parse::<f32>() {
        Ok(value) => sanitize_weight(value),
        Err(_) => DEFAULT_RATIONALITY_WEIGHT,
    }
}
