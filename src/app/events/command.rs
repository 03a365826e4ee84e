use super::super::state::EditMode;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera entlang der Blickachse fahren
    DollyCamera { factor: f32 },
    /// Kamera auf Startposition zurücksetzen
    ResetCamera,

    /// Bearbeitungsmodus setzen
    SetEditMode { mode: EditMode },
    /// Kontrollpunkt am Listenende anhängen (Weltposition)
    AddControlPoint { position: glam::Vec3 },
    /// Nächstgelegenen Kontrollpunkt zur Geräte-Position auswählen
    SelectNearestControlPoint { device_pos: glam::Vec2 },
    /// Ausgewählten Kontrollpunkt entfernen (nur bei mehr als drei Punkten)
    RemoveSelectedControlPoint,
    /// Ausgewählten Kontrollpunkt auf eine Weltposition setzen
    MoveSelectedControlPoint { position: glam::Vec3 },
    /// Auswahl aufheben (zurück nach Idle)
    ClearControlPointSelection,
    /// Kontrollpunkte auf die Startkonfiguration zurücksetzen
    ResetControlPoints,

    /// Unterteilungsanzahl setzen (wird auf ≥ 1 geklemmt)
    SetSampleCount { count: u32 },
    /// Innengewicht setzen (wird auf ≥ 0 geklemmt)
    SetRationalityWeight { weight: f32 },
    /// Anzeige der Abtastpunkte setzen
    SetShowSamplePoints { visible: bool },

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen übernehmen (nur im Speicher)
    ApplyOptions { options: EditorOptions },
    /// Optionen in die Konfigurationsdatei schreiben
    SaveOptions,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
