use super::super::state::EditMode;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeiger-Positionen liegen in Geräte-Koordinaten (Pixel, Ursprung unten links).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// Primäre Maustaste im Viewport gedrückt
    PointerPressed { device_pos: glam::Vec2 },
    /// Zeiger im Viewport bewegt
    PointerMoved { device_pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,

    /// Kamera entlang der Blickachse fahren (Faktor > 1 = weiter weg)
    CameraDolly { factor: f32 },
    /// Kamera auf Startposition zurücksetzen
    ResetCameraRequested,

    /// Bearbeitungsmodus wechseln
    SetEditModeRequested { mode: EditMode },
    /// Unterteilungsfeld geändert (roher Text)
    SampleCountChanged { input: String },
    /// Gewichtsfeld geändert (roher Text)
    RationalityWeightChanged { input: String },
    /// Anzeige der Abtastpunkte umschalten
    ShowSamplePointsToggled { visible: bool },
    /// Kontrollpunkte auf die Startkonfiguration zurücksetzen
    ResetControlPointsRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
