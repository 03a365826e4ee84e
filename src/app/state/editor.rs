/// Aktiver Bearbeitungsmodus für Klicks in den Viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Kontrollpunkte greifen und verschieben
    #[default]
    Pan,
    /// Neue Kontrollpunkte am Listenende anhängen
    Add,
    /// Nächstgelegenen Kontrollpunkt entfernen
    Remove,
}

impl EditMode {
    /// Alle Modi in Toolbar-Reihenfolge.
    pub const ALL: [EditMode; 3] = [EditMode::Pan, EditMode::Add, EditMode::Remove];

    /// Anzeigename für Toolbar und Statusleiste.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::Pan => "Verschieben",
            EditMode::Add => "Hinzufügen",
            EditMode::Remove => "Entfernen",
        }
    }
}

/// Zeiger-Zustand des Interaktions-Controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerPhase {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt `index` ist ausgewählt und folgt dem Zeiger im Pan-Modus
    Dragging { index: usize },
}

/// Zustand der Punkt-Bearbeitung
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Modus, wird bei jedem Zeiger-Event neu gelesen
    pub mode: EditMode,
    /// Idle oder Dragging
    pub phase: PointerPhase,
}

impl EditorState {
    /// Erstellt den Standardzustand (Pan, Idle).
    pub fn new() -> Self {
        Self::default()
    }

    /// Index des gezogenen Punkts, falls vorhanden.
    pub fn selected_index(&self) -> Option<usize> {
        match self.phase {
            PointerPhase::Idle => None,
            PointerPhase::Dragging { index } => Some(index),
        }
    }
}
