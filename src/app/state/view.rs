use crate::core::Camera3D;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Perspektivkamera für die Ansicht
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand für eine gegebene Kamera.
    pub fn new(camera: Camera3D) -> Self {
        Self {
            camera,
            viewport_size: [0.0, 0.0],
        }
    }
}
