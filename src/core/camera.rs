//! 3D-Perspektivkamera mit Projektions- und Rückprojektions-Primitiven.
//!
//! Geräte-Koordinaten sind Pixel im Viewport `[0, 0, Breite, Höhe]` mit
//! Ursprung unten links. Die Tiefe liegt in `[0, 1]` (0 = Near-Plane).

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Perspektivische Kamera, die entlang -Z auf die Arbeitsebene blickt.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec3,
    /// Vertikaler Öffnungswinkel in Grad
    pub fov_y_degrees: f32,
    /// Abstand der Near-Plane
    pub near: f32,
    /// Abstand der Far-Plane
    pub far: f32,
}

impl Camera3D {
    /// Standard-Startposition (Blick aus +Z auf den Ursprung).
    pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, 6.0);
    /// Standard-Öffnungswinkel in Grad.
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
    /// Standard-Near-Plane.
    pub const DEFAULT_NEAR: f32 = 0.1;
    /// Standard-Far-Plane.
    pub const DEFAULT_FAR: f32 = 100.0;

    /// Erstellt eine Kamera mit Standard-Frustum an der gegebenen Position.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            fov_y_degrees: Self::DEFAULT_FOV_Y_DEGREES,
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
        }
    }

    /// View-Matrix: reine Translation um `-position`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position)
    }

    /// Perspektivische Projektion für das Seitenverhältnis des Viewports.
    pub fn projection_matrix(&self, viewport_size: [f32; 2]) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_degrees.to_radians(),
            aspect_ratio(viewport_size),
            self.near,
            self.far,
        )
    }

    /// Kombinierte Projection×View-Matrix (für Shader und Picking).
    pub fn view_projection(&self, viewport_size: [f32; 2]) -> Mat4 {
        self.projection_matrix(viewport_size) * self.view_matrix()
    }

    /// Projiziert einen Weltpunkt in Geräte-Koordinaten `(x, y, Tiefe)`.
    ///
    /// `None`, wenn der Punkt in der Kameraebene liegt (w ≈ 0).
    pub fn world_to_device(&self, world: Vec3, viewport_size: [f32; 2]) -> Option<Vec3> {
        project(self.view_projection(viewport_size), world, viewport_size)
    }

    /// Rekonstruiert den Weltpunkt zu Geräte-Koordinaten und Tiefe.
    pub fn device_to_world(
        &self,
        device: Vec2,
        depth: f32,
        viewport_size: [f32; 2],
    ) -> Option<Vec3> {
        unproject(
            self.view_projection(viewport_size),
            device.extend(depth),
            viewport_size,
        )
    }

    /// Punkt auf der Near-Plane unter einer Geräte-Koordinate.
    pub fn device_to_near_plane(&self, device: Vec2, viewport_size: [f32; 2]) -> Option<Vec3> {
        self.device_to_world(device, 0.0, viewport_size)
    }

    /// Fährt die Kamera entlang ihrer Blickachse (Z) und begrenzt den Abstand.
    pub fn dolly_by(&mut self, factor: f32, min_distance: f32, max_distance: f32) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.position.z = (self.position.z * factor).clamp(min_distance, max_distance);
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION)
    }
}

fn aspect_ratio(viewport_size: [f32; 2]) -> f32 {
    let [width, height] = viewport_size;
    if width > 0.0 && height > 0.0 {
        width / height
    } else {
        1.0
    }
}

/// Welt → Geräte-Koordinaten für eine beliebige Projection×View-Matrix.
pub fn project(view_proj: Mat4, world: Vec3, viewport_size: [f32; 2]) -> Option<Vec3> {
    let clip = view_proj * world.extend(1.0);
    if clip.w.abs() < f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec3::new(
        (ndc.x + 1.0) * 0.5 * viewport_size[0],
        (ndc.y + 1.0) * 0.5 * viewport_size[1],
        (ndc.z + 1.0) * 0.5,
    ))
}

/// Geräte-Koordinaten `(x, y, Tiefe)` → Welt für eine Projection×View-Matrix.
///
/// `None` bei leerem Viewport oder singulärer Matrix.
pub fn unproject(view_proj: Mat4, device: Vec3, viewport_size: [f32; 2]) -> Option<Vec3> {
    let [width, height] = viewport_size;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    if view_proj.determinant().abs() < f32::EPSILON {
        return None;
    }

    let ndc = Vec4::new(
        device.x / width * 2.0 - 1.0,
        device.y / height * 2.0 - 1.0,
        device.z * 2.0 - 1.0,
        1.0,
    );
    let world = view_proj.inverse() * ndc;
    if world.w.abs() < f32::EPSILON {
        return None;
    }
    let point = world.truncate() / world.w;
    point.is_finite().then_some(point)
}
