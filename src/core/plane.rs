//! Arbeitsebene und Rückprojektion von Geräte-Koordinaten auf diese Ebene.

use super::camera::{self, Camera3D};
use glam::{Mat4, Vec2, Vec3};

/// Schwelle, unterhalb der ein Strahl als parallel zur Ebene gilt.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Ebene durch `origin` mit Normale `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingPlane {
    /// Aufpunkt der Ebene
    pub origin: Vec3,
    /// Normale der Ebene (muss nicht normiert sein)
    pub normal: Vec3,
}

impl WorkingPlane {
    /// Die Modell-Arbeitsebene z = 0.
    pub const XY: Self = Self {
        origin: Vec3::ZERO,
        normal: Vec3::Z,
    };

    /// Schneidet den Strahl von `eye` durch `through` mit der Ebene.
    ///
    /// `s = dot(origin - eye, n) / dot(through - eye, n)`, Ergebnis `eye + s·(through - eye)`.
    /// `None`, wenn der Strahl parallel zur Ebene verläuft oder der Schnittpunkt
    /// hinter dem Auge liegt.
    pub fn intersect_ray(&self, eye: Vec3, through: Vec3) -> Option<Vec3> {
        let direction = through - eye;
        let denominator = direction.dot(self.normal);
        if denominator.abs() < PARALLEL_EPSILON {
            return None;
        }

        let s = (self.origin - eye).dot(self.normal) / denominator;
        if !s.is_finite() || s < 0.0 {
            return None;
        }

        Some(eye + direction * s)
    }
}

impl Default for WorkingPlane {
    fn default() -> Self {
        Self::XY
    }
}

/// Rückprojektion einer Geräte-Koordinate auf eine Ebene.
///
/// Rekonstruiert den Near-Plane-Punkt über `view_proj` und schneidet den
/// Strahl von `eye` durch diesen Punkt mit `plane`.
pub fn unproject_to_plane(
    device: Vec2,
    view_proj: Mat4,
    eye: Vec3,
    viewport_size: [f32; 2],
    plane: &WorkingPlane,
) -> Option<Vec3> {
    let near_point = camera::unproject(view_proj, device.extend(0.0), viewport_size)?;
    plane.intersect_ray(eye, near_point)
}

impl Camera3D {
    /// Rückprojektion einer Geräte-Koordinate auf die Arbeitsebene z = 0.
    pub fn unproject_to_plane(&self, device: Vec2, viewport_size: [f32; 2]) -> Option<Vec3> {
        unproject_to_plane(
            device,
            self.view_projection(viewport_size),
            self.position,
            viewport_size,
            &WorkingPlane::XY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: [f32; 2] = [640.0, 480.0];

    #[test]
    fn test_intersect_ray_hits_plane() {
        let hit = WorkingPlane::XY
            .intersect_ray(Vec3::new(0.0, 0.0, 6.0), Vec3::new(0.1, 0.2, 5.0))
            .unwrap();
        assert_relative_eq!(hit.x, 0.6, epsilon = 1e-5);
        assert_relative_eq!(hit.y, 1.2, epsilon = 1e-5);
        assert_relative_eq!(hit.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parallel_ray_is_rejected() {
        let hit = WorkingPlane::XY.intersect_ray(Vec3::new(0.0, 0.0, 1.0), Vec3::new(5.0, 3.0, 1.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_plane_behind_eye_is_rejected() {
        // Blick von z=1 weiter in +Z: Ebene z=0 liegt hinter dem Auge
        let hit = WorkingPlane::XY.intersect_ray(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 2.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_project_then_unproject_returns_plane_point() {
        let camera = Camera3D::default();
        for world in [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 2.0, 0.0),
            Vec3::new(-1.5, 0.75, 0.0),
        ] {
            let device = camera.world_to_device(world, VIEWPORT).unwrap();
            let back = camera.unproject_to_plane(device.truncate(), VIEWPORT).unwrap();
            assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
            assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
            assert_relative_eq!(back.z, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_camera_facing_away_yields_none() {
        // Kamera unterhalb der Ebene, Blick entlang -Z: Ebene liegt hinter ihr
        let camera = Camera3D::new(Vec3::new(0.0, 0.0, -6.0));
        let hit = camera.unproject_to_plane(Vec2::new(320.0, 240.0), VIEWPORT);
        assert!(hit.is_none());
    }
}
