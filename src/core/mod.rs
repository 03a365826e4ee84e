//! Core-Domäne: Kombinatorik, Kurvenauswertung, Kontrollpunkte, Kamera, Arbeitsebene.

pub mod camera;
pub mod combinatorics;
pub mod control_points;
pub mod curve;
pub mod plane;

pub use camera::Camera3D;
pub use combinatorics::{binomial, factorial, ln_binomial, FactorialTable};
pub use control_points::{ControlPointError, ControlPointList};
pub use plane::WorkingPlane;
