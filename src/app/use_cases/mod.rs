//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod control_points;
pub mod curve;
pub mod pick;
