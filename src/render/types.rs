//! GPU-Datentypen für Linien- und Punkt-Pipelines.

use crate::shared::ColoredPoint;
use bytemuck::{Pod, Zeroable};

/// Eckpunkt des Einheits-Quads für instanzierte Punkte
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Ecke in [-1, 1]²
    pub position: [f32; 2],
}

impl Vertex {
    /// Zwei Dreiecke, die das Quad [-1, 1]² abdecken.
    pub const QUAD: [Vertex; 6] = [
        Vertex {
            position: [-1.0, -1.0],
        },
        Vertex {
            position: [1.0, -1.0],
        },
        Vertex {
            position: [1.0, 1.0],
        },
        Vertex {
            position: [-1.0, -1.0],
        },
        Vertex {
            position: [1.0, 1.0],
        },
        Vertex {
            position: [-1.0, 1.0],
        },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[eframe::wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: eframe::wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Vertex eines Linienzugs (Welt-Position + Farbe)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct LineVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl LineVertex {
    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

impl From<&ColoredPoint> for LineVertex {
    fn from(point: &ColoredPoint) -> Self {
        Self {
            position: point.position.to_array(),
            color: point.color,
        }
    }
}

/// Instanz-Daten für einen Punkt (Welt-Position + Farbe)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointInstance {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl PointInstance {
    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Instance,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x3,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as eframe::wgpu::BufferAddress,
                    shader_location: 2,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

impl From<&ColoredPoint> for PointInstance {
    fn from(point: &ColoredPoint) -> Self {
        Self {
            position: point.position.to_array(),
            color: point.color,
        }
    }
}

/// Uniform-Buffer für View-Projektion und Punktgröße
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// View-Projection-Matrix (4x4)
    pub view_proj: [[f32; 4]; 4],
    /// [Viewport-Breite, Viewport-Höhe, Punktgröße in Pixeln, 0]
    pub viewport: [f32; 4],
}
