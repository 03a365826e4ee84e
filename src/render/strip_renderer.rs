//! Renderer für aufgezeichnete Linienzüge und Punktmengen.
//!
//! Alle Batches eines Frames landen in je einem Vertex- bzw. Instanz-Buffer;
//! gezeichnet wird pro Batch ein Teilbereich, in Aufzeichnungsreihenfolge.

use super::types::{LineVertex, PointInstance, Uniforms, Vertex};
use super::RenderContext;
use crate::shared::{DrawBatch, PrimitiveKind};
use eframe::{egui_wgpu, wgpu};
use std::ops::Range;
use wgpu::util::DeviceExt;

/// Ein Draw-Call als Bereich im jeweiligen Buffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawRange {
    pub kind: PrimitiveKind,
    pub range: Range<u32>,
}

/// Verteilt Batches auf Linien-Vertices und Punkt-Instanzen.
///
/// Liefert die Draw-Bereiche in Eingabereihenfolge.
pub(crate) fn pack_batches(
    batches: &[DrawBatch],
    lines: &mut Vec<LineVertex>,
    points: &mut Vec<PointInstance>,
) -> Vec<DrawRange> {
    lines.clear();
    points.clear();
    let mut ranges = Vec::with_capacity(batches.len());

    for batch in batches {
        let range = match batch.kind {
            PrimitiveKind::LineStrip => {
                let start = lines.len() as u32;
                lines.extend(batch.points.iter().map(LineVertex::from));
                start..lines.len() as u32
            }
            PrimitiveKind::Points => {
                let start = points.len() as u32;
                points.extend(batch.points.iter().map(PointInstance::from));
                start..points.len() as u32
            }
        };
        ranges.push(DrawRange {
            kind: batch.kind,
            range,
        });
    }

    ranges
}

/// Renderer für Linienzüge (LineStrip) und runde Punkte (instanzierte Quads)
pub struct StripRenderer {
    line_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,
    quad_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    line_buffer: Option<wgpu::Buffer>,
    line_capacity: usize,
    point_buffer: Option<wgpu::Buffer>,
    point_capacity: usize,
    line_scratch: Vec<LineVertex>,
    point_scratch: Vec<PointInstance>,
}

impl StripRenderer {
    /// Erstellt beide Pipelines mit gemeinsamem Uniform-Buffer.
    pub fn new(render_state: &egui_wgpu::RenderState, shader: &wgpu::ShaderModule) -> Self {
        let device = &render_state.device;

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Curve Uniform Buffer"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Curve Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Curve Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Curve Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let line_pipeline = create_pipeline(
            device,
            render_state.target_format,
            &pipeline_layout,
            shader,
            PipelineDesc {
                label: "Line Strip Pipeline",
                vs_entry: "vs_line",
                fs_entry: "fs_line",
                buffers: &[LineVertex::desc()],
                topology: wgpu::PrimitiveTopology::LineStrip,
                alpha_to_coverage: false,
            },
        );

        let point_pipeline = create_pipeline(
            device,
            render_state.target_format,
            &pipeline_layout,
            shader,
            PipelineDesc {
                label: "Point Pipeline",
                vs_entry: "vs_point",
                fs_entry: "fs_point",
                buffers: &[Vertex::desc(), PointInstance::desc()],
                topology: wgpu::PrimitiveTopology::TriangleList,
                alpha_to_coverage: true,
            },
        );

        let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Point Quad Buffer"),
            contents: bytemuck::cast_slice(&Vertex::QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            line_pipeline,
            point_pipeline,
            quad_buffer,
            uniform_buffer,
            bind_group,
            line_buffer: None,
            line_capacity: 0,
            point_buffer: None,
            point_capacity: 0,
            line_scratch: Vec::new(),
            point_scratch: Vec::new(),
        }
    }

    /// Lädt alle Batches hoch und zeichnet sie in Reihenfolge.
    pub fn render(
        &mut self,
        ctx: &RenderContext,
        render_pass: &mut wgpu::RenderPass<'static>,
        batches: &[DrawBatch],
    ) {
        let mut lines = std::mem::take(&mut self.line_scratch);
        let mut points = std::mem::take(&mut self.point_scratch);
        let ranges = pack_batches(batches, &mut lines, &mut points);

        if ranges.is_empty() {
            self.line_scratch = lines;
            self.point_scratch = points;
            return;
        }

        let uniforms = Uniforms {
            view_proj: ctx
                .camera
                .view_projection(ctx.viewport_size)
                .to_cols_array_2d(),
            viewport: [
                ctx.viewport_size[0],
                ctx.viewport_size[1],
                ctx.options.point_size_px,
                0.0,
            ],
        };
        ctx.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[uniforms]));

        upload(
            ctx,
            &mut self.line_buffer,
            &mut self.line_capacity,
            &lines,
            "Line Vertex Buffer",
        );
        upload(
            ctx,
            &mut self.point_buffer,
            &mut self.point_capacity,
            &points,
            "Point Instance Buffer",
        );

        log::debug!(
            "StripRenderer: {} Draw-Calls, {} Linien-Vertices, {} Punkte",
            ranges.len(),
            lines.len(),
            points.len()
        );

        render_pass.set_bind_group(0, &self.bind_group, &[]);
        for draw in &ranges {
            match draw.kind {
                PrimitiveKind::LineStrip => {
                    let Some(buffer) = self.line_buffer.as_ref() else {
                        continue;
                    };
                    render_pass.set_pipeline(&self.line_pipeline);
                    render_pass.set_vertex_buffer(0, buffer.slice(..));
                    render_pass.draw(draw.range.clone(), 0..1);
                }
                PrimitiveKind::Points => {
                    let Some(buffer) = self.point_buffer.as_ref() else {
                        continue;
                    };
                    render_pass.set_pipeline(&self.point_pipeline);
                    render_pass.set_vertex_buffer(0, self.quad_buffer.slice(..));
                    render_pass.set_vertex_buffer(1, buffer.slice(..));
                    render_pass.draw(0..6, draw.range.clone());
                }
            }
        }

        self.line_scratch = lines;
        self.point_scratch = points;
    }
}

struct PipelineDesc<'a> {
    label: &'a str,
    vs_entry: &'a str,
    fs_entry: &'a str,
    buffers: &'a [wgpu::VertexBufferLayout<'a>],
    topology: wgpu::PrimitiveTopology,
    alpha_to_coverage: bool,
}

fn create_pipeline(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    desc: PipelineDesc,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(desc.vs_entry),
            buffers: desc.buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(desc.fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: desc.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 4,
            mask: !0,
            alpha_to_coverage_enabled: desc.alpha_to_coverage,
        },
        multiview: None,
        cache: None,
    })
}

/// Schreibt Daten in einen wiederverwendeten Buffer, vergrößert ihn bei Bedarf.
fn upload<T: bytemuck::Pod>(
    ctx: &RenderContext,
    buffer: &mut Option<wgpu::Buffer>,
    capacity: &mut usize,
    data: &[T],
    label: &str,
) {
    if data.is_empty() {
        return;
    }

    if buffer.is_none() || data.len() > *capacity {
        let size = (data.len() * std::mem::size_of::<T>()) as u64;
        *buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        *capacity = data.len();
    }

    if let Some(buffer) = buffer.as_ref() {
        ctx.queue.write_buffer(buffer, 0, bytemuck::cast_slice(data));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ColoredPoint;
    use glam::Vec3;

    fn batch(kind: PrimitiveKind, count: usize) -> DrawBatch {
        DrawBatch {
            kind,
            points: (0..count)
                .map(|i| ColoredPoint {
                    position: Vec3::new(i as f32, 0.0, 0.0),
                    color: [0.0, 0.0, 0.0, 1.0],
                })
                .collect(),
        }
    }

    #[test]
    fn test_pack_batches_keeps_order_and_ranges() {
        let batches = [
            batch(PrimitiveKind::LineStrip, 3),
            batch(PrimitiveKind::Points, 3),
            batch(PrimitiveKind::Points, 2),
            batch(PrimitiveKind::LineStrip, 5),
        ];
        let mut lines = Vec::new();
        let mut points = Vec::new();

        let ranges = pack_batches(&batches, &mut lines, &mut points);

        assert_eq!(lines.len(), 8);
        assert_eq!(points.len(), 5);
        assert_eq!(
            ranges,
            vec![
                DrawRange {
                    kind: PrimitiveKind::LineStrip,
                    range: 0..3
                },
                DrawRange {
                    kind: PrimitiveKind::Points,
                    range: 0..3
                },
                DrawRange {
                    kind: PrimitiveKind::Points,
                    range: 3..5
                },
                DrawRange {
                    kind: PrimitiveKind::LineStrip,
                    range: 3..8
                },
            ]
        );
        assert_eq!(lines[3].position, [0.0, 0.0, 0.0]);
    }
}
