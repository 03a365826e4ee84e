//! GPU-Rendering mit wgpu.

mod callback;
mod strip_renderer;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use strip_renderer::StripRenderer;

use crate::core::Camera3D;
use crate::shared::{DrawList, EditorOptions};
use eframe::egui_wgpu;
use thiserror::Error;

/// Fehler beim Aufbau der GPU-Ressourcen.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Shader oder Pipeline wurden vom Treiber abgelehnt
    #[error("GPU-Validierung fehlgeschlagen: {0}")]
    Validation(String),
}

/// Gemeinsamer Kontext für alle Sub-Renderer.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Perspektivkamera des Frames
    pub camera: &'a Camera3D,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
    /// Editor-Optionen (Farben, Punktgröße)
    pub options: &'a EditorOptions,
}

/// Haupt-Renderer für Kontrollpolygon, Kontrollpunkte und Kurve.
///
/// Die Szene wird pro Frame in eine [`DrawList`] ausgegeben und von dort
/// in die GPU-Buffer übertragen.
pub struct Renderer {
    strip_renderer: StripRenderer,
}

impl Renderer {
    /// Erstellt einen neuen Renderer.
    ///
    /// Shader- und Pipeline-Fehler werden über einen Validation-Error-Scope
    /// abgefangen und als [`RenderError`] zurückgegeben.
    pub fn new(render_state: &egui_wgpu::RenderState) -> Result<Self, RenderError> {
        let device = &render_state.device;
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bezier Editor Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });
        let strip_renderer = StripRenderer::new(render_state, &shader);

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::Validation(error.to_string()));
        }

        log::info!("Renderer initialisiert ({:?})", render_state.target_format);
        Ok(Self { strip_renderer })
    }

    /// Rendert die komplette Szene
    pub fn render_scene(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        scene: &RenderScene,
    ) {
        let [width, height] = scene.viewport_size;
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return;
        }

        let mut draw_list = DrawList::new(scene.options.background_color);
        scene.emit(&mut draw_list);

        let ctx = RenderContext {
            device,
            queue,
            camera: &scene.camera,
            viewport_size: scene.viewport_size,
            options: &scene.options,
        };
        self.strip_renderer
            .render(&ctx, render_pass, draw_list.batches());
    }
}
