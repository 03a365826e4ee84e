//! Anbindung des Renderers an egui über einen wgpu-Paint-Callback.

use super::Renderer;
use crate::shared::RenderScene;
use std::sync::{Arc, Mutex, PoisonError};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Konsistenter Szenen-Snapshot dieses Frames
    pub scene: RenderScene,
}

/// Paint-Callback, der den Szenen-Snapshot eines Frames zeichnet.
pub struct WgpuRenderCallback {
    /// Renderer, geteilt über alle Frames
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Daten für diesen Frame
    pub render_data: WgpuRenderData,
    /// wgpu Device für Buffer-Allokation
    pub device: eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: eframe::wgpu::Queue,
}

impl eframe::egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        _device: &eframe::wgpu::Device,
        _queue: &eframe::wgpu::Queue,
        _screen_descriptor: &eframe::egui_wgpu::ScreenDescriptor,
        _egui_encoder: &mut eframe::wgpu::CommandEncoder,
        _callback_resources: &mut eframe::egui_wgpu::CallbackResources,
    ) -> Vec<eframe::wgpu::CommandBuffer> {
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        info: egui::PaintCallbackInfo,
        render_pass: &mut eframe::wgpu::RenderPass<'static>,
        _callback_resources: &'b eframe::egui_wgpu::CallbackResources,
    ) {
        let scene = &self.render_data.scene;
        let viewport = info.viewport_in_pixels();
        if !should_paint(scene, viewport.width_px, viewport.height_px) {
            log::debug!("Frame übersprungen: keine Geometrie oder leerer Viewport");
            return;
        }

        // Buffer werden pro Frame komplett neu geschrieben
        let mut renderer = self
            .renderer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        log::debug!(
            "Frame: {} Kontrollpunkte, {} Abtastpunkte, {}x{} px",
            scene.control_points.len(),
            scene.curve_samples.len(),
            viewport.width_px,
            viewport.height_px
        );
        renderer.render_scene(&self.device, &self.queue, render_pass, scene);
    }
}

/// Ob ein Frame gezeichnet werden muss.
fn should_paint(scene: &RenderScene, width_px: i32, height_px: i32) -> bool {
    scene.has_geometry() && width_px > 0 && height_px > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};

    #[test]
    fn test_frame_with_curve_is_painted() {
        let scene = build_render_scene(&AppState::new(), [800.0, 600.0]);
        assert!(should_paint(&scene, 800, 600));
    }

    #[test]
    fn test_collapsed_viewport_is_skipped() {
        let scene = build_render_scene(&AppState::new(), [800.0, 600.0]);
        assert!(!should_paint(&scene, 0, 600));
        assert!(!should_paint(&scene, 800, 0));
    }

    #[test]
    fn test_scene_without_geometry_is_skipped() {
        let mut scene = build_render_scene(&AppState::new(), [800.0, 600.0]);
        scene.control_points.clear();
        scene.curve_samples.clear();
        assert!(!should_paint(&scene, 800, 600));
    }
}
