//! Bezier-Editor.
//!
//! Interaktiver Editor für rationale Bézier-Kurven beliebigen Grades
//! mit egui + wgpu.

use bezier_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Bezier-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Bezier-Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state)?))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Result<Self, render::RenderError> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let renderer = render::Renderer::new(render_state).inspect_err(|e| {
            log::error!("Renderer-Initialisierung fehlgeschlagen: {}", e);
        })?;

        Ok(Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(renderer)),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_properties_panel(ctx, &mut self.state));
        events.extend(ui::show_options_dialog(ctx, &mut self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.editor.mode,
                    &self.state.options,
                ));

                let viewport_size = [rect.width(), rect.height()];
                let render_data = render::WgpuRenderData {
                    scene: self
                        .controller
                        .build_render_scene(&self.state, viewport_size),
                };

                ui.painter().rect_filled(
                    rect,
                    0.0,
                    ui::color32(self.state.options.background_color),
                );

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                        device: self.device.clone(),
                        queue: self.queue.clone(),
                    },
                );

                ui.painter().add(callback);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.editor.selected_index().is_some()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
