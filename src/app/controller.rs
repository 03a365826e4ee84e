//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::DollyCamera { factor } => handlers::view::dolly(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Editing ===
            AppCommand::SetEditMode { mode } => handlers::editing::set_edit_mode(state, mode),
            AppCommand::AddControlPoint { position } => {
                handlers::editing::add_control_point(state, position)
            }
            AppCommand::SelectNearestControlPoint { device_pos } => {
                handlers::editing::select_nearest(state, device_pos)
            }
            AppCommand::RemoveSelectedControlPoint => handlers::editing::remove_selected(state),
            AppCommand::MoveSelectedControlPoint { position } => {
                handlers::editing::move_selected(state, position)
            }
            AppCommand::ClearControlPointSelection => handlers::editing::clear_selection(state),
            AppCommand::ResetControlPoints => handlers::editing::reset_control_points(state),

            // === Kurvenparameter ===
            AppCommand::SetSampleCount { count } => handlers::curve::set_sample_count(state, count),
            AppCommand::SetRationalityWeight { weight } => {
                handlers::curve::set_rationality_weight(state, weight)
            }
            AppCommand::SetShowSamplePoints { visible } => {
                handlers::curve::set_show_sample_points(state, visible)
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
        }

        state.ui.sync_from_curve(&state.curve);

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
