//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt der Interaktions-Automat: der Modus wird bei jedem Zeiger-Event
//! neu gelesen, die Rückprojektion auf die Arbeitsebene passiert vor dem
//! Command.

use super::state::EditMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],

        AppIntent::PointerPressed { device_pos } => match state.editor.mode {
            EditMode::Add => match unproject(state, device_pos) {
                Some(position) => vec![AppCommand::AddControlPoint { position }],
                None => {
                    log::warn!(
                        "Klick bei ({:.1}, {:.1}) trifft die Arbeitsebene nicht",
                        device_pos.x,
                        device_pos.y
                    );
                    Vec::new()
                }
            },
            EditMode::Pan => vec![AppCommand::SelectNearestControlPoint { device_pos }],
            EditMode::Remove => vec![
                AppCommand::SelectNearestControlPoint { device_pos },
                AppCommand::RemoveSelectedControlPoint,
                AppCommand::ClearControlPointSelection,
            ],
        },
        AppIntent::PointerMoved { device_pos } => {
            if state.editor.mode != EditMode::Pan || state.editor.selected_index().is_none() {
                return Vec::new();
            }
            match unproject(state, device_pos) {
                Some(position) => vec![AppCommand::MoveSelectedControlPoint { position }],
                None => Vec::new(),
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::ClearControlPointSelection],

        AppIntent::CameraDolly { factor } => vec![AppCommand::DollyCamera { factor }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        AppIntent::SetEditModeRequested { mode } => vec![AppCommand::SetEditMode { mode }],
        AppIntent::SampleCountChanged { input } => vec![AppCommand::SetSampleCount {
            count: crate::shared::parse_sample_count(&input),
        }],
        AppIntent::RationalityWeightChanged { input } => vec![AppCommand::SetRationalityWeight {
            weight: crate::shared::parse_rationality_weight(&input),
        }],
        AppIntent::ShowSamplePointsToggled { visible } => {
            vec![AppCommand::SetShowSamplePoints { visible }]
        }
        AppIntent::ResetControlPointsRequested => vec![
            AppCommand::ClearControlPointSelection,
            AppCommand::ResetControlPoints,
        ],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

fn unproject(state: &AppState, device_pos: glam::Vec2) -> Option<glam::Vec3> {
    state
        .view
        .camera
        .unproject_to_plane(device_pos, state.view.viewport_size)
}
