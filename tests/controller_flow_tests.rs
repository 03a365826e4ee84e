//! Integrationstests für den Interaktions-Ablauf über den Controller:
//! Hinzufügen, Ziehen, Entfernen, Modus-Wechsel während eines Drags.

use bezier_editor::{AppCommand, AppController, AppIntent, AppState, EditMode, PointerPhase};
use glam::{Vec2, Vec3};

const VIEWPORT: [f32; 2] = [800.0, 600.0];

fn setup(mode: EditMode) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: VIEWPORT })
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::SetEditModeRequested { mode })
        .expect("SetEditModeRequested sollte ohne Fehler durchlaufen");

    (controller, state)
}

fn device_of(state: &AppState, world: Vec3) -> Vec2 {
    state
        .view
        .camera
        .world_to_device(world, state.view.viewport_size)
        .expect("Punkt muss projizierbar sein")
        .truncate()
}

fn press(controller: &mut AppController, state: &mut AppState, device_pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { device_pos })
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

#[test]
fn test_add_at_device_point_appends_point_on_working_plane() {
    let (mut controller, mut state) = setup(EditMode::Add);
    let target = Vec3::new(2.0, 2.0, 0.0);
    let device_pos = device_of(&state, target);

    press(&mut controller, &mut state, device_pos);

    assert_eq!(state.curve.control_points.len(), 4);
    let added = state
        .curve
        .control_points
        .get(3)
        .expect("neuer Punkt am Listenende");
    assert!(
        added.abs_diff_eq(target, 1e-3),
        "erwartet {target:?}, erhalten {added:?}"
    );
    assert_eq!(state.editor.phase, PointerPhase::Idle);
}

#[test]
fn test_remove_with_three_points_changes_nothing() {
    let (mut controller, mut state) = setup(EditMode::Remove);
    let before = state.curve.control_points.clone();
    let device_pos = device_of(&state, Vec3::new(0.0, -1.0, 0.0));

    press(&mut controller, &mut state, device_pos);

    assert_eq!(state.curve.control_points, before);
    assert_eq!(state.editor.phase, PointerPhase::Idle);
}

#[test]
fn test_remove_with_four_points_removes_nearest() {
    let (mut controller, mut state) = setup(EditMode::Add);
    let extra = device_of(&state, Vec3::new(2.0, 2.0, 0.0));
    press(&mut controller, &mut state, extra);
    controller
        .handle_intent(
            &mut state,
            AppIntent::SetEditModeRequested {
                mode: EditMode::Remove,
            },
        )
        .expect("Moduswechsel");

    let device_pos = device_of(&state, Vec3::new(0.0, -1.0, 0.0)) + Vec2::new(2.0, 2.0);
    press(&mut controller, &mut state, device_pos);

    assert_eq!(state.curve.control_points.len(), 3);
    assert_eq!(
        state.curve.control_points.get(1),
        Some(Vec3::new(-1.0, 0.0, 0.0))
    );
    assert_eq!(state.editor.phase, PointerPhase::Idle);
}

#[test]
fn test_drag_moves_selected_point_and_release_clears_selection() {
    let (mut controller, mut state) = setup(EditMode::Pan);
    let grab = device_of(&state, Vec3::new(1.0, 1.0, 0.0));

    press(&mut controller, &mut state, grab);
    assert_eq!(state.editor.phase, PointerPhase::Dragging { index: 0 });

    let destination = Vec3::new(-0.5, 1.5, 0.0);
    let device_pos = device_of(&state, destination);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved { device_pos },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    let moved = state.curve.control_points.get(0).expect("Punkt 0");
    assert!(moved.abs_diff_eq(destination, 1e-3));

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
    assert_eq!(state.editor.phase, PointerPhase::Idle);
    assert_eq!(state.editor.selected_index(), None);
}

#[test]
fn test_mode_change_during_drag_stops_moving() {
    let (mut controller, mut state) = setup(EditMode::Pan);
    let grab = device_of(&state, Vec3::new(-1.0, 0.0, 0.0));
    press(&mut controller, &mut state, grab);
    let before = state.curve.control_points.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SetEditModeRequested {
                mode: EditMode::Add,
            },
        )
        .expect("Moduswechsel");
    let device_pos = device_of(&state, Vec3::new(3.0, 3.0, 0.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved { device_pos },
        )
        .expect("PointerMoved");

    assert_eq!(state.curve.control_points, before);
}

#[test]
fn test_move_without_press_is_ignored() {
    let (mut controller, mut state) = setup(EditMode::Pan);
    let before = state.curve.control_points.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                device_pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerMoved");

    assert_eq!(state.curve.control_points, before);
}

#[test]
fn test_text_inputs_are_parsed_leniently() {
    let (mut controller, mut state) = setup(EditMode::Pan);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SampleCountChanged {
                input: "7.9".to_string(),
            },
        )
        .expect("SampleCountChanged");
    controller
        .handle_intent(
            &mut state,
            AppIntent::RationalityWeightChanged {
                input: "abc".to_string(),
            },
        )
        .expect("RationalityWeightChanged");

    assert_eq!(state.curve.sample_count, 7);
    assert_eq!(state.curve.rationality_weight, 1.0);
}

#[test]
fn test_reset_control_points_restores_initial_configuration() {
    let (mut controller, mut state) = setup(EditMode::Add);
    let device_pos = device_of(&state, Vec3::new(2.0, -2.0, 0.0));
    press(&mut controller, &mut state, device_pos);

    controller
        .handle_intent(&mut state, AppIntent::ResetControlPointsRequested)
        .expect("ResetControlPointsRequested");

    assert_eq!(
        state.curve.control_points.as_slice(),
        &[
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0)
        ]
    );
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert_eq!(state.command_log.last(), Some(&AppCommand::RequestExit));
}

#[test]
fn test_options_changed_applies_in_memory_only() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut options = state.options.clone();
    options.curve_color = [0.0, 1.0, 0.0, 1.0];
    options.point_size_px = -3.0;

    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged");

    assert_eq!(state.options.curve_color, [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(
        state.options.point_size_px,
        bezier_editor::shared::options::POINT_SIZE_PX
    );

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("ResetOptionsRequested");
    assert_eq!(state.options, bezier_editor::EditorOptions::default());
}

#[test]
fn test_huge_sample_count_input_is_capped() {
    let (mut controller, mut state) = setup(EditMode::Pan);

    controller
        .handle_intent(
            &mut state,
            AppIntent::SampleCountChanged {
                input: "1e12".to_string(),
            },
        )
        .expect("SampleCountChanged");

    assert_eq!(state.curve.sample_count, bezier_editor::shared::MAX_SAMPLE_COUNT);
    assert_eq!(
        state.ui.sample_count_input,
        bezier_editor::shared::MAX_SAMPLE_COUNT.to_string()
    );

    let scene = controller.build_render_scene(&state, VIEWPORT);
    assert_eq!(
        scene.curve_samples.len(),
        bezier_editor::shared::MAX_SAMPLE_COUNT as usize + 1
    );
}

#[test]
fn test_text_buffers_follow_curve_parameters() {
    let (mut controller, mut state) = setup(EditMode::Pan);

    controller
        .handle_command(&mut state, AppCommand::SetSampleCount { count: 0 })
        .expect("SetSampleCount");
    controller
        .handle_command(&mut state, AppCommand::SetRationalityWeight { weight: 2.5 })
        .expect("SetRationalityWeight");
    assert_eq!(state.ui.sample_count_input, "1");
    assert_eq!(state.ui.weight_input, "2.5");

    // Zwischeneingabe mit gleichem Wert bleibt beim Tippen stehen
    controller
        .handle_intent(
            &mut state,
            AppIntent::RationalityWeightChanged {
                input: "3.".to_string(),
            },
        )
        .expect("RationalityWeightChanged");
    assert_eq!(state.curve.rationality_weight, 3.0);
    assert_eq!(state.ui.weight_input, "3.");

    // Veralteter Puffer wird beim nächsten Command nachgezogen
    state.ui.weight_input = "7".to_string();
    let options = state.options.clone();
    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged");
    assert_eq!(state.ui.weight_input, "3");

    controller
        .handle_intent(&mut state, AppIntent::ResetControlPointsRequested)
        .expect("ResetControlPointsRequested");
    assert_eq!(state.ui.sample_count_input, "1");
    assert_eq!(state.ui.weight_input, "3");
}
