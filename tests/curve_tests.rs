//! Integrationstests für Kurvenauswertung und Szenen-Ausgabe.

use approx::assert_relative_eq;
use bezier_editor::core::curve;
use bezier_editor::shared::PrimitiveKind;
use bezier_editor::{app, AppState, DrawList, PointerPhase};
use glam::Vec3;

fn cubic() -> Vec<Vec3> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 2.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
    ]
}

fn de_casteljau(points: &[Vec3], t: f32) -> Vec3 {
    let mut work = points.to_vec();
    while work.len() > 1 {
        work = work.windows(2).map(|w| w[0].lerp(w[1], t)).collect();
    }
    work[0]
}

#[test]
fn test_unit_weight_matches_polynomial_bezier() {
    let points = cubic();
    for i in 0..=16 {
        let t = i as f32 / 16.0;
        let rational = curve::evaluate(&points, 1.0, t);
        let polynomial = de_casteljau(&points, t);
        assert_relative_eq!(rational.x, polynomial.x, epsilon = 1e-5);
        assert_relative_eq!(rational.y, polynomial.y, epsilon = 1e-5);
    }
}

#[test]
fn test_two_step_sampling_of_initial_triangle() {
    let points = [
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(-1.0, 0.0, 0.0),
    ];

    let samples = curve::sample(&points, 1.0, 2);

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], points[0]);
    assert_relative_eq!(samples[1].x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(samples[1].y, -0.25, epsilon = 1e-6);
    assert_eq!(samples[2], points[2]);
}

#[test]
fn test_high_degree_curve_stays_finite() {
    let points: Vec<Vec3> = (0..60)
        .map(|i| Vec3::new(i as f32, (i as f32 * 0.3).sin(), 0.0))
        .collect();

    for sample in curve::sample(&points, 2.5, 50) {
        assert!(sample.is_finite(), "nicht-endlicher Abtastpunkt {sample:?}");
    }
}

#[test]
fn test_scene_emits_polygon_points_samples_curve_in_order() {
    let mut state = AppState::new();
    state.curve.sample_count = 4;
    state.curve.show_sample_points = true;
    state.editor.phase = PointerPhase::Dragging { index: 1 };

    let scene = app::build_render_scene(&state, [800.0, 600.0]);
    let mut list = DrawList::new(state.options.background_color);
    scene.emit(&mut list);

    let kinds: Vec<PrimitiveKind> = list.batches().iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PrimitiveKind::LineStrip,
            PrimitiveKind::Points,
            PrimitiveKind::Points,
            PrimitiveKind::LineStrip,
        ]
    );

    let batches = list.batches();
    assert_eq!(batches[0].points.len(), 3);
    assert!(batches[0]
        .points
        .iter()
        .all(|p| p.color == state.options.polygon_color));

    assert_eq!(
        batches[1].points[1].color,
        state.options.control_point_color_selected
    );
    assert_eq!(batches[1].points[0].color, state.options.control_point_color);

    // nur innere Abtastpunkte
    assert_eq!(batches[2].points.len(), 3);
    assert_eq!(batches[3].points.len(), 5);
    assert!(batches[3]
        .points
        .iter()
        .all(|p| p.color == state.options.curve_color));
}

#[test]
fn test_scene_without_sample_points_has_three_batches() {
    let state = AppState::new();

    let scene = app::build_render_scene(&state, [800.0, 600.0]);
    let mut list = DrawList::new(state.options.background_color);
    scene.emit(&mut list);

    assert_eq!(list.batches().len(), 3);
}
