//! Bezier-Editor Library.
//! Kurvenauswertung, Kamera und Interaktion als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CurveState, EditMode, EditorState,
    PointerPhase, UiState, ViewState,
};
pub use core::{
    binomial, factorial, Camera3D, ControlPointError, ControlPointList, FactorialTable,
    WorkingPlane,
};
pub use shared::{DrawList, EditorOptions, RenderScene, SceneSink};
