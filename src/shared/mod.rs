//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod draw_list;
pub mod options;
mod render_scene;

pub use draw_list::{ColoredPoint, DrawBatch, DrawList, PrimitiveKind, SceneSink};
pub use options::{
    clamp_sample_count, parse_rationality_weight, parse_sample_count, sanitize_weight,
    EditorOptions, MAX_SAMPLE_COUNT,
};
pub use render_scene::RenderScene;
