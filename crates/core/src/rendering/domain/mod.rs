pub mod detection_renderer;
pub mod overlay_plan;
