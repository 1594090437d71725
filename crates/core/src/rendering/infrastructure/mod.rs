pub mod glyphs;
pub mod overlay_renderer;
