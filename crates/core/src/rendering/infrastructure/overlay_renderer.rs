use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::detection::domain::detection::Detection;
use crate::rendering::domain::detection_renderer::DetectionRenderer;
use crate::rendering::domain::overlay_plan::{plan_overlay, Shape};
use crate::rendering::infrastructure::glyphs::draw_text;
use crate::shared::constants::{BOX_COLOR, LANDMARK_COLOR, LANDMARK_RADIUS, TEXT_COLOR};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws boxes, score labels and landmark markers with `imageproc`.
///
/// Colors are fixed: green boxes and label bands, blue score text, red
/// landmarks. Shapes reaching past the image border are clipped.
pub struct OverlayRenderer;

impl OverlayRenderer {
    pub fn new() -> Self {
        Self
    }

    fn paint(image: &mut RgbImage, shape: &Shape) {
        match shape {
            Shape::Outline(region) => {
                draw_hollow_rect_mut(image, to_rect(region), Rgb(BOX_COLOR));
            }
            Shape::LabelBackground(region) => {
                draw_filled_rect_mut(image, to_rect(region), Rgb(BOX_COLOR));
            }
            Shape::Label { x, y, text } => {
                draw_text(image, *x, *y, text, Rgb(TEXT_COLOR));
            }
            Shape::Marker { x, y } => {
                draw_filled_circle_mut(image, (*x, *y), LANDMARK_RADIUS, Rgb(LANDMARK_COLOR));
            }
        }
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionRenderer for OverlayRenderer {
    fn render(
        &self,
        frame: &mut Frame,
        detections: &[Detection],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let shapes = plan_overlay(detections, frame.width(), frame.height());
        let image = frame.image_mut();
        for shape in &shapes {
            Self::paint(image, shape);
        }
        Ok(())
    }
}

/// `imageproc` rejects empty rectangles; degenerate extents draw as one pixel.
fn to_rect(region: &Region) -> Rect {
    Rect::at(region.x, region.y).of_size(
        region.width.max(1) as u32,
        region.height.max(1) as u32,
    )
}
