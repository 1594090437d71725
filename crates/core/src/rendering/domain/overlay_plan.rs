//! Turns detections into an ordered list of pixel-space shapes.
//!
//! Planning is pure: it only needs the image dimensions. Painting the
//! shapes is an infrastructure concern.

use crate::detection::domain::detection::Detection;
use crate::shared::constants::LABEL_HEIGHT;
use crate::shared::region::Region;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Unfilled rectangle around a face.
    Outline(Region),
    /// Filled band the score label sits on.
    LabelBackground(Region),
    /// Score text; `(x, y)` is the top-left of the first glyph cell.
    Label { x: i32, y: i32, text: String },
    /// Filled disc centered on a landmark point.
    Marker { x: i32, y: i32 },
}

/// Shapes for every detection, in detection order.
///
/// Per detection: outline, label background, label, then one marker per
/// landmark point.
pub fn plan_overlay(detections: &[Detection], width: u32, height: u32) -> Vec<Shape> {
    let mut shapes = Vec::new();
    for detection in detections {
        let bbox = detection.bbox.to_region(width, height);
        let band = bbox.band_above(LABEL_HEIGHT);

        shapes.push(Shape::Outline(bbox));
        shapes.push(Shape::LabelBackground(band));
        shapes.push(Shape::Label {
            x: bbox.x,
            y: band.y,
            text: detection.score_label(),
        });
        for point in &detection.landmarks {
            let (x, y) = point.to_pixel(width, height);
            shapes.push(Shape::Marker { x, y });
        }
    }
    shapes
}
