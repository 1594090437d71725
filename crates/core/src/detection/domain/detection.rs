use thiserror::Error;

use crate::shared::region::{to_pixel, Region};

/// The detection service returned parallel sequences of different lengths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("misaligned detection response: {boxes} boxes, {scores} scores, {landmarks} landmark sets")]
pub struct MisalignedResponse {
    pub boxes: usize,
    pub scores: usize,
    pub landmarks: usize,
}

/// Bounding box with every component expressed as a fraction of the image size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Pixel rectangle for an image of `image_width` x `image_height`.
    ///
    /// Each component is scaled along its own axis and floored.
    pub fn to_region(&self, image_width: u32, image_height: u32) -> Region {
        Region::new(
            to_pixel(self.x, image_width),
            to_pixel(self.y, image_height),
            to_pixel(self.width, image_width),
            to_pixel(self.height, image_height),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_pixel(&self, image_width: u32, image_height: u32) -> (i32, i32) {
        (to_pixel(self.x, image_width), to_pixel(self.y, image_height))
    }
}

/// One detected face: box, confidence, and its landmark points.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    pub bbox: NormalizedBox,
    /// Confidence in `[0, 1]`.
    pub score: f32,
    pub landmarks: Vec<NormalizedPoint>,
}

impl Detection {
    pub fn new(bbox: NormalizedBox, score: f32, landmarks: Vec<NormalizedPoint>) -> Self {
        Self {
            bbox,
            score,
            landmarks,
        }
    }

    /// Joins index-aligned parallel sequences into one list of detections.
    ///
    /// Index `i` of each input describes the same face. All three inputs
    /// must have the same length; anything else is rejected as a whole.
    pub fn zip_parallel(
        boxes: Vec<NormalizedBox>,
        scores: Vec<f32>,
        landmarks: Vec<Vec<NormalizedPoint>>,
    ) -> Result<Vec<Detection>, MisalignedResponse> {
        if boxes.len() != scores.len() || boxes.len() != landmarks.len() {
            return Err(MisalignedResponse {
                boxes: boxes.len(),
                scores: scores.len(),
                landmarks: landmarks.len(),
            });
        }
        Ok(boxes
            .into_iter()
            .zip(scores)
            .zip(landmarks)
            .map(|((bbox, score), points)| Detection::new(bbox, score, points))
            .collect())
    }

    /// Score as a percentage with two decimals, e.g. `0.95` -> `"95.00"`.
    pub fn score_label(&self) -> String {
        format!("{:.2}", f64::from(self.score) * 100.0)
    }
}
