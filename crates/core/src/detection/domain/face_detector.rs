use crate::detection::domain::detection::Detection;

/// Domain interface for face detection over an encoded image.
///
/// Implementations receive the raw file bytes untouched; decoding is the
/// detector's concern. `&mut self` because remote clients hold a
/// connection that is driven per call.
pub trait FaceDetector: Send {
    fn detect(&mut self, image: &[u8]) -> Result<Vec<Detection>, Box<dyn std::error::Error>>;
}
