use std::path::Path;
use std::time::{Duration, Instant};

use crate::detection::domain::face_detector::FaceDetector;
use crate::imaging::domain::image_reader::ImageReader;
use crate::imaging::domain::image_writer::ImageWriter;
use crate::rendering::domain::detection_renderer::DetectionRenderer;

/// Outcome of one annotation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationReport {
    /// Wall-clock time of the detection call alone.
    pub elapsed: Duration,
    pub faces: usize,
}

impl AnnotationReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Console line summarizing the call.
    pub fn summary(&self) -> String {
        format!(
            "Inference used {}ms, detected {} faces",
            self.elapsed_ms(),
            self.faces
        )
    }
}

/// Called once the detection call returns, before decoding and writing.
pub type ReportFn = Box<dyn Fn(&AnnotationReport) + Send>;

/// Single-image pipeline: read bytes → detect → decode → render → write.
///
/// The detector sees the file bytes as stored; rendering works on a
/// separately decoded frame.
pub struct AnnotateImageUseCase {
    reader: Box<dyn ImageReader>,
    image_writer: Box<dyn ImageWriter>,
    detector: Box<dyn FaceDetector>,
    renderer: Box<dyn DetectionRenderer>,
    on_detected: Option<ReportFn>,
}

impl AnnotateImageUseCase {
    pub fn new(
        reader: Box<dyn ImageReader>,
        image_writer: Box<dyn ImageWriter>,
        detector: Box<dyn FaceDetector>,
        renderer: Box<dyn DetectionRenderer>,
        on_detected: Option<ReportFn>,
    ) -> Self {
        Self {
            reader,
            image_writer,
            detector,
            renderer,
            on_detected,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<AnnotationReport, Box<dyn std::error::Error>> {
        let bytes = self.reader.read_bytes(input_path)?;

        let start = Instant::now();
        let detections = self.detector.detect(&bytes)?;
        let report = AnnotationReport {
            elapsed: start.elapsed(),
            faces: detections.len(),
        };
        drop(bytes);

        if let Some(ref cb) = self.on_detected {
            cb(&report);
        }

        for (i, d) in detections.iter().enumerate() {
            log::debug!(
                "Face {i}: score={:.4} bbox=({:.3}, {:.3}, {:.3}, {:.3}) landmarks={}",
                d.score,
                d.bbox.x,
                d.bbox.y,
                d.bbox.width,
                d.bbox.height,
                d.landmarks.len()
            );
        }

        let mut frame = self.reader.read_frame(input_path)?;
        self.renderer.render(&mut frame, &detections)?;
        self.image_writer.write(output_path, &frame)?;

        Ok(report)
    }
}
