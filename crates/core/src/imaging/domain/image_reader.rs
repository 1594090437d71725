use std::path::Path;

use crate::shared::frame::Frame;

/// Loads an input image in the two forms the pipeline needs.
pub trait ImageReader: Send {
    /// Raw encoded file contents, exactly as stored on disk.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>>;

    /// Decoded RGB pixel buffer.
    fn read_frame(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
