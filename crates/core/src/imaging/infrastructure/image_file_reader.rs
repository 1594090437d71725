use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::frame::Frame;

/// Reads image files from disk using the `image` crate.
///
/// Bytes and pixels are loaded independently: the bytes go to the
/// detection service untouched, the decoded frame is what gets drawn on.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        Ok(std::fs::read(path)?)
    }

    fn read_frame(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>> {
        let img = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgb8();
        Ok(Frame::new(img))
    }
}
