use image::RgbImage;

/// A decoded image held as an owned RGB pixel buffer.
///
/// Format conversion happens at I/O boundaries only; rendering mutates the
/// buffer in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    #[cfg(test)]
    pub(crate) fn fill(&mut self, color: [u8; 3]) {
        for pixel in self.image.pixels_mut() {
            *pixel = image::Rgb(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_construction_and_accessors() {
        let frame = Frame::new(RgbImage::new(4, 3));
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.image().as_raw().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_pixel_access_is_row_major() {
        // 2x2 RGB: pixel (x=0, y=1) is red
        let mut data = vec![0u8; 12];
        data[6] = 255;
        let frame = Frame::new(RgbImage::from_raw(2, 2, data).unwrap());
        assert_eq!(frame.pixel(0, 1), [255, 0, 0]);
        assert_eq!(frame.pixel(1, 1), [0, 0, 0]);
    }

    #[test]
    fn test_image_mut_allows_modification() {
        let mut frame = Frame::new(RgbImage::new(2, 1));
        frame.image_mut().put_pixel(1, 0, Rgb([1, 2, 3]));
        assert_eq!(frame.pixel(1, 0), [1, 2, 3]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut frame = Frame::new(RgbImage::new(2, 2));
        frame.fill([100, 100, 100]);
        let mut cloned = frame.clone();
        cloned.image_mut().put_pixel(0, 0, Rgb([0, 0, 0]));
        assert_eq!(frame.pixel(0, 0), [100, 100, 100]);
        assert_eq!(cloned.pixel(0, 0), [0, 0, 0]);
    }
}
