/// An integer pixel rectangle, the result of mapping a normalized box onto
/// a concrete image.
///
/// Coordinates may be negative or extend past the image; painting clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Band of `band_height` rows sitting directly above this region,
    /// sharing its horizontal extent.
    pub fn band_above(&self, band_height: i32) -> Region {
        Region {
            x: self.x,
            y: self.y.saturating_sub(band_height),
            width: self.width,
            height: band_height,
        }
    }

}

/// Largest pixel offset [`to_pixel`] returns in either direction, leaving
/// headroom for box extents and marker radii in `i32` arithmetic.
const PIXEL_LIMIT: f64 = (1 << 28) as f64;

/// Maps a normalized coordinate onto a pixel axis of length `extent`.
///
/// Values are floored, so `[0, 1)` lands on `[0, extent)`. Out-of-range
/// input is clamped to `[-extent, 2 * extent]`; everything there is off
/// the image anyway.
pub fn to_pixel(normalized: f64, extent: u32) -> i32 {
    let extent = extent as f64;
    let low = (-extent).max(-PIXEL_LIMIT);
    let high = (2.0 * extent).min(PIXEL_LIMIT);
    (normalized * extent).floor().clamp(low, high) as i32
}
