//! The pixel buffer and its policy-aware addressing model.
//!
//! [`Image`] owns a width x height grid of RGB samples together with three
//! per-instance policies: a [`BorderBehavior`] applied to every out-of-range
//! read and write, an [`OverflowBehavior`] applied to every stored channel
//! value, and an [`Interpolation`] method used for fractional sampling.
//!
//! All mutation funnels through [`Image::set_pixel`] (and therefore through
//! the overflow policy); higher-level operators are built on
//! [`Image::for_each_pixel`].

mod channels;
mod point;
mod sample;

use std::fmt;

use crate::policy::{BorderBehavior, Interpolation, OverflowBehavior};

pub use point::BlendMode;
pub use sample::DerivativeAxis;

/// An RGB sample, one byte per channel.
pub type Rgb = [u8; 3];

/// A 2D raster image with policy-aware pixel addressing.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pixels: Vec<u8>,
    border: BorderBehavior,
    overflow: OverflowBehavior,
    interpolation: Interpolation,
}

impl Image {
    /// Create a new white image with default policies (white border,
    /// saturating overflow, bilinear interpolation).
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be nonzero");
        Self {
            width,
            height,
            pixels: vec![255; (width * height * 3) as usize],
            border: BorderBehavior::default(),
            overflow: OverflowBehavior::default(),
            interpolation: Interpolation::default(),
        }
    }

    /// Create an image from a raw RGB buffer with default policies.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero, or if `pixels.len()` is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be nonzero");
        assert_eq!(
            pixels.len(),
            (width * height * 3) as usize,
            "pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
            border: BorderBehavior::default(),
            overflow: OverflowBehavior::default(),
            interpolation: Interpolation::default(),
        }
    }

    /// Consume the image and return the raw RGB buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Create an image from an `image::RgbImage`.
    ///
    /// # Panics
    ///
    /// Panics if the source image has a zero dimension.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbImage` for encoding or further processing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Export the pixel grid as row-major RGBA bytes with alpha fixed at
    /// 255, the layout display surfaces consume.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity((self.width * self.height * 4) as usize);
        for chunk in self.pixels.chunks_exact(3) {
            out.extend_from_slice(chunk);
            out.push(255);
        }
        out
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The border behavior applied to out-of-range coordinates.
    pub fn border(&self) -> BorderBehavior {
        self.border
    }

    /// Set the border behavior.
    pub fn set_border(&mut self, border: BorderBehavior) {
        self.border = border;
    }

    /// The overflow behavior applied to written channel values.
    pub fn overflow(&self) -> OverflowBehavior {
        self.overflow
    }

    /// Set the overflow behavior.
    pub fn set_overflow(&mut self, overflow: OverflowBehavior) {
        self.overflow = overflow;
    }

    /// The interpolation method used by fractional sampling.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Set the interpolation method.
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 3) as usize
    }

    /// Read the pixel at integer coordinates through the border policy.
    ///
    /// Coordinates outside the image are mapped in range by the border
    /// behavior; when the behavior reports them unusable, the border color
    /// is returned instead (white under
    /// [`BorderBehavior::White`], black otherwise).
    pub fn get_pixel(&self, x: i64, y: i64) -> Rgb {
        let rx = self.border.resolve(x, self.width as i64 - 1);
        let ry = self.border.resolve(y, self.height as i64 - 1);
        match (rx, ry) {
            (Some(rx), Some(ry)) => {
                let idx = self.index(rx as u32, ry as u32);
                [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
            }
            _ => self.border.fallback_color(),
        }
    }

    /// Write a pixel at integer coordinates.
    ///
    /// Coordinates are resolved through the border policy; writes whose
    /// coordinates are unusable are silently dropped. Each channel is
    /// floored to an integer and passed through the overflow policy before
    /// storage.
    pub fn set_pixel(&mut self, x: i64, y: i64, value: [f64; 3]) {
        let rx = self.border.resolve(x, self.width as i64 - 1);
        let ry = self.border.resolve(y, self.height as i64 - 1);
        if let (Some(rx), Some(ry)) = (rx, ry) {
            let idx = self.index(rx as u32, ry as u32);
            for (offset, channel) in value.iter().enumerate() {
                self.pixels[idx + offset] = self.overflow.apply(channel.floor() as i64);
            }
        }
    }

    /// Apply a function to every pixel, in row-major order.
    ///
    /// The function receives the coordinates and current color of each
    /// pixel. Returning `Some(color)` writes the new color back through
    /// [`set_pixel`](Self::set_pixel) (and therefore the overflow policy);
    /// returning `None` leaves the pixel unchanged.
    ///
    /// This is the primitive every per-pixel operator is built from.
    pub fn for_each_pixel<F>(&mut self, mut f: F)
    where
        F: FnMut(u32, u32, Rgb) -> Option<[f64; 3]>,
    {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.index(x, y);
                let color = [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]];
                if let Some(new_color) = f(x, y, color) {
                    self.set_pixel(x as i64, y as i64, new_color);
                }
            }
        }
    }

    /// Change the image size without resampling.
    ///
    /// Every coordinate of the new grid is read from the old content
    /// through [`get_pixel`](Self::get_pixel), so growing the image fills
    /// the new area according to the current border behavior and shrinking
    /// crops.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn set_size(&mut self, width: u32, height: u32) {
        assert!(width > 0 && height > 0, "image dimensions must be nonzero");
        let source = self.clone();
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 3) as usize];
        for y in 0..height {
            for x in 0..width {
                let color = source.get_pixel(x as i64, y as i64);
                let idx = self.index(x, y);
                self.pixels[idx..idx + 3].copy_from_slice(&color);
            }
        }
    }

    /// Resize the image with resampling.
    ///
    /// Destination coordinates are mapped linearly onto the source so the
    /// corner pixels of both grids coincide, and each sample is synthesized
    /// with the current interpolation method. An axis with a single
    /// destination pixel samples the source at 0.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        assert!(width > 0 && height > 0, "image dimensions must be nonzero");
        let source = self.clone();
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 3) as usize];
        for y in 0..height {
            for x in 0..width {
                let sx = if width == 1 {
                    0.0
                } else {
                    x as f64 / (width - 1) as f64 * (source.width - 1) as f64
                };
                let sy = if height == 1 {
                    0.0
                } else {
                    y as f64 / (height - 1) as f64 * (source.height - 1) as f64
                };
                let color = source.sample(sx, sy);
                let idx = self.index(x, y);
                self.pixels[idx..idx + 3].copy_from_slice(&color);
            }
        }
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                let [r, g, b] = self.get_pixel(x, y);
                write!(f, "{:<14}", format!("[{},{},{}]", r, g, b))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{BorderBehavior, Interpolation, OverflowBehavior};

    /// Create an image with a deterministic per-pixel pattern.
    fn test_image(width: u32, height: u32) -> Image {
        let mut img = Image::new(width, height);
        img.for_each_pixel(|x, y, _| {
            let v = ((x + y * width) * 7 % 256) as f64;
            Some([v, (v + 1.0) % 256.0, (v + 2.0) % 256.0])
        });
        img
    }

    #[test]
    fn test_new_is_white() {
        let img = Image::new(3, 2);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(img.get_pixel(x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_new_zero_dimension_panics() {
        let _ = Image::new(0, 4);
    }

    #[test]
    fn test_default_policies() {
        let img = Image::new(2, 2);
        assert_eq!(img.border(), BorderBehavior::White);
        assert_eq!(img.overflow(), OverflowBehavior::Saturate);
        assert_eq!(img.interpolation(), Interpolation::Bilinear);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut img = Image::new(2, 2);
        img.set_pixel(0, 0, [10.0, 20.0, 30.0]);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_out_of_range_read_white_border() {
        let img = Image::new(2, 2);
        assert_eq!(img.get_pixel(5, 5), [255, 255, 255]);
    }

    #[test]
    fn test_out_of_range_read_black_border() {
        let mut img = Image::new(2, 2);
        img.set_border(BorderBehavior::Black);
        assert_eq!(img.get_pixel(5, 5), [0, 0, 0]);
        assert_eq!(img.get_pixel(-1, 0), [0, 0, 0]);
    }

    #[test]
    fn test_out_of_range_read_closest_border() {
        let mut img = test_image(3, 3);
        img.set_border(BorderBehavior::Closest);
        assert_eq!(img.get_pixel(-4, 1), img.get_pixel(0, 1));
        assert_eq!(img.get_pixel(7, 2), img.get_pixel(2, 2));
    }

    #[test]
    fn test_out_of_range_read_wrap_border() {
        let mut img = test_image(3, 3);
        img.set_border(BorderBehavior::Wrap);
        assert_eq!(img.get_pixel(3, 0), img.get_pixel(0, 0));
        assert_eq!(img.get_pixel(-1, 2), img.get_pixel(2, 2));
    }

    #[test]
    fn test_out_of_range_write_dropped() {
        let mut img = Image::new(2, 2);
        img.set_pixel(5, 0, [0.0, 0.0, 0.0]);
        img.set_pixel(0, -1, [0.0, 0.0, 0.0]);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(img.get_pixel(x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    fn test_out_of_range_write_wrap_border_lands_in_grid() {
        let mut img = Image::new(2, 2);
        img.set_border(BorderBehavior::Wrap);
        img.set_pixel(2, 0, [10.0, 20.0, 30.0]);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_set_pixel_floors_channels() {
        let mut img = Image::new(1, 1);
        img.set_pixel(0, 0, [10.9, 20.5, 30.1]);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_set_pixel_saturate_overflow() {
        let mut img = Image::new(1, 1);
        img.set_pixel(0, 0, [300.0, -10.0, 128.0]);
        assert_eq!(img.get_pixel(0, 0), [255, 0, 128]);
    }

    #[test]
    fn test_set_pixel_wrap_overflow() {
        let mut img = Image::new(1, 1);
        img.set_overflow(OverflowBehavior::Wrap);
        img.set_pixel(0, 0, [256.0, 257.0, -1.0]);
        assert_eq!(img.get_pixel(0, 0), [0, 1, 255]);
    }

    #[test]
    fn test_for_each_pixel_visits_all() {
        let mut img = Image::new(3, 2);
        let mut count = 0;
        img.for_each_pixel(|_, _, _| {
            count += 1;
            None
        });
        assert_eq!(count, 6);
    }

    #[test]
    fn test_for_each_pixel_none_leaves_unchanged() {
        let mut img = test_image(3, 3);
        let before = img.clone();
        img.for_each_pixel(|_, _, _| None);
        assert_eq!(img, before);
    }

    #[test]
    fn test_for_each_pixel_writes_through_overflow() {
        let mut img = Image::new(2, 2);
        img.for_each_pixel(|_, _, _| Some([300.0, -5.0, 64.0]));
        assert_eq!(img.get_pixel(1, 1), [255, 0, 64]);
    }

    #[test]
    fn test_clone_is_independent() {
        let source = test_image(3, 3);
        let mut copy = source.clone();
        assert_eq!(copy, source);
        copy.set_pixel(1, 1, [0.0, 0.0, 0.0]);
        assert_ne!(copy.get_pixel(1, 1), source.get_pixel(1, 1));
    }

    #[test]
    fn test_set_size_crops() {
        let source = test_image(4, 4);
        let mut img = source.clone();
        img.set_size(2, 2);
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(img.get_pixel(x, y), source.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_set_size_extends_with_border_color() {
        let mut img = test_image(2, 2);
        img.set_size(3, 3);
        // Default white border fills the new area.
        assert_eq!(img.get_pixel(2, 2), [255, 255, 255]);
    }

    #[test]
    fn test_set_size_extends_with_closest_border() {
        let mut img = test_image(2, 2);
        let corner = img.get_pixel(1, 1);
        img.set_border(BorderBehavior::Closest);
        img.set_size(4, 4);
        assert_eq!(img.get_pixel(3, 3), corner);
    }

    #[test]
    fn test_resize_dimensions() {
        let mut img = test_image(4, 3);
        img.resize(8, 5);
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 5);
    }

    #[test]
    fn test_resize_corners_preserved() {
        let mut img = test_image(2, 2);
        let top_left = img.get_pixel(0, 0);
        let bottom_right = img.get_pixel(1, 1);
        img.set_border(BorderBehavior::Closest);
        img.resize(4, 4);
        assert_eq!(img.get_pixel(0, 0), top_left);
        assert_eq!(img.get_pixel(3, 3), bottom_right);
    }

    #[test]
    fn test_resize_to_single_column() {
        let mut img = test_image(4, 4);
        let left_column: Vec<Rgb> = (0..4).map(|y| img.get_pixel(0, y)).collect();
        img.resize(1, 4);
        for (y, expected) in left_column.iter().enumerate() {
            assert_eq!(img.get_pixel(0, y as i64), *expected);
        }
    }

    #[test]
    fn test_from_raw_roundtrip() {
        let pixels = vec![1, 2, 3, 4, 5, 6];
        let img = Image::from_raw(2, 1, pixels.clone());
        assert_eq!(img.get_pixel(0, 0), [1, 2, 3]);
        assert_eq!(img.get_pixel(1, 0), [4, 5, 6]);
        assert_eq!(img.into_raw(), pixels);
    }

    #[test]
    #[should_panic]
    fn test_from_raw_wrong_length_panics() {
        let _ = Image::from_raw(2, 2, vec![0; 5]);
    }

    #[test]
    fn test_rgb_image_roundtrip() {
        let source = test_image(3, 2);
        let rgb = source.to_rgb_image().unwrap();
        let back = Image::from_rgb_image(rgb);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(back.get_pixel(x, y), source.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_to_rgba_bytes() {
        let mut img = Image::new(2, 1);
        img.set_pixel(0, 0, [1.0, 2.0, 3.0]);
        img.set_pixel(1, 0, [4.0, 5.0, 6.0]);
        assert_eq!(img.to_rgba_bytes(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_display_padding() {
        let mut img = Image::new(2, 1);
        img.set_pixel(0, 0, [1.0, 2.0, 3.0]);
        img.set_pixel(1, 0, [10.0, 20.0, 30.0]);
        let text = img.to_string();
        assert_eq!(text, format!("{:<14}{:<14}\n", "[1,2,3]", "[10,20,30]"));
    }

    #[test]
    fn test_end_to_end_addressing() {
        let mut img = Image::new(2, 2);
        img.fill([255.0, 255.0, 255.0]);
        img.set_pixel(0, 0, [10.0, 20.0, 30.0]);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 30]);
        assert_eq!(img.get_pixel(5, 5), [255, 255, 255]);
        img.set_border(BorderBehavior::Black);
        assert_eq!(img.get_pixel(5, 5), [0, 0, 0]);
    }
}
