//! Channel plane decomposition and recomposition.
//!
//! Images convert to and from per-channel planes in two forms: grayscale
//! [`Image`]s (for display and further image processing) and [`Matrix`]
//! planes (for frequency-domain work).

use crate::matrix::Matrix;
use crate::raster::Image;

impl Image {
    /// Split the image into three grayscale images, one per channel.
    ///
    /// Each output pixel holds the source channel value in all three of
    /// its own channels. The outputs are fresh images with default
    /// policies.
    pub fn split_channels(&self) -> [Image; 3] {
        let mut result = [
            Image::new(self.width(), self.height()),
            Image::new(self.width(), self.height()),
            Image::new(self.width(), self.height()),
        ];

        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                let [r, g, b] = self.get_pixel(x, y);
                for (plane, channel) in result.iter_mut().zip([r, g, b]) {
                    let value = f64::from(channel);
                    plane.set_pixel(x, y, [value, value, value]);
                }
            }
        }

        result
    }

    /// Rebuild the image from three single-channel images.
    ///
    /// The image is resized to `red`'s dimensions and only the first
    /// channel of each input is used. `green` and `blue` are read at the
    /// same coordinates through their own border behavior, so they do not
    /// need to match `red`'s size.
    pub fn merge_channels(&mut self, red: &Image, green: &Image, blue: &Image) {
        self.set_size(red.width(), red.height());

        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                let r = red.get_pixel(x, y)[0];
                let g = green.get_pixel(x, y)[0];
                let b = blue.get_pixel(x, y)[0];
                self.set_pixel(x, y, [f64::from(r), f64::from(g), f64::from(b)]);
            }
        }
    }

    /// Rebuild the image from three channel matrices.
    ///
    /// Each matrix is rendered to a grayscale image first, so the entries
    /// are floored and saturated into `[0, 255]` before the merge.
    pub fn merge_channels_from_matrices(&mut self, red: &Matrix, green: &Matrix, blue: &Matrix) {
        self.merge_channels(&red.to_image(), &green.to_image(), &blue.to_image());
    }

    /// Extract the channel values into three matrices.
    pub fn to_matrices(&self) -> [Matrix; 3] {
        let mut result = [
            Matrix::new(self.width(), self.height()),
            Matrix::new(self.width(), self.height()),
            Matrix::new(self.width(), self.height()),
        ];

        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                let [r, g, b] = self.get_pixel(x, y);
                for (plane, channel) in result.iter_mut().zip([r, g, b]) {
                    plane.set(x, y, f64::from(channel));
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> Image {
        let mut img = Image::new(2, 2);
        img.set_pixel(0, 0, [10.0, 20.0, 30.0]);
        img.set_pixel(1, 0, [40.0, 50.0, 60.0]);
        img.set_pixel(0, 1, [70.0, 80.0, 90.0]);
        img.set_pixel(1, 1, [100.0, 110.0, 120.0]);
        img
    }

    #[test]
    fn test_split_channels_planes_are_gray() {
        let [r, g, b] = test_image().split_channels();

        assert_eq!(r.get_pixel(0, 0), [10, 10, 10]);
        assert_eq!(g.get_pixel(0, 0), [20, 20, 20]);
        assert_eq!(b.get_pixel(0, 0), [30, 30, 30]);
        assert_eq!(r.get_pixel(1, 1), [100, 100, 100]);
        assert_eq!(g.get_pixel(1, 1), [110, 110, 110]);
        assert_eq!(b.get_pixel(1, 1), [120, 120, 120]);
    }

    #[test]
    fn test_split_channels_dimensions() {
        let planes = test_image().split_channels();
        for plane in &planes {
            assert_eq!(plane.width(), 2);
            assert_eq!(plane.height(), 2);
        }
    }

    #[test]
    fn test_split_then_merge_round_trips() {
        let original = test_image();
        let [r, g, b] = original.split_channels();

        let mut rebuilt = Image::new(1, 1);
        rebuilt.merge_channels(&r, &g, &b);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_merge_channels_resizes_to_red() {
        let red = Image::new(3, 4);
        let green = Image::new(3, 4);
        let blue = Image::new(3, 4);

        let mut img = Image::new(1, 1);
        img.merge_channels(&red, &green, &blue);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 4);
    }

    #[test]
    fn test_merge_channels_takes_first_channel_only() {
        let mut red = Image::new(1, 1);
        red.set_pixel(0, 0, [10.0, 99.0, 99.0]);
        let mut green = Image::new(1, 1);
        green.set_pixel(0, 0, [20.0, 99.0, 99.0]);
        let mut blue = Image::new(1, 1);
        blue.set_pixel(0, 0, [30.0, 99.0, 99.0]);

        let mut img = Image::new(1, 1);
        img.merge_channels(&red, &green, &blue);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_merge_channels_smaller_plane_reads_its_border() {
        let mut red = Image::new(2, 1);
        red.fill([10.0, 10.0, 10.0]);
        let mut green = Image::new(1, 1);
        green.fill([20.0, 20.0, 20.0]);
        let blue = green.clone();

        let mut img = Image::new(1, 1);
        img.merge_channels(&red, &green, &blue);
        assert_eq!(img.get_pixel(0, 0), [10, 20, 20]);
        // Past the green/blue extent the default white border reads 255.
        assert_eq!(img.get_pixel(1, 0), [10, 255, 255]);
    }

    #[test]
    fn test_to_matrices_values() {
        let [r, g, b] = test_image().to_matrices();

        assert_eq!(r.get(0, 0), 10.0);
        assert_eq!(g.get(0, 0), 20.0);
        assert_eq!(b.get(0, 0), 30.0);
        assert_eq!(r.get(1, 1), 100.0);
        assert_eq!(g.get(1, 1), 110.0);
        assert_eq!(b.get(1, 1), 120.0);
    }

    #[test]
    fn test_to_matrices_then_merge_round_trips() {
        let original = test_image();
        let [r, g, b] = original.to_matrices();

        let mut rebuilt = Image::new(1, 1);
        rebuilt.merge_channels_from_matrices(&r, &g, &b);
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_merge_from_matrices_floors_and_saturates() {
        let mut r = Matrix::new(1, 1);
        r.set_values(&[10.7]);
        let mut g = Matrix::new(1, 1);
        g.set_values(&[-5.0]);
        let mut b = Matrix::new(1, 1);
        b.set_values(&[300.0]);

        let mut img = Image::new(1, 1);
        img.merge_channels_from_matrices(&r, &g, &b);
        assert_eq!(img.get_pixel(0, 0), [10, 0, 255]);
    }
}
