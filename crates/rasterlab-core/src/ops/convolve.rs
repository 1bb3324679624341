//! Discrete convolution.

use crate::matrix::Matrix;
use crate::raster::Image;

impl Image {
    /// Convolve the image with a kernel.
    ///
    /// All reads go to a frozen copy of the image taken before the first
    /// write, so the operator never sees its own output. The kernel is
    /// read flipped in both axes (true convolution rather than
    /// correlation) and anchored at its integer center `(width / 2,
    /// height / 2)`, which makes the 1x1 kernel `[1.0]` the identity.
    ///
    /// Reads past the image edge follow the border behavior, and each
    /// channel sum is floored and mapped through the overflow behavior on
    /// write.
    pub fn convolve(&mut self, kernel: &Matrix) {
        let frozen = self.clone();

        let middle_x = i64::from(kernel.width() / 2);
        let middle_y = i64::from(kernel.height() / 2);
        let width_minus_one = i64::from(kernel.width()) - 1;
        let height_minus_one = i64::from(kernel.height()) - 1;

        self.for_each_pixel(|x, y, _| {
            let start_x = i64::from(x) - middle_x;
            let start_y = i64::from(y) - middle_y;

            let mut sum = [0.0; 3];
            for k in 0..i64::from(kernel.width()) {
                let sample_x = start_x + k;
                let kernel_x = width_minus_one - k;

                for l in 0..i64::from(kernel.height()) {
                    let color = frozen.get_pixel(sample_x, start_y + l);
                    let value = kernel.get(kernel_x, height_minus_one - l);

                    for (acc, channel) in sum.iter_mut().zip(color) {
                        *acc += f64::from(channel) * value;
                    }
                }
            }

            Some(sum)
        });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_identity_kernel_preserves_any_image(
            values in proptest::collection::vec(0u8..=255, 27)
        ) {
            let mut img = Image::new(3, 3);
            let mut it = values.iter();
            for y in 0..3 {
                for x in 0..3 {
                    let r = f64::from(*it.next().unwrap());
                    let g = f64::from(*it.next().unwrap());
                    let b = f64::from(*it.next().unwrap());
                    img.set_pixel(x, y, [r, g, b]);
                }
            }
            let original = img.clone();

            let mut kernel = Matrix::new(1, 1);
            kernel.set_values(&[1.0]);
            img.convolve(&kernel);
            prop_assert_eq!(img, original);
        }
    }
}
