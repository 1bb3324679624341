//! Separable 2D discrete cosine transform.

use std::f64::consts::PI;

use crate::matrix::Matrix;
use crate::raster::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Inverse,
}

/// One 1D pass over every row (or column) of the three channel planes.
///
/// `limit` pixels are summed per output entry, so the full 2D transform
/// built from two passes stays at O(n^3).
fn transform_pass(
    direction: Direction,
    by_rows: bool,
    source: &[Matrix; 3],
    dest: &mut [Matrix; 3],
    width: u32,
    height: u32,
) {
    let limit = i64::from(if by_rows { width } else { height });
    let scale = 2.0 * limit as f64;
    let coeff1 = (1.0 / limit as f64).sqrt();
    let coeff2 = (2.0 / limit as f64).sqrt();

    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            let coord = if by_rows { x } else { y };

            let mut sum = [0.0; 3];
            for i in 0..limit {
                let values = if by_rows {
                    [source[0].get(i, y), source[1].get(i, y), source[2].get(i, y)]
                } else {
                    [source[0].get(x, i), source[1].get(x, i), source[2].get(x, i)]
                };

                match direction {
                    Direction::Forward => {
                        let basis = (PI * (2 * i + 1) as f64 * coord as f64 / scale).cos();
                        for (acc, v) in sum.iter_mut().zip(values) {
                            *acc += v * basis;
                        }
                    }
                    Direction::Inverse => {
                        let coeff = if i == 0 { coeff1 } else { coeff2 };
                        let basis = (PI * (2 * coord + 1) as f64 * i as f64 / scale).cos();
                        for (acc, v) in sum.iter_mut().zip(values) {
                            *acc += coeff * v * basis;
                        }
                    }
                }
            }

            if direction == Direction::Forward {
                let coeff = if coord == 0 { coeff1 } else { coeff2 };
                for acc in &mut sum {
                    *acc *= coeff;
                }
            }

            for (plane, value) in dest.iter_mut().zip(sum) {
                plane.set(x, y, value);
            }
        }
    }
}

fn transform(direction: Direction, mut source: [Matrix; 3], width: u32, height: u32) -> [Matrix; 3] {
    let mut dest = [
        Matrix::new(width, height),
        Matrix::new(width, height),
        Matrix::new(width, height),
    ];

    transform_pass(direction, true, &source, &mut dest, width, height);
    source = dest.clone();
    transform_pass(direction, false, &source, &mut dest, width, height);

    dest
}

impl Image {
    /// 2D discrete cosine transform of each channel.
    ///
    /// Returns the R, G and B coefficient planes with orthonormal scaling
    /// (`sqrt(1/N)` for the first coefficient of each axis, `sqrt(2/N)`
    /// for the rest). The image itself is not modified.
    pub fn dct(&self) -> [Matrix; 3] {
        transform(
            Direction::Forward,
            self.to_matrices(),
            self.width(),
            self.height(),
        )
    }

    /// Reconstruct the image from per-channel DCT coefficient planes.
    ///
    /// The image is resized to `red`'s dimensions and overwritten with the
    /// inverse transform of the three planes. Reconstructed samples pass
    /// through the matrix-to-image conversion, so they are floored and
    /// saturated into `[0, 255]`.
    pub fn idct(&mut self, red: &Matrix, green: &Matrix, blue: &Matrix) {
        self.set_size(red.width(), red.height());

        let source = [red.clone(), green.clone(), blue.clone()];
        let [r, g, b] = transform(Direction::Inverse, source, self.width(), self.height());
        self.merge_channels_from_matrices(&r, &g, &b);
    }
}
