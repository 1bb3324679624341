//! Dense 2D matrix of real values.
//!
//! [`Matrix`] is the shared representation for convolution kernels,
//! morphological structuring elements, and DCT coefficient planes. Reads
//! outside the bounds return `0.0` (zero-padded infinite extent), writes
//! outside the bounds are dropped, so kernel code never needs explicit
//! bounds checks.

use std::fmt;

use thiserror::Error;

use crate::raster::Image;

/// Error types for matrix arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The inner dimensions of a matrix product do not agree.
    #[error("incompatible shapes for multiply: {left_width}x{left_height} * {right_width}x{right_height}")]
    IncompatibleShapes {
        /// Width of the left operand.
        left_width: u32,
        /// Height of the left operand.
        left_height: u32,
        /// Width of the right operand.
        right_width: u32,
        /// Height of the right operand.
        right_height: u32,
    },
}

/// A dense, row-major grid of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    width: u32,
    height: u32,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a new matrix with all entries set to `0.0`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "matrix dimensions must be nonzero");
        Self {
            width,
            height,
            data: vec![0.0; (width * height) as usize],
        }
    }

    /// Matrix width (number of columns).
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Matrix height (number of rows).
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the entry at `(x, y)`.
    ///
    /// Coordinates outside the bounds read as `0.0`.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0.0;
        }
        self.data[(y * self.width as i64 + x) as usize]
    }

    /// Write the entry at `(x, y)`.
    ///
    /// Writes outside the bounds are silently dropped.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, value: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.data[(y * self.width as i64 + x) as usize] = value;
    }

    /// Fill the whole matrix from a row-major slice.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != width * height`.
    pub fn set_values(&mut self, values: &[f64]) {
        assert_eq!(
            values.len(),
            (self.width * self.height) as usize,
            "value count must match matrix size"
        );
        self.data.copy_from_slice(values);
    }

    /// Standard matrix product `self * other`.
    ///
    /// The number of columns of `self` must equal the number of rows of
    /// `other`; the result has `other`'s width and `self`'s height.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IncompatibleShapes`] when the inner dimensions
    /// do not agree.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.width != other.height {
            return Err(MatrixError::IncompatibleShapes {
                left_width: self.width,
                left_height: self.height,
                right_width: other.width,
                right_height: other.height,
            });
        }

        let mut result = Matrix::new(other.width, self.height);
        for y in 0..self.height as i64 {
            for x in 0..other.width as i64 {
                let mut sum = 0.0;
                for k in 0..self.width as i64 {
                    sum += self.get(k, y) * other.get(x, k);
                }
                result.set(x, y, sum);
            }
        }
        Ok(result)
    }

    /// Return the transposed matrix.
    pub fn transposed(&self) -> Matrix {
        let mut result = Matrix::new(self.height, self.width);
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                result.set(y, x, self.get(x, y));
            }
        }
        result
    }

    /// Render the matrix as a grayscale image.
    ///
    /// Each entry is floored and saturated into `[0, 255]`, then written to
    /// all three channels of the corresponding pixel.
    pub fn to_image(&self) -> Image {
        let mut image = Image::new(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let v = self.get(x as i64, y as i64);
                image.set_pixel(x as i64, y as i64, [v, v, v]);
            }
        }
        image
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
