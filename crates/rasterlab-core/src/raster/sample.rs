//! Fractional-coordinate sampling.
//!
//! [`Image::sample`] synthesizes a pixel at a non-integral position using
//! the image's interpolation method. All source reads go through
//! [`Image::get_pixel`], so the border policy shapes how sampling behaves
//! near and beyond the edges.
//!
//! Bicubic interpolation solves the cubic Hermite coefficient system: the
//! four surrounding pixels plus their x-, y- and cross-derivative estimates
//! determine a 4x4 coefficient surface which is evaluated at the fractional
//! offset.

use super::{Image, Rgb};
use crate::policy::Interpolation;

/// Axis selector for [`Image::derivative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivativeAxis {
    /// Partial derivative along x.
    X,
    /// Partial derivative along y.
    Y,
    /// Mixed partial derivative along x and y.
    XY,
}

type Mat4 = [[f64; 4]; 4];

/// Cubic Hermite basis matrix; its transpose is the right-hand factor of
/// the coefficient solve.
const HERMITE_BASIS: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [-3.0, 3.0, -2.0, -1.0],
    [2.0, -2.0, 1.0, 1.0],
];

fn mat4_multiply(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [[0.0; 4]; 4];
    for (i, row) in a.iter().enumerate() {
        for j in 0..4 {
            let mut sum = 0.0;
            for (k, value) in row.iter().enumerate() {
                sum += value * b[k][j];
            }
            out[i][j] = sum;
        }
    }
    out
}

fn mat4_transposed(a: &Mat4) -> Mat4 {
    let mut out = [[0.0; 4]; 4];
    for (i, row) in a.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            out[j][i] = *value;
        }
    }
    out
}

impl Image {
    /// Sample the image at a fractional position using the current
    /// interpolation method.
    ///
    /// Each channel is rounded to the nearest integer and mapped through
    /// the overflow policy, so bicubic overshoot resolves the same way any
    /// other out-of-range write would.
    pub fn sample(&self, x: f64, y: f64) -> Rgb {
        match self.interpolation() {
            Interpolation::Closest => {
                // Ties round toward positive infinity.
                self.get_pixel((x + 0.5).floor() as i64, (y + 0.5).floor() as i64)
            }
            Interpolation::Bilinear => self.finish_sample(self.sample_bilinear(x, y)),
            Interpolation::Bicubic => self.finish_sample(self.sample_bicubic(x, y)),
        }
    }

    fn finish_sample(&self, raw: [f64; 3]) -> Rgb {
        let mut out = [0u8; 3];
        for (channel, value) in out.iter_mut().zip(raw) {
            *channel = self.overflow().apply(value.round() as i64);
        }
        out
    }

    fn sample_bilinear(&self, x: f64, y: f64) -> [f64; 3] {
        let x0 = x.floor() as i64;
        let x1 = x.ceil() as i64;
        let y0 = y.floor() as i64;
        let y1 = y.ceil() as i64;
        let x_ratio = x - x.floor();
        let y_ratio = y - y.floor();

        let c00 = self.get_pixel(x0, y0);
        let c10 = self.get_pixel(x1, y0);
        let c01 = self.get_pixel(x0, y1);
        let c11 = self.get_pixel(x1, y1);

        let mut out = [0.0; 3];
        for (component, value) in out.iter_mut().enumerate() {
            let top = c00[component] as f64 * (1.0 - x_ratio) + c10[component] as f64 * x_ratio;
            let bottom = c01[component] as f64 * (1.0 - x_ratio) + c11[component] as f64 * x_ratio;
            *value = top * (1.0 - y_ratio) + bottom * y_ratio;
        }
        out
    }

    fn sample_bicubic(&self, x: f64, y: f64) -> [f64; 3] {
        let x0 = x.floor() as i64;
        let x1 = x.ceil() as i64;
        let y0 = y.floor() as i64;
        let y1 = y.ceil() as i64;
        let x_ratio = x - x.floor();
        let y_ratio = y - y.floor();

        let c00 = self.get_pixel(x0, y0);
        let c10 = self.get_pixel(x1, y0);
        let c01 = self.get_pixel(x0, y1);
        let c11 = self.get_pixel(x1, y1);

        let dx00 = self.derivative(x0, y0, DerivativeAxis::X);
        let dx10 = self.derivative(x1, y0, DerivativeAxis::X);
        let dx01 = self.derivative(x0, y1, DerivativeAxis::X);
        let dx11 = self.derivative(x1, y1, DerivativeAxis::X);

        let dy00 = self.derivative(x0, y0, DerivativeAxis::Y);
        let dy10 = self.derivative(x1, y0, DerivativeAxis::Y);
        let dy01 = self.derivative(x0, y1, DerivativeAxis::Y);
        let dy11 = self.derivative(x1, y1, DerivativeAxis::Y);

        let dxy00 = self.derivative(x0, y0, DerivativeAxis::XY);
        let dxy10 = self.derivative(x1, y0, DerivativeAxis::XY);
        let dxy01 = self.derivative(x0, y1, DerivativeAxis::XY);
        let dxy11 = self.derivative(x1, y1, DerivativeAxis::XY);

        let basis_t = mat4_transposed(&HERMITE_BASIS);

        let mut out = [0.0; 3];
        for (component, value) in out.iter_mut().enumerate() {
            // Corner samples and derivative estimates, in the Hermite
            // boundary-condition layout.
            let boundary: Mat4 = [
                [
                    c00[component] as f64,
                    c01[component] as f64,
                    dy00[component],
                    dy01[component],
                ],
                [
                    c10[component] as f64,
                    c11[component] as f64,
                    dy10[component],
                    dy11[component],
                ],
                [
                    dx00[component],
                    dx01[component],
                    dxy00[component],
                    dxy01[component],
                ],
                [
                    dx10[component],
                    dx11[component],
                    dxy10[component],
                    dxy11[component],
                ],
            ];

            let coefficients = mat4_multiply(&mat4_multiply(&HERMITE_BASIS, &boundary), &basis_t);

            let mut sum = 0.0;
            for (i, row) in coefficients.iter().enumerate() {
                for (j, coefficient) in row.iter().enumerate() {
                    sum += coefficient * x_ratio.powi(i as i32) * y_ratio.powi(j as i32);
                }
            }
            *value = sum;
        }
        out
    }

    /// Estimate the image derivative at integer coordinates with central
    /// differences over the neighbor pixels, one value per channel.
    ///
    /// [`DerivativeAxis::XY`] composes two central differences, giving the
    /// discrete mixed partial.
    pub fn derivative(&self, x: i64, y: i64, axis: DerivativeAxis) -> [f64; 3] {
        let mut out = [0.0; 3];
        match axis {
            DerivativeAxis::X => {
                let c1 = self.get_pixel(x + 1, y);
                let c2 = self.get_pixel(x - 1, y);
                for (component, value) in out.iter_mut().enumerate() {
                    *value = (c1[component] as f64 - c2[component] as f64) / 2.0;
                }
            }
            DerivativeAxis::Y => {
                let c1 = self.get_pixel(x, y + 1);
                let c2 = self.get_pixel(x, y - 1);
                for (component, value) in out.iter_mut().enumerate() {
                    *value = (c1[component] as f64 - c2[component] as f64) / 2.0;
                }
            }
            DerivativeAxis::XY => {
                let c1 = self.get_pixel(x + 1, y + 1);
                let c2 = self.get_pixel(x - 1, y + 1);
                let c3 = self.get_pixel(x + 1, y - 1);
                let c4 = self.get_pixel(x - 1, y - 1);
                for (component, value) in out.iter_mut().enumerate() {
                    let above = (c1[component] as f64 - c2[component] as f64) / 2.0;
                    let below = (c3[component] as f64 - c4[component] as f64) / 2.0;
                    *value = (above - below) / 2.0;
                }
            }
        }
        out
    }
}
