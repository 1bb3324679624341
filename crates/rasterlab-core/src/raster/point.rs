//! Per-pixel operators.
//!
//! Everything in this module is built on [`Image::for_each_pixel`], so each
//! operator inherits the write-time overflow policy of the image it runs on.

use serde::{Deserialize, Serialize};

use crate::raster::Image;

/// Per-channel combination used by [`Image::blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Sum of the weighted channels.
    #[default]
    Add,
    /// Weighted channels of the other image subtracted from this one.
    Subtract,
    /// Product of the weighted channels.
    Multiply,
}

impl BlendMode {
    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BlendMode::Add => a + b,
            BlendMode::Subtract => a - b,
            BlendMode::Multiply => a * b,
        }
    }
}

impl Image {
    /// Fill the whole image with one color.
    ///
    /// The channels are floored and passed through the overflow policy like
    /// any other pixel write.
    pub fn fill(&mut self, color: [f64; 3]) {
        self.for_each_pixel(|_, _, _| Some(color));
    }

    /// Invert the image colors.
    pub fn invert(&mut self) {
        self.for_each_pixel(|_, _, [r, g, b]| {
            Some([
                f64::from(255 - r),
                f64::from(255 - g),
                f64::from(255 - b),
            ])
        });
    }

    /// Convert the image to grayscale using Rec. 709 luma weights.
    ///
    /// Each weighted channel is rounded before summing, so a pure white
    /// pixel lands on 254 rather than 255.
    pub fn to_grayscale(&mut self) {
        self.for_each_pixel(|_, _, [r, g, b]| {
            let value = (0.2126 * f64::from(r)).round()
                + (0.7152 * f64::from(g)).round()
                + (0.0722 * f64::from(b)).round();
            Some([value, value, value])
        });
    }

    /// Quantize each channel into `levels` evenly spaced output values.
    ///
    /// `shift` is added to every channel before quantization, which moves
    /// the cut points without changing the output values. The top input
    /// bucket computes above 255 and is brought back by the overflow
    /// policy, so with the default saturating policy the brightest inputs
    /// map to 255.
    ///
    /// # Panics
    ///
    /// Panics if `levels < 2`.
    pub fn threshold(&mut self, levels: u32, shift: f64) {
        assert!(levels >= 2, "threshold needs at least 2 levels");

        let levels = f64::from(levels);
        let helper = levels - 1.0;

        self.for_each_pixel(|_, _, color| {
            let mut result = [0.0; 3];
            for (out, channel) in result.iter_mut().zip(color) {
                let v = f64::from(channel) + shift;
                *out = (v / 255.0 * levels).floor() / helper * 255.0;
            }
            Some(result)
        });
    }

    /// Blend another image into this one.
    ///
    /// `ratio` is clamped into `[0, 1]` and converted into a weight per
    /// operand: below `0.5` this image keeps full weight and the other
    /// fades in, above `0.5` the other image has full weight and this one
    /// fades out. At exactly `0.5` both operands enter at full weight. The
    /// weighted channels are then combined with `mode` and written back
    /// through the overflow policy.
    ///
    /// The other image is read at the same coordinates through its own
    /// border behavior, so it does not need to match this image's size.
    pub fn blend(&mut self, other: &Image, ratio: f64, mode: BlendMode) {
        let ratio = ratio.clamp(0.0, 1.0);
        let c1 = if ratio <= 0.5 {
            1.0
        } else {
            1.0 - (ratio - 0.5) * 2.0
        };
        let c2 = if ratio > 0.5 { 1.0 } else { ratio * 2.0 };

        self.for_each_pixel(|x, y, color| {
            let theirs = other.get_pixel(i64::from(x), i64::from(y));
            let mut result = [0.0; 3];
            for ((out, mine), their) in result.iter_mut().zip(color).zip(theirs) {
                *out = mode.apply(f64::from(mine) * c1, f64::from(their) * c2);
            }
            Some(result)
        });
    }
}
