//! Grayscale morphology.

use crate::matrix::Matrix;
use crate::raster::Image;

/// Which extreme a morphology pass tracks.
#[derive(Debug, Clone, Copy)]
enum MorphologyMode {
    Dilate,
    Erode,
}

impl MorphologyMode {
    /// Starting value for the running extreme.
    #[inline]
    fn initial(self) -> f64 {
        match self {
            MorphologyMode::Dilate => 0.0,
            MorphologyMode::Erode => 255.0,
        }
    }

    /// Fold a candidate into the running extreme.
    #[inline]
    fn pick(self, current: f64, candidate: f64) -> f64 {
        match self {
            MorphologyMode::Dilate => current.max(candidate),
            MorphologyMode::Erode => current.min(candidate),
        }
    }
}

impl Image {
    /// Morphological dilation with a structuring element.
    ///
    /// For every pixel, the element is laid over the frozen image with its
    /// `(center_x, center_y)` entry on the pixel, and the output is the
    /// per-channel maximum of `neighbor + entry` over all probed
    /// positions. Negative element entries mark positions that are not
    /// probed, so a flat (all-zero) element gives the classic maximum
    /// filter.
    pub fn dilate(&mut self, element: &Matrix, center_x: i64, center_y: i64) {
        self.morphology(MorphologyMode::Dilate, element, center_x, center_y);
    }

    /// Morphological erosion with a structuring element.
    ///
    /// Like [`dilate`](Self::dilate) but taking the per-channel minimum of
    /// `neighbor + entry`. Negative element entries are not probed.
    pub fn erode(&mut self, element: &Matrix, center_x: i64, center_y: i64) {
        self.morphology(MorphologyMode::Erode, element, center_x, center_y);
    }

    fn morphology(
        &mut self,
        mode: MorphologyMode,
        element: &Matrix,
        center_x: i64,
        center_y: i64,
    ) {
        let frozen = self.clone();

        self.for_each_pixel(|x, y, _| {
            let from_x = i64::from(x) - center_x;
            let from_y = i64::from(y) - center_y;

            let mut extremes = [mode.initial(); 3];
            for j in 0..i64::from(element.height()) {
                for i in 0..i64::from(element.width()) {
                    let value = element.get(i, j);
                    if value < 0.0 {
                        continue;
                    }

                    let color = frozen.get_pixel(from_x + i, from_y + j);
                    for (extreme, channel) in extremes.iter_mut().zip(color) {
                        *extreme = mode.pick(*extreme, f64::from(channel) + value);
                    }
                }
            }

            Some(extremes)
        });
    }
}
