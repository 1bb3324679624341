//! Rasterlab Core - Raster image manipulation library
//!
//! This crate provides the core raster manipulation functionality for
//! Rasterlab: a policy-driven RGB pixel grid with configurable border,
//! overflow and interpolation behavior, plus resampling, per-pixel
//! operators, convolution, morphology and DCT analysis on top of it.

pub mod matrix;
mod ops;
pub mod policy;
pub mod raster;

pub use matrix::{Matrix, MatrixError};
pub use policy::{wrap_value, BorderBehavior, Interpolation, OverflowBehavior};
pub use raster::{BlendMode, DerivativeAxis, Image, Rgb};
