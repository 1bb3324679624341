//! Neighborhood and frequency-domain operators.
//!
//! Each operator here reads from a frozen copy of the image (or from
//! separate coefficient matrices) and writes results back through the
//! normal pixel write path, so border and overflow policies apply
//! uniformly.

mod convolve;
mod dct;
mod morphology;
