//! Utility functions for image processing
//!
//! This module provides helpers shared by the decoder and the overlay:
//! - Grayscale conversion (3-channel frames to luminance)
//! - Geometry (convex hull, orientation tests)

pub mod geometry;
pub mod grayscale;
