//! QR symbol location and decoding
//!
//! Still images are normalized to single-channel luma before detection.
//! Live frames are sampled in their native 3-channel layout, so no
//! grayscale buffer is allocated for typical camera resolutions; very large
//! frames are converted in parallel up front instead.
//!
//! Grid location, perspective sampling and error correction are done by
//! `rqrr`. Grids that are located but fail to decode are skipped.

use crate::error::DecodeError;
use crate::frame::Frame;
use crate::models::{DecodedSymbol, Point};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, GrayImage};
use rqrr::PreparedImage;

/// Frames at least this large on both sides are converted to grayscale first
pub const LARGE_FRAME_DIM: usize = 1600;

/// Decode every symbol in encoded image bytes (JPEG, PNG, ...)
pub fn decode_still(bytes: &[u8]) -> Result<Vec<DecodedSymbol>, DecodeError> {
    let image = load_still(bytes)?;
    Ok(decode_image(&image))
}

/// Decode encoded image bytes into a pixel grid
pub fn load_still(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Decode every symbol in an already decoded image
pub fn decode_image(image: &DynamicImage) -> Vec<DecodedSymbol> {
    decode_gray(&image.to_luma8())
}

/// Decode an image, downscaling it first when its longest side exceeds `max_dim`
///
/// Polygons are reported in the coordinates of the original image.
pub fn decode_image_bounded(image: &DynamicImage, max_dim: Option<u32>) -> Vec<DecodedSymbol> {
    let (orig_w, orig_h) = image.dimensions();
    let Some(max_dim) = max_dim.filter(|&d| d > 0 && orig_w.max(orig_h) > d) else {
        return decode_image(image);
    };

    let resized = image.resize(max_dim, max_dim, FilterType::Triangle);
    let factor = orig_w as f32 / resized.width().max(1) as f32;
    log::debug!(
        "Downscaled {}x{} to {}x{} before decoding",
        orig_w,
        orig_h,
        resized.width(),
        resized.height()
    );
    decode_image(&resized)
        .into_iter()
        .map(|symbol| symbol.scaled(factor))
        .collect()
}

/// Decode every symbol in a grayscale image
pub fn decode_gray(gray: &GrayImage) -> Vec<DecodedSymbol> {
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    decode_luma(width, height, |x, y| gray.get_pixel(x as u32, y as u32)[0])
}

/// Decode every symbol in a live 3-channel frame
pub fn decode_frame(frame: &Frame) -> Vec<DecodedSymbol> {
    let (width, height) = (frame.width(), frame.height());
    if width >= LARGE_FRAME_DIM && height >= LARGE_FRAME_DIM {
        let gray = frame.to_grayscale();
        decode_luma(width, height, |x, y| gray[y * width + x])
    } else {
        decode_luma(width, height, |x, y| frame.luma_at(x, y))
    }
}

fn decode_luma<F>(width: usize, height: usize, fill: F) -> Vec<DecodedSymbol>
where
    F: FnMut(usize, usize) -> u8,
{
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut prepared = PreparedImage::prepare_from_greyscale(width, height, fill);
    let grids = prepared.detect_grids();
    log::debug!("Located {} candidate grids in {}x{}", grids.len(), width, height);

    let mut symbols = Vec::with_capacity(grids.len());
    for (idx, grid) in grids.iter().enumerate() {
        let mut payload = Vec::new();
        match grid.decode_to(&mut payload) {
            Ok(meta) => {
                log::debug!("Grid {} decoded: {:?}", idx, meta);
                let polygon = grid.bounds.iter().map(|p| Point::new(p.x, p.y)).collect();
                symbols.push(DecodedSymbol::new(payload, polygon));
            }
            Err(err) => {
                log::debug!("Grid {} failed to decode: {:?}", idx, err);
            }
        }
    }
    symbols
}
