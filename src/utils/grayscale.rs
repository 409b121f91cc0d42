//! Convert 3-channel pixels to grayscale
//! Y = 0.299*R + 0.587*G + 0.114*B
//! Uses fast integer arithmetic: Y = (76*R + 150*G + 29*B) >> 8

use rayon::prelude::*;

/// Coefficients for grayscale conversion: Y = (76*R + 150*G + 29*B) >> 8
const COEF_R: u32 = 76;
const COEF_G: u32 = 150;
const COEF_B: u32 = 29;

/// Order of the three channels in a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Blue, green, red (capture device default)
    #[default]
    Bgr,
    /// Red, green, blue
    Rgb,
}

impl ChannelOrder {
    /// Byte offsets of (red, green, blue) within a pixel
    #[inline]
    pub fn rgb_offsets(self) -> (usize, usize, usize) {
        match self {
            ChannelOrder::Bgr => (2, 1, 0),
            ChannelOrder::Rgb => (0, 1, 2),
        }
    }

    /// Reorder an RGB color into this channel order
    #[inline]
    pub fn pack(self, [r, g, b]: [u8; 3]) -> [u8; 3] {
        match self {
            ChannelOrder::Bgr => [b, g, r],
            ChannelOrder::Rgb => [r, g, b],
        }
    }
}

/// Luminance of one RGB triple
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let lum = (COEF_R * r as u32 + COEF_G * g as u32 + COEF_B * b as u32) >> 8;
    lum.min(255) as u8
}

/// Luminance of the packed pixel starting at `pixel[0]`
#[inline]
pub fn pixel_luma(pixel: &[u8], order: ChannelOrder) -> u8 {
    let (ri, gi, bi) = order.rgb_offsets();
    luma(pixel[ri], pixel[gi], pixel[bi])
}

/// Convert a packed 3-channel image to grayscale
pub fn to_grayscale(pixels: &[u8], width: usize, height: usize, order: ChannelOrder) -> Vec<u8> {
    pixels
        .chunks_exact(3)
        .take(width * height)
        .map(|px| pixel_luma(px, order))
        .collect()
}

/// Convert a packed 3-channel image to grayscale using parallel processing
pub fn to_grayscale_parallel(
    pixels: &[u8],
    width: usize,
    height: usize,
    order: ChannelOrder,
) -> Vec<u8> {
    let mut gray = vec![0u8; width * height];
    if width == 0 {
        return gray;
    }

    // Process rows in parallel
    gray.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        let row_start = y * width * 3;
        let src = &pixels[row_start..row_start + width * 3];
        for (out, px) in row.iter_mut().zip(src.chunks_exact(3)) {
            *out = pixel_luma(px, order);
        }
    });

    gray
}
