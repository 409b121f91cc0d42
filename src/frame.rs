//! Packed 3-channel frames as produced by a capture device

use crate::error::FrameError;
use crate::utils::grayscale::{self, ChannelOrder};
use image::{DynamicImage, RgbImage};

/// A `width x height` pixel grid with 3 interleaved channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl Frame {
    /// Wrap a packed buffer; its length must be `width * height * 3`
    pub fn new(
        width: usize,
        height: usize,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, FrameError> {
        let expected = width * height * 3;
        if data.len() != expected {
            return Err(FrameError::Layout {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Create a frame filled with one RGB color
    pub fn filled(width: usize, height: usize, order: ChannelOrder, rgb: [u8; 3]) -> Self {
        let px = order.pack(rgb);
        let data = px.iter().copied().cycle().take(width * height * 3).collect();
        Self {
            width,
            height,
            order,
            data,
        }
    }

    /// Convert a decoded image into a BGR frame, as a camera would deliver it
    pub fn from_image(image: &DynamicImage) -> Self {
        let rgb = image.to_rgb8();
        let (width, height) = (rgb.width() as usize, rgb.height() as usize);
        let mut data = rgb.into_raw();
        for px in data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }
        Self {
            width,
            height,
            order: ChannelOrder::Bgr,
            data,
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel order of the packed data
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Packed pixel data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Check that (x, y) lies inside the frame
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Packed channels of the pixel at (x, y)
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> &[u8] {
        let idx = (y * self.width + x) * 3;
        &self.data[idx..idx + 3]
    }

    /// RGB color of the pixel at (x, y)
    pub fn rgb_at(&self, x: usize, y: usize) -> [u8; 3] {
        let px = self.pixel(x, y);
        let (ri, gi, bi) = self.order.rgb_offsets();
        [px[ri], px[gi], px[bi]]
    }

    /// Luminance of the pixel at (x, y)
    #[inline]
    pub fn luma_at(&self, x: usize, y: usize) -> u8 {
        grayscale::pixel_luma(self.pixel(x, y), self.order)
    }

    /// Write an RGB color at (x, y); coordinates outside the frame are ignored
    #[inline]
    pub fn put_pixel(&mut self, x: i64, y: i64, rgb: [u8; 3]) {
        if !self.contains(x, y) {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 3;
        self.data[idx..idx + 3].copy_from_slice(&self.order.pack(rgb));
    }

    /// Grayscale copy of the frame
    pub fn to_grayscale(&self) -> Vec<u8> {
        grayscale::to_grayscale_parallel(&self.data, self.width, self.height, self.order)
    }

    /// RGB image copy of the frame
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        let mut data = self.data.clone();
        if self.order == ChannelOrder::Bgr {
            for px in data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
        }
        RgbImage::from_raw(self.width as u32, self.height as u32, data)
    }
}
