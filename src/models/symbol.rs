use super::Point;

/// A QR symbol located and decoded in one image or frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSymbol {
    /// Raw decoded bytes
    pub payload: Vec<u8>,
    /// Corner points in image coordinates (not necessarily convex or ordered)
    pub polygon: Vec<Point>,
}

impl DecodedSymbol {
    /// Create a symbol from its payload and outline
    pub fn new(payload: Vec<u8>, polygon: Vec<Point>) -> Self {
        Self { payload, polygon }
    }

    /// Payload as text, replacing invalid UTF-8 sequences
    pub fn payload_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    /// Map the polygon from a resized image back to the original resolution
    pub fn scaled(mut self, factor: f32) -> Self {
        for p in &mut self.polygon {
            *p = p.scale(factor);
        }
        self
    }
}
