//! Scan-decode-verify pipeline
//!
//! [`Scanner`] ties the decoder, the overlay renderer and the verifier
//! together for three entry points:
//! - still images (`scan_still`, `scan_path`)
//! - live capture (`scan_live`), polling a [`FrameSource`] until a symbol
//!   decodes or the device stops
//! - batches of image files (`scan_batch`), verified in parallel

use crate::capture::{CaptureGuard, FrameSink, FrameSource};
use crate::config::ScanConfig;
use crate::decoder;
use crate::error::{DecodeError, FrameError};
use crate::frame::Frame;
use crate::models::{DecodedSymbol, ScanOutcome};
use crate::overlay::draw_outline;
use crate::registry::ProductRegistry;
use crate::tools;
use crate::verifier::Verifier;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Why the live loop stopped
#[derive(Debug)]
pub enum LiveStop {
    /// A frame yielded at least one symbol
    Decoded,
    /// The device stopped producing frames
    Exhausted,
    /// The device failed to deliver a frame
    DeviceFailure(FrameError),
}

/// Result of one live scanning session
#[derive(Debug)]
pub struct LiveScan {
    /// First symbol of the frame that ended the loop
    pub symbol: Option<DecodedSymbol>,
    /// Frames pulled from the device
    pub frames: usize,
    /// Loop termination reason
    pub stop: LiveStop,
}

/// One entry of a batch scan
#[derive(Debug)]
pub struct BatchItem {
    /// Image file
    pub path: PathBuf,
    /// Outcome, or why the file could not be decoded
    pub outcome: Result<ScanOutcome, DecodeError>,
}

/// Scans images and frames and verifies the decoded products
#[derive(Debug)]
pub struct Scanner<R> {
    verifier: Verifier<R>,
    config: ScanConfig,
}

impl<R: ProductRegistry> Scanner<R> {
    /// Create a scanner with default settings
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, ScanConfig::default())
    }

    /// Create a scanner with explicit settings
    pub fn with_config(registry: R, config: ScanConfig) -> Self {
        Self {
            verifier: Verifier::new(registry),
            config,
        }
    }

    /// Verifier owning the registry handle
    pub fn verifier(&self) -> &Verifier<R> {
        &self.verifier
    }

    /// Active settings
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Decode encoded image bytes and verify the first symbol
    pub fn scan_still(&self, bytes: &[u8]) -> Result<ScanOutcome, DecodeError> {
        let image = decoder::load_still(bytes)?;
        let symbols = decoder::decode_image_bounded(&image, self.config.max_dim);
        log::debug!("Still image yielded {} symbols", symbols.len());
        let outcome = self.verifier.verify(symbols.first());
        log::info!("Still scan: {}", outcome.headline());
        Ok(outcome)
    }

    /// Read an image file and scan it
    pub fn scan_path<P: AsRef<Path>>(&self, path: P) -> Result<ScanOutcome, DecodeError> {
        let bytes = tools::read_image_bytes(path.as_ref())?;
        self.scan_still(&bytes)
    }

    /// Decode one live frame and outline its symbols in place
    pub fn process_frame(&self, frame: &mut Frame) -> Vec<DecodedSymbol> {
        let symbols = decoder::decode_frame(frame);
        for symbol in &symbols {
            draw_outline(frame, &symbol.polygon, &self.config.outline);
        }
        symbols
    }

    /// Poll `source` until a frame yields a symbol or the device stops
    ///
    /// Every frame is handed to `sink` after its outlines are drawn. The
    /// source is released on every exit path. There is no timeout.
    pub fn scan_live<S, K>(&self, source: S, sink: &mut K) -> LiveScan
    where
        S: FrameSource,
        K: FrameSink + ?Sized,
    {
        let mut capture = CaptureGuard::new(source);
        let mut frames = 0usize;

        loop {
            let mut frame = match capture.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => {
                    log::info!("Capture ended after {} frames without a symbol", frames);
                    return LiveScan {
                        symbol: None,
                        frames,
                        stop: LiveStop::Exhausted,
                    };
                }
                Err(err) => {
                    log::warn!("Capture device failed after {} frames: {}", frames, err);
                    return LiveScan {
                        symbol: None,
                        frames,
                        stop: LiveStop::DeviceFailure(err),
                    };
                }
            };
            frames += 1;

            let symbols = self.process_frame(&mut frame);
            sink.show(&frame);

            if let Some(symbol) = symbols.into_iter().next() {
                log::info!("Symbol decoded on frame {}", frames);
                return LiveScan {
                    symbol: Some(symbol),
                    frames,
                    stop: LiveStop::Decoded,
                };
            }
        }
    }

    /// Run a live session and verify its symbol
    pub fn scan_live_verified<S, K>(&self, source: S, sink: &mut K) -> (LiveScan, ScanOutcome)
    where
        S: FrameSource,
        K: FrameSink + ?Sized,
    {
        let live = self.scan_live(source, sink);
        let outcome = self.verifier.verify(live.symbol.as_ref());
        log::info!("Live scan: {}", outcome.headline());
        (live, outcome)
    }
}

impl<R: ProductRegistry + Sync> Scanner<R> {
    /// Scan many image files in parallel, preserving input order
    pub fn scan_batch(&self, paths: &[PathBuf]) -> Vec<BatchItem> {
        paths
            .par_iter()
            .map(|path| BatchItem {
                path: path.clone(),
                outcome: self.scan_path(path),
            })
            .collect()
    }
}
