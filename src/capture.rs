//! Frame sources and display sinks for the live scanning loop

use crate::error::FrameError;
use crate::frame::Frame;
use crate::tools;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// A capture device producing frames until it is exhausted or fails
pub trait FrameSource {
    /// Next frame; `Ok(None)` once the device stops producing frames
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameError>;

    /// Close the device. Must be safe to call more than once.
    fn release(&mut self);
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameError> {
        (**self).next_frame()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameError> {
        (**self).next_frame()
    }

    fn release(&mut self) {
        (**self).release()
    }
}

/// Receives each processed frame for display
pub trait FrameSink {
    /// Show one frame
    fn show(&mut self, frame: &Frame);
}

impl<F: FnMut(&Frame)> FrameSink for F {
    fn show(&mut self, frame: &Frame) {
        self(frame)
    }
}

/// Exclusive ownership of a frame source; releases it when dropped
pub struct CaptureGuard<S: FrameSource> {
    source: S,
}

impl<S: FrameSource> CaptureGuard<S> {
    /// Take ownership of an open source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Pull the next frame from the owned source
    pub fn next_frame(&mut self) -> Result<Option<Frame>, FrameError> {
        self.source.next_frame()
    }
}

impl<S: FrameSource> Drop for CaptureGuard<S> {
    fn drop(&mut self) {
        self.source.release();
        log::debug!("Capture device released");
    }
}

/// Frames queued in memory
#[derive(Debug, Default)]
pub struct MemorySource {
    frames: VecDeque<Result<Frame, FrameError>>,
    released: bool,
}

impl MemorySource {
    /// Queue frames to be returned in order
    pub fn new<I: IntoIterator<Item = Frame>>(frames: I) -> Self {
        Self {
            frames: frames.into_iter().map(Ok).collect(),
            released: false,
        }
    }

    /// Queue a device failure after the frames already queued
    pub fn push_failure(&mut self, err: FrameError) {
        self.frames.push_back(Err(err));
    }

    /// Check whether the source was released
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl FrameSource for MemorySource {
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameError> {
        if self.released {
            return Ok(None);
        }
        self.frames.pop_front().transpose()
    }

    fn release(&mut self) {
        self.frames.clear();
        self.released = true;
    }
}

/// Replays a directory of still images as a capture device
///
/// Images are read in sorted path order and delivered as BGR frames, the way
/// a camera driver hands them over.
#[derive(Debug)]
pub struct ImageSequenceSource {
    paths: VecDeque<PathBuf>,
    released: bool,
}

impl ImageSequenceSource {
    /// Open every image under `root`
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, FrameError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(FrameError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("frame directory {} not found", root.display()),
            )));
        }
        let mut paths = tools::collect_images(root);
        paths.sort();
        log::info!("Opened frame sequence {} ({} frames)", root.display(), paths.len());
        Ok(Self::from_paths(paths))
    }

    /// Replay the given image files in order
    pub fn from_paths<I: IntoIterator<Item = PathBuf>>(paths: I) -> Self {
        Self {
            paths: paths.into_iter().collect(),
            released: false,
        }
    }

    /// Frames not yet delivered
    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl FrameSource for ImageSequenceSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, FrameError> {
        if self.released {
            return Ok(None);
        }
        let Some(path) = self.paths.pop_front() else {
            return Ok(None);
        };
        let image = image::open(&path)?;
        log::debug!("Captured frame {}", path.display());
        Ok(Some(Frame::from_image(&image)))
    }

    fn release(&mut self) {
        self.paths.clear();
        self.released = true;
    }
}

/// Writes every shown frame as a numbered PNG
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    written: usize,
}

impl DirectorySink {
    /// Create the output directory if needed
    pub fn create<P: AsRef<Path>>(dir: P) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            written: 0,
        })
    }

    /// Number of frames written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for DirectorySink {
    fn show(&mut self, frame: &Frame) {
        let path = self.dir.join(format!("frame_{:05}.png", self.written));
        let Some(image) = frame.to_rgb_image() else {
            log::warn!("Skipping frame with inconsistent buffer size");
            return;
        };
        match image.save(&path) {
            Ok(()) => self.written += 1,
            Err(err) => log::warn!("Failed to write {}: {}", path.display(), err),
        }
    }
}
