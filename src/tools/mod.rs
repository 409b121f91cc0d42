//! File helpers shared by the CLI, the batch scanner and frame sources

use crate::error::DecodeError;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as images when walking a directory
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Read an image file's raw bytes for still decoding
pub fn read_image_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, DecodeError> {
    let bytes = fs::read(path.as_ref()).map_err(image::ImageError::IoError)?;
    Ok(bytes)
}

/// Check whether a path has an image extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Iterate image paths under `root` in sorted order, optionally truncated
pub fn dataset_iter<P: AsRef<Path>>(root: P, limit: Option<usize>) -> impl Iterator<Item = PathBuf> {
    let mut images = collect_images(root.as_ref());
    images.sort();
    if let Some(limit) = limit {
        images.truncate(limit);
    }
    images.into_iter()
}

/// Recursively collect image files under `root` (unsorted)
pub fn collect_images(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut images = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("Skipping unreadable directory {}: {}", dir.display(), err);
                continue;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if is_image_path(&path) {
                images.push(path);
            }
        }
    }

    images
}
