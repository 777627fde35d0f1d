// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner module for building the image set at startup.
//!
//! This module scans a directory for supported image formats, filters them,
//! and sorts them alphabetically by file name. The resulting order is the
//! index-to-image mapping of the lightbox.

use crate::config::IMAGE_EXTENSIONS;
use crate::domain::gallery::{ImageRef, ImageSet};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Scans `directory` (non-recursively) for images and returns them as an [`ImageSet`].
///
/// Returns an error if the path is not a readable directory.
pub fn scan_directory(directory: &Path) -> Result<ImageSet> {
    if !directory.is_dir() {
        return Err(Error::Io(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let mut image_files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    sort_image_files(&mut image_files);
    tracing::info!(
        "Found {} images in {}",
        image_files.len(),
        directory.display()
    );

    Ok(image_files
        .into_iter()
        .map(|path| ImageRef::new(path.to_string_lossy().into_owned()))
        .collect())
}

/// Checks if a file has a supported image extension (case-insensitive).
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Sorts image paths alphabetically by file name.
fn sort_image_files(image_files: &mut [PathBuf]) {
    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
