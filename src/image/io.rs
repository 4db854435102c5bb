//! I/O helpers for grayscale images and JSON.
//!
//! - `load_working_image`: read a PNG/JPEG into a downscaled working image.
//! - `save_grayscale`: write a grayscale buffer to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::WorkingImage;
use image::GrayImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit grayscale and bound its size.
pub fn load_working_image(path: &Path, max_size: u32) -> Result<WorkingImage, String> {
    let gray = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    WorkingImage::from_gray(gray, max_size)
        .map_err(|e| format!("Failed to prepare {}: {e}", path.display()))
}

/// Decode an in-memory image into a working image.
pub fn decode_working_image(bytes: &[u8], max_size: u32) -> crate::Result<WorkingImage> {
    let gray = image::load_from_memory(bytes)?.into_luma8();
    WorkingImage::from_gray(gray, max_size)
}

/// Save a grayscale buffer; the format follows the file extension.
pub fn save_grayscale(image: &GrayImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
