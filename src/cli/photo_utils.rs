use anyhow::{anyhow, Result};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing::warn;

use crate::cli::ui;
use crate::models::{DecodedPhoto, Photo};

/// Terminal width (in cells) used for photo previews
const PREVIEW_WIDTH: u32 = 40;

/// Read an image file for upload. The bytes are stored as-is; no format check.
pub fn read_upload(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(anyhow!("Image file not found: {}", path.display()));
    }
    let bytes = fs::read(path)
        .map_err(|e| anyhow!("Failed to read image {}: {}", path.display(), e))?;
    Ok(bytes)
}

/// One-line description: "640x480 png, 12.3 KB"
pub fn describe(decoded: &DecodedPhoto) -> String {
    let (w, h) = decoded.dimensions();
    let format = decoded
        .format
        .map(|f| format!("{:?}", f).to_lowercase())
        .unwrap_or_else(|| "image".to_string());
    format!("{}x{} {}, {}", w, h, format, format_size(decoded.raw.len()))
}

pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

/// Decode and show a visit photo. A photo that cannot be decoded is
/// reported inline; the caller keeps rendering.
pub fn show_photo(photo: &Photo, preview: bool) {
    let decoded = match photo.decode() {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(bytes = photo.len(), error = %e, "photo decode failed");
            ui::warning(&format!("Photo could not be displayed ({})", e));
            return;
        }
    };

    println!("  photo: {}", describe(&decoded));

    if preview && io::stdout().is_terminal() {
        let config = viuer::Config {
            width: Some(PREVIEW_WIDTH),
            absolute_offset: false,
            ..Default::default()
        };
        if let Err(e) = viuer::print(&decoded.image, &config) {
            ui::warning(&format!("Photo preview unavailable ({})", e));
        }
    }
}
