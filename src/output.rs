//! PNG export for rendered frames.
//!
//! The renderer produces display-ready 8-bit RGB values, so export is a
//! plain encode with no tone mapping or gamma step involved.

use image::{ImageBuffer, Rgb};
use log::{info, warn};

/// Save an 8-bit RGB frame as a PNG file.
///
/// Returns false after logging when the file cannot be written (invalid
/// path, permissions, disk space) so the caller can decide the exit status.
pub fn save_image_as_png(image: &ImageBuffer<Rgb<u8>, Vec<u8>>, output_path: &str) -> bool {
    match image.save(output_path) {
        Ok(_) => {
            info!("Image saved as {}", output_path);
            true
        }
        Err(e) => {
            warn!("Failed to save image: {}", e);
            false
        }
    }
}
