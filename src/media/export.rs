// SPDX-License-Identifier: MPL-2.0
//! Export of generated icons to disk.
//!
//! The payload already carries an encoded image, so export is a straight
//! byte write with no re-encode and no server round-trip.

use crate::error::{Error, Result};
use crate::media::ImagePayload;
use std::fs;
use std::path::Path;

/// Writes the payload's image bytes to the given path.
///
/// Creates parent directories if needed.
pub fn write_payload(payload: &ImagePayload, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, &payload.bytes)?;
    Ok(())
}

/// Default export filename for an icon, derived from its id.
#[must_use]
pub fn default_filename(icon_id: &str, extension: &str) -> String {
    format!("iconforge-{icon_id}.{extension}")
}

/// File-dialog filter extension matching the payload's MIME type.
#[must_use]
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "png",
    }
}

/// Validates that the payload decodes as a raster image before export.
///
/// Export itself would happily write garbage bytes; this gives the caller a
/// way to fail early with a meaningful error instead.
pub fn validate_payload(payload: &ImagePayload) -> Result<()> {
    image_rs::load_from_memory(&payload.bytes)
        .map(|_| ())
        .map_err(|e| Error::Image(format!("payload is not a valid image: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_payload() -> ImagePayload {
        let img = RgbaImage::new(2, 2);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).expect("encode");
        ImagePayload::new("image/png", buf.into_inner())
    }

    #[test]
    fn write_payload_creates_file_with_exact_bytes() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("icon.png");
        let payload = png_payload();

        write_payload(&payload, &path).expect("write");

        let written = std::fs::read(&path).expect("read back");
        assert_eq!(written, payload.bytes);
    }

    #[test]
    fn write_payload_creates_parent_directories() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join("deep").join("icon.png");

        write_payload(&png_payload(), &path).expect("write");
        assert!(path.exists());
    }

    #[test]
    fn default_filename_embeds_id_and_extension() {
        let name = default_filename("3f2c", "png");
        assert_eq!(name, "iconforge-3f2c.png");
    }

    #[test]
    fn extension_matches_mime() {
        assert_eq!(extension_for_mime("image/png"), "png");
        assert_eq!(extension_for_mime("image/jpeg"), "jpg");
        assert_eq!(extension_for_mime("image/webp"), "webp");
        assert_eq!(extension_for_mime("application/octet-stream"), "png");
    }

    #[test]
    fn validate_accepts_real_image() {
        assert!(validate_payload(&png_payload()).is_ok());
    }

    #[test]
    fn validate_rejects_garbage() {
        let payload = ImagePayload::new("image/png", b"garbage".to_vec());
        assert!(validate_payload(&payload).is_err());
    }
}
