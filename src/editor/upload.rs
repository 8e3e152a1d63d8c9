//! Image upload: file bytes to embedded data-URI tokens.
//!
//! Uploads are processed strictly sequentially, so insertion order always
//! matches the order files were handed in. A file that cannot be used is
//! skipped with a warning; the buffer is never left half-modified.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;

use super::buffer::ContentBuffer;

/// An image file queued for upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Original file name, used as the token's alt text.
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an image file from disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self { name, bytes })
    }
}

/// Encode an image file as a `data:` URI.
pub fn data_uri(file: &ImageFile) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
    format!("data:{};base64,{payload}", mime_for_name(&file.name))
}

/// Insert each file into the buffer as an image token, in input order.
///
/// Each token embeds the file's name as alt text and its data-URI as the
/// source. Files with no bytes are skipped (a no-op insertion) with a
/// warning. Returns the data-URIs that were inserted, in order.
pub fn upload_images(buffer: &mut ContentBuffer, files: &[ImageFile]) -> Vec<String> {
    let mut inserted = Vec::with_capacity(files.len());
    for file in files {
        if file.bytes.is_empty() {
            tracing::warn!(name = %file.name, "skipping empty image upload");
            continue;
        }
        let uri = data_uri(file);
        buffer.insert_image_at_cursor(&format!("![{}]({uri})", file.name));
        inserted.push(uri);
    }
    inserted
}

/// MIME type inferred from the file name's extension.
fn mime_for_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}
