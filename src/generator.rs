//! Turning an instant play URL into a printable PNG on disk

use crate::error::{Error, Result};
use crate::qr::QrEncoder;
use image::imageops::{self, FilterType};
use image::ImageFormat;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQr {
    /// URL encoded in the symbol
    pub url: String,
    /// Absolute path of the written PNG
    pub output: PathBuf,
    /// Edge length of the written image in pixels
    pub size: u32,
    /// Symbol version chosen by the encoder
    pub qr_version: String,
    /// Error correction level of the symbol
    pub ecc_level: String,
}

/// Encode `url` at high error correction, scale to `size`×`size` and write a PNG to `path`.
///
/// The file is created or overwritten; its parent directory must already exist.
pub fn generate_qr(url: &str, path: &Path, size: u32) -> Result<GeneratedQr> {
    generate_with(&QrEncoder::new(), url, path, size)
}

/// Same as [`generate_qr`] with a caller-supplied encoder.
pub fn generate_with(encoder: &QrEncoder, url: &str, path: &Path, size: u32) -> Result<GeneratedQr> {
    if size == 0 {
        return Err(Error::InvalidSize(size.to_string()));
    }

    let symbol = encoder.encode(url)?;
    let native = symbol.image.width();

    let image = if native == size {
        symbol.image
    } else {
        tracing::debug!(from = native, to = size, "Resizing QR image");
        imageops::resize(&symbol.image, size, size, FilterType::Nearest)
    };

    // The target is only opened once the PNG is fully encoded.
    let mut png = Cursor::new(Vec::new());
    image.write_to(&mut png, ImageFormat::Png)?;
    fs::write(path, png.into_inner())?;

    let output = std::path::absolute(path)?;
    tracing::info!(path = %output.display(), size, "Wrote QR image");

    Ok(GeneratedQr {
        url: url.to_string(),
        output,
        size,
        qr_version: symbol.version,
        ecc_level: format!("{:?}", symbol.ecc_level),
    })
}
