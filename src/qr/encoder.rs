//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{DEFAULT_MODULE_SIZE, native_dimension};
use image::{GrayImage, Luma};
use qrcode::{EcLevel, QrCode, Version};

/// A rendered QR symbol together with the parameters the encoder picked
#[derive(Debug, Clone)]
pub struct QrSymbol {
    /// Black-on-white raster including the quiet zone
    pub image: GrayImage,
    /// Symbol version, e.g. `5` or `M2` for micro codes
    pub version: String,
    /// Error correction level used
    pub ecc_level: EcLevel,
}

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    ecc_level: EcLevel,
    /// Pixels per module in the rendered image
    module_size: u32,
}

impl QrEncoder {
    /// Create a new QR encoder with printing defaults (High ECC, 10px modules)
    pub fn new() -> Self {
        Self {
            ecc_level: EcLevel::H,
            module_size: DEFAULT_MODULE_SIZE,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ecc_level(ecc_level: EcLevel) -> Self {
        Self {
            ecc_level,
            ..Self::new()
        }
    }

    /// Override the rendered module size in pixels (minimum 1)
    pub fn module_size(mut self, pixels: u32) -> Self {
        self.module_size = pixels.max(1);
        self
    }

    /// Error correction level this encoder uses
    pub fn ecc_level(&self) -> EcLevel {
        self.ecc_level
    }

    /// Encode text into a QR symbol rendered at the native module size.
    ///
    /// The smallest version that fits at the configured level is chosen.
    pub fn encode(&self, data: &str) -> Result<QrSymbol> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)
            .map_err(|e| {
                Error::QrEncode(format!(
                    "{} bytes at ECC level {:?}: {e}",
                    data.len(),
                    self.ecc_level
                ))
            })?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_size, self.module_size)
            .dark_color(Luma([0u8]))
            .light_color(Luma([255u8]))
            .build();

        let version = match code.version() {
            Version::Normal(n) => n.to_string(),
            Version::Micro(n) => format!("M{n}"),
        };

        tracing::debug!(
            version = %version,
            ecc_level = ?self.ecc_level,
            modules = code.width(),
            dimension = image.width(),
            "Encoded QR symbol"
        );

        debug_assert_eq!(
            image.width(),
            native_dimension(code.width() as u32, self.module_size)
        );

        Ok(QrSymbol {
            image,
            version,
            ecc_level: self.ecc_level,
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
