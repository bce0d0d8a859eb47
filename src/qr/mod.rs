//! QR code encoding and decoding
//!
//! Encoding (URL to image) is backed by the `qrcode` crate and only compiled
//! with the `encoder` feature. Decoding is used to verify written images.

mod decoder;
#[cfg(feature = "encoder")]
mod encoder;

pub use decoder::QrDecoder;
#[cfg(feature = "encoder")]
pub use encoder::{QrEncoder, QrSymbol};

/// Pixels per QR module in the natively rendered image.
pub const DEFAULT_MODULE_SIZE: u32 = 10;

/// Width of the light border around the symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Edge length in pixels of a symbol `modules` wide rendered at `module_size`.
pub fn native_dimension(modules: u32, module_size: u32) -> u32 {
    (modules + 2 * QUIET_ZONE_MODULES) * module_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_dimension_includes_quiet_zone() {
        // Version 1 symbols are 21 modules wide
        assert_eq!(native_dimension(21, DEFAULT_MODULE_SIZE), 290);
        assert_eq!(native_dimension(37, 1), 45);
    }
}
