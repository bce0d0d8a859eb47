//! playqr - printable QR codes for Subsoccer instant play
//!
//! Builds the instant play link for a table, encodes it as a high-redundancy
//! QR code and writes a square PNG ready for sticker printing.
//!
//! # Example
//!
//! ```no_run
//! use playqr::{generate_qr, instant_play_url, output_filename};
//! use std::path::Path;
//!
//! fn main() -> playqr::Result<()> {
//!     let url = instant_play_url("https://subsoccer.app/instant-play.html", "table9");
//!     let name = output_filename("table9", playqr::link::DEFAULT_FILENAME);
//!
//!     let generated = generate_qr(&url, Path::new(&name), 600)?;
//!     println!("Saved {}", generated.output.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cli;
pub mod config;
pub mod error;
pub mod link;
pub mod logging;
pub mod qr;

#[cfg(feature = "encoder")]
#[cfg_attr(docsrs, doc(cfg(feature = "encoder")))]
pub mod driver;
#[cfg(feature = "encoder")]
#[cfg_attr(docsrs, doc(cfg(feature = "encoder")))]
pub mod generator;
#[cfg(feature = "encoder")]
#[cfg_attr(docsrs, doc(cfg(feature = "encoder")))]
pub mod output;

// Re-exports for convenience
pub use error::{Error, Result};

pub use cli::Positionals;
pub use config::{GeneratorOptions, LogRotation, LoggingOptions, PlayqrConfig};
pub use link::{instant_play_url, output_filename};
pub use qr::QrDecoder;

#[cfg(feature = "encoder")]
pub use driver::{Invocation, Report};
#[cfg(feature = "encoder")]
pub use generator::{GeneratedQr, generate_qr};
#[cfg(feature = "encoder")]
pub use qr::{QrEncoder, QrSymbol};
