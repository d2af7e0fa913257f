//! # qrlink
//!
//! Reads one line of text, encodes it as a QR code and saves the result as `qrcode.png`.
//!
//! QR symbol construction is delegated to [`qrcodegen`]. This crate only turns the
//! resulting module matrix into a PNG and wires the prompt, encoder and output file together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qrlink::{Config, Generator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Prompts on stdout, reads a line from stdin, writes ./qrcode.png
//! let generator = Generator::with_config(Config::default());
//! generator.run(std::io::stdin().lock(), std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Building a QR directly
//!
//! ```rust
//! use qrlink::{ECLevel, QRBuilder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("https://example.com").ec_level(ECLevel::Q).build()?;
//!
//! let img = qr.render(10, 4); // 10px modules, 4 module quiet zone
//! assert_eq!(img.width(), (qr.width() as u32 + 8) * 10);
//! # Ok(())
//! # }
//! ```
//!
//! ### Custom encoders
//!
//! [`Generator`] accepts anything implementing [`Encode`], so the encoding backend can be
//! swapped without touching the prompt or file handling.
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction, the default
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! The level is a minimum. The encoder raises it when that fits in the same version.

pub mod builder;
pub(crate) mod common;
pub mod config;
pub mod encoder;
pub mod generator;
pub mod logger;

pub use builder::{Module, QRBuilder, QR};
pub use common::{ECLevel, MaskPattern, Metadata, QRError, QRResult, Version};
pub use config::Config;
pub use encoder::{Encode, QrCodeGen};
pub use generator::Generator;
