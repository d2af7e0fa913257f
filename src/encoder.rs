use image::GrayImage;
use tracing::debug;

use crate::builder::QRBuilder;
use crate::common::{error::QRResult, metadata::ECLevel};
use crate::config::Config;

/// Turns a piece of text into a scannable QR image.
pub trait Encode {
    fn encode(&self, text: &str) -> QRResult<GrayImage>;
}

/// Default [`Encode`] implementation backed by `qrcodegen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrCodeGen {
    ec_level: ECLevel,
    module_sz: u32,
    quiet_zone: u32,
}

impl Default for QrCodeGen {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for QrCodeGen {
    fn from(config: &Config) -> Self {
        let Config { ec_level, module_sz, quiet_zone, .. } = *config;
        Self { ec_level, module_sz, quiet_zone }
    }
}

impl Encode for QrCodeGen {
    fn encode(&self, text: &str) -> QRResult<GrayImage> {
        let qr = QRBuilder::new(text).ec_level(self.ec_level).build()?;
        let img = qr.render(self.module_sz, self.quiet_zone);
        debug!("Rendered {}x{} image", img.width(), img.height());
        Ok(img)
    }
}

impl<E: Encode + ?Sized> Encode for &E {
    fn encode(&self, text: &str) -> QRResult<GrayImage> {
        (**self).encode(text)
    }
}
