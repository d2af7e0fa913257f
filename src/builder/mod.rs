mod qr;

pub use qr::{Module, QR};

use qrcodegen::QrCode;
use tracing::{debug, trace};

use crate::common::{error::QRResult, metadata::ECLevel};

pub struct QRBuilder<'a> {
    data: &'a str,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, ec_level: ECLevel::M }
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        format!("{{ Data len: {}, Ec level: {:?} }}", self.data.len(), self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        debug!("Generating QR {}", self.metadata());

        // Symbol construction is left to qrcodegen: smallest fitting version, best mask
        let code = QrCode::encode_text(self.data, self.ec_level.into())?;
        let qr = QR::from_qrcodegen(&code);

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        debug!(
            "QR generated {}: Dark cells: {}, Light cells: {}, Balance: {}%",
            qr.metadata(),
            dark_modules,
            total_modules - dark_modules,
            dark_modules * 100 / total_modules
        );
        trace!("\n{}", qr.to_str(1));

        Ok(qr)
    }
}
