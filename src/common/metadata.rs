use std::fmt::{Display, Error, Formatter};
use std::ops::Deref;

use qrcodegen::QrCodeEcc;

use super::mask::MaskPattern;

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(40);

    pub fn new(version: u8) -> Self {
        debug_assert!((1..=40).contains(&version), "Invalid version");
        Self(version)
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<qrcodegen::Version> for Version {
    fn from(version: qrcodegen::Version) -> Self {
        Self::new(version.value())
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.0)
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

impl From<ECLevel> for QrCodeEcc {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => QrCodeEcc::Low,
            ECLevel::M => QrCodeEcc::Medium,
            ECLevel::Q => QrCodeEcc::Quartile,
            ECLevel::H => QrCodeEcc::High,
        }
    }
}

impl From<QrCodeEcc> for ECLevel {
    fn from(ecc: QrCodeEcc) -> Self {
        match ecc {
            QrCodeEcc::Low => ECLevel::L,
            QrCodeEcc::Medium => ECLevel::M,
            QrCodeEcc::Quartile => ECLevel::Q,
            QrCodeEcc::High => ECLevel::H,
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{self:?}")
    }
}

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    ver: Version,
    ecl: ECLevel,
    mask: MaskPattern,
}

impl Metadata {
    pub fn new(ver: Version, ecl: ECLevel, mask: MaskPattern) -> Self {
        Self { ver, ecl, mask }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{{ Version: {}, Ec level: {}, Mask: {} }}", self.ver, self.ecl, *self.mask)
    }
}

#[cfg(test)]
mod metadata_tests {
    use qrcodegen::QrCodeEcc;
    use test_case::test_case;

    use super::{ECLevel, Metadata, Version};
    use crate::MaskPattern;

    #[test_case(ECLevel::L)]
    #[test_case(ECLevel::M)]
    #[test_case(ECLevel::Q)]
    #[test_case(ECLevel::H)]
    fn test_ec_level_conversion(ecl: ECLevel) {
        assert_eq!(ECLevel::from(QrCodeEcc::from(ecl)), ecl);
    }

    #[test]
    fn test_ec_level_order() {
        assert!(ECLevel::L < ECLevel::M && ECLevel::M < ECLevel::Q && ECLevel::Q < ECLevel::H);
    }

    #[test]
    fn test_default_ec_level() {
        assert_eq!(ECLevel::default(), ECLevel::M);
    }

    #[test]
    fn test_metadata_display() {
        let meta = Metadata::new(Version::new(3), ECLevel::Q, MaskPattern::new(5));
        assert_eq!(meta.to_string(), "{ Version: 3, Ec level: Q, Mask: 5 }");
    }
}
