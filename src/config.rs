use std::path::PathBuf;

use crate::common::metadata::ECLevel;

pub const OUTPUT_FILE: &str = "qrcode.png";
pub const PROMPT: &str = "Enter the link: ";
pub const CONFIRMATION: &str = "QR code generated and saved as qrcode.png";

/// Settings for one run of the generator.
///
/// The `qrlink` binary always uses [`Config::default`], which writes `qrcode.png` to the
/// working directory with a 10px module and a 4 module quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: PathBuf,
    pub prompt: String,
    pub module_sz: u32,
    pub quiet_zone: u32,
    pub ec_level: ECLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(OUTPUT_FILE),
            prompt: PROMPT.to_string(),
            module_sz: 10,
            quiet_zone: 4,
            ec_level: ECLevel::M,
        }
    }
}

impl Config {
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn module_sz(mut self, module_sz: u32) -> Self {
        self.module_sz = module_sz;
        self
    }

    pub fn quiet_zone(mut self, quiet_zone: u32) -> Self {
        self.quiet_zone = quiet_zone;
        self
    }

    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }
}

#[cfg(test)]
mod config_tests {
    use std::path::Path;

    use super::Config;
    use crate::common::ECLevel;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output, Path::new("qrcode.png"));
        assert_eq!(config.prompt, "Enter the link: ");
        assert_eq!(config.module_sz, 10);
        assert_eq!(config.quiet_zone, 4);
        assert_eq!(config.ec_level, ECLevel::M);
    }

    #[test]
    fn test_overrides() {
        let config =
            Config::default().output("out/a.png").module_sz(3).quiet_zone(0).ec_level(ECLevel::H);
        assert_eq!(config.output, Path::new("out/a.png"));
        assert_eq!(config.module_sz, 3);
        assert_eq!(config.quiet_zone, 0);
        assert_eq!(config.ec_level, ECLevel::H);
    }
}
