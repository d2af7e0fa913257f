use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat};
use tracing::debug;

use crate::common::error::{QRError, QRResult};
use crate::config::{Config, CONFIRMATION};
use crate::encoder::{Encode, QrCodeGen};

/// Prompts for a link, encodes it and saves the QR image.
#[derive(Debug, Clone)]
pub struct Generator<E> {
    encoder: E,
    config: Config,
}

impl Default for Generator<QrCodeGen> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl Generator<QrCodeGen> {
    pub fn with_config(config: Config) -> Self {
        Self { encoder: QrCodeGen::from(&config), config }
    }
}

impl<E: Encode> Generator<E> {
    pub fn new(encoder: E, config: Config) -> Self {
        Self { encoder, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs prompt, read, encode, save and confirm once. Returns the path written.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> QRResult<PathBuf> {
        output.write_all(self.config.prompt.as_bytes())?;
        output.flush()?;

        let link = read_link(input)?;
        debug!("Read link of {} bytes", link.len());

        let img = self.encoder.encode(&link)?;
        write_png(&img, &self.config.output)?;

        writeln!(output, "{CONFIRMATION}")?;
        output.flush()?;

        Ok(self.config.output.clone())
    }
}

/// Reads one line and strips its terminator. EOF before any byte is an error.
pub fn read_link<R: BufRead>(mut input: R) -> QRResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(QRError::NoInput);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Saves `img` as PNG, replacing whatever is at `path`.
pub fn write_png(img: &GrayImage, path: &Path) -> QRResult<()> {
    debug!("Saving {}x{} PNG to {}", img.width(), img.height(), path.display());
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
