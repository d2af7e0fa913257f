use std::error::Error;

use qrlink::{Config, ECLevel, Generator};

fn main() -> Result<(), Box<dyn Error>> {
    // Same pipeline as the binary, but with a fixed link and a custom output
    let config = Config::default().output("demo_qr.png").ec_level(ECLevel::H).module_sz(6);
    let generator = Generator::with_config(config);

    let path = generator.run("https://example.com\n".as_bytes(), std::io::sink())?;
    println!("QR code saved to: {}", path.display());

    Ok(())
}
