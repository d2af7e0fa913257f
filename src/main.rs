use std::error::Error;
use std::io;

use qrlink::{logger, Config, Generator};

fn main() -> Result<(), Box<dyn Error>> {
    logger::init_logger();

    let generator = Generator::with_config(Config::default());
    let path = generator.run(io::stdin().lock(), io::stdout().lock())?;
    tracing::debug!("Wrote {}", path.display());

    Ok(())
}
