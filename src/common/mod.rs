pub mod error;
pub mod mask;
pub mod metadata;

pub use error::*;
pub use mask::*;
pub use metadata::*;
