pub mod error;
pub mod verify;

pub use error::*;
pub use verify::*;
