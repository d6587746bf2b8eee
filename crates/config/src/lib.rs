mod error;
mod site;

pub mod raw;

pub use self::error::*;
pub use self::site::*;

type Result<T, E = ValidationError> = std::result::Result<T, E>;
