mod code;
mod model;

pub use code::{ErrorCode, ERROR_CODES};
pub use model::{Error, Result};
