pub mod error;
pub mod result;

pub use error::SizingError;
pub use result::Result;
