pub mod error;
mod result;

pub use result::Result;
