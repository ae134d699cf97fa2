mod macros;
mod types;

pub use types::*;
