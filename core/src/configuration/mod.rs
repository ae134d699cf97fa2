pub use error::*;
pub use property::*;
pub use service::*;
pub use store::*;

mod error;
mod property;
mod service;
mod store;
