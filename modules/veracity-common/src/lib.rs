pub mod config;
pub mod domains;
pub mod error;
pub mod types;

pub use config::Config;
pub use domains::*;
pub use error::{Result, VeracityError};
pub use types::*;
