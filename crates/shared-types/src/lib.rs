pub mod config;
pub mod error;
pub mod join;

pub use config::*;
pub use error::*;
pub use join::*;
