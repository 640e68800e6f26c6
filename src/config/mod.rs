pub mod constants;
pub mod lib;
pub mod models;
pub mod validation;

pub use lib::{ConfigError, load_config};
