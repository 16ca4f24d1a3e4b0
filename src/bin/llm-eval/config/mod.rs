mod error;
mod load;
mod types;

pub use load::load_config;
pub use types::LoggingConfig;
