pub mod config;
pub mod fix;
