pub mod config;
pub mod coverage;
pub mod status;
