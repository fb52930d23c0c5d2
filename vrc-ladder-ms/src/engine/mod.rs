pub mod config;
pub mod cycle;
