pub mod config;
pub mod open;
