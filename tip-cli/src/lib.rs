pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
