pub mod app;
pub mod dir;
pub mod gui;
pub mod logger;
pub mod services;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
