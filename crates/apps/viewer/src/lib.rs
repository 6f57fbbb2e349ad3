pub mod app;
pub mod config;
pub mod controller;

pub use app::*;
pub use config::*;
pub use controller::*;
