pub mod app;
pub mod browse_context;
pub mod components;

pub use app::*;
