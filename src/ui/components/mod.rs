pub mod product_browser;

pub use product_browser::*;
