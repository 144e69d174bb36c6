// Library exports for integration tests and reusable components

pub mod auth;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod paging;

// The UI tree is exported for the binary, not as public API
#[cfg(feature = "desktop")]
#[doc(hidden)]
pub mod ui;
