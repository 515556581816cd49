// Library exports for integration tests and reusable components

// Internal modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

pub mod creations;
pub mod dashboard;
pub mod models;
pub mod session;

// Test support (unit tests and the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
