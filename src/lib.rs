// Library exports for the binaries and integration tests

pub mod backend;
pub mod config;
pub mod editor;
pub mod list;
pub mod movies;
pub mod secure_config;
pub mod session;
pub mod tmdb;

#[doc(hidden)]
pub mod ui;

pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
