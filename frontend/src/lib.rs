//! Livestock monitoring dashboard UI.
//!
//! Library root so integration tests under `tests/` can import
//! components; the binary entry-point lives in `main.rs`.

pub mod components;
pub mod config;
pub mod pages;
pub mod routing;
