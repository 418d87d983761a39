// SkinConsult - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and programmatic use. The `skinconsult` binary is a thin CLI over it.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
