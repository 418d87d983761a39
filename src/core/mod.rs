// SkinConsult - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, serde, csv, chrono, tracing.
// Must NOT depend on: ui, platform, app, or touch the file system directly.

pub mod catalog;
pub mod classify;
pub mod export;
pub mod model;
pub mod routine;
