// SkinConsult - app/mod.rs
//
// Application layer: orchestration and the shared catalog cache.
// Dependencies: core, platform, ui, util.

pub mod catalog_store;
pub mod consultant;
