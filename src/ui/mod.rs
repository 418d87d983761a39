// SkinConsult - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: core (read-only models), util.
// Must NOT depend on: platform, direct file I/O.

pub mod report;
