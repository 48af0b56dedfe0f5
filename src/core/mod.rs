//! Core processing building blocks: run parameters and the even-padding
//! transform. These are internal primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
