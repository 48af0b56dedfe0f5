//! Command Line Interface (CLI) layer for TEXPAD.
//!
//! This module defines argument parsing (`args`) and the orchestration
//! logic (`runner`) for directory processing. It wires user-provided
//! options to the underlying library functionality exposed via
//! `texpad::api`.
//!
//! If you are embedding TEXPAD into another application, prefer using
//! the high-level `texpad::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
