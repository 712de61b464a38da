//! Random operator squad picker: load a roster JSON, draw twelve operators
//! under configurable weighting, assign skill levels, and export the result
//! as a copilot plan document.

pub mod assets;
pub mod cli;
pub mod engine;
pub mod export;
pub mod roster;
pub mod server;
