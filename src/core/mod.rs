//! Core business logic modules.

pub mod classifier;
pub mod namer;
pub mod pipeline;
