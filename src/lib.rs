//! Movie Subtitler Library
//!
//! A library for pairing movie folders with subtitles from opensubtitles.org.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
