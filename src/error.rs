//! Error types shared by the loader, the glitch primitives and the driver.

use std::io;
use thiserror::Error;

/// Errors that can occur while glitching a file.
#[derive(Error, Debug)]
pub enum GlitchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The buffer has no segment left between the start and end guards.
    #[error(
        "Buffer of {len} lines is too short for a guard band of {start_skip} start and {end_skip} end lines"
    )]
    GuardBand {
        len: usize,
        start_skip: usize,
        end_skip: usize,
    },

    #[error("Line {index} is empty, no byte to keep")]
    EmptySegment { index: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, GlitchError>;
